use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Bitlist64, Bitvector2, ToBytes};

impl Serialize for Bitvector2 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.bytes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Bitvector2 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        Bitvector2::from_bytes(&bytes).map_err(de::Error::custom)
    }
}

#[derive(Serialize, Deserialize)]
struct EncodedBitlist64 {
    word_count: usize,
    bytes: Vec<u8>,
}

impl Serialize for Bitlist64 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        EncodedBitlist64 {
            word_count: self.word_count(),
            bytes: self.bytes(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Bitlist64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = EncodedBitlist64::deserialize(deserializer)?;
        Bitlist64::from_bytes(&encoded.bytes, encoded.word_count).map_err(de::Error::custom)
    }
}
