use bitfield::{BitLength, BitSupport, Bitlist64, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, ToBytes, Word};
use proptest::prelude::*;

proptest! {
    #[test]
    fn length_is_derived_from_words(words in arbitrary_words(8)) {
        let bits = Bitlist64::from_words(words.clone());
        assert_eq!(bits.bit_len(), words.len() as u64 * 64);
        assert_eq!(bits.len(), bits.bit_len());
    }

    #[test]
    fn new_rounds_up_to_whole_words(bit_count in 0u64..1000) {
        let bits = Bitlist64::new(bit_count);
        assert_eq!(bits.word_count() as u64, bit_count.div_ceil(64));
        assert_eq!(bits.bit_len() % 64, 0);
        assert!(bits.bit_len() >= bit_count);
        assert_eq!(bits.count(), 0);
        assert!(bits.bytes().is_empty());
    }

    #[test]
    fn bit_at_matches_words(bits in arbitrary_bitlist64(8)) {
        for index in 0..bits.bit_len() {
            let word = bits.words()[(index / 64) as usize];
            assert_eq!(bits.bit_at(index), (word >> (index % 64)) & 1 == 1);
        }
    }

    #[test]
    fn out_of_bounds_is_ignored(mut bits in arbitrary_bitlist64(4), offset in 0u64..1000) {
        let index = bits.bit_len() + offset;
        let before = bits.clone();
        assert!(!bits.bit_at(index));
        bits.set_bit_at(index, true);
        assert_eq!(bits, before);
        assert!(!bits.bit_at(u64::MAX));
    }

    #[test]
    fn set_bit_at_is_idempotent(mut bits in arbitrary_bitlist64(4), seed in any::<u64>()) {
        prop_assume!(bits.bit_len() > 0);
        let index = seed % bits.bit_len();
        for _ in 0..2 {
            bits.set_bit_at(index, true);
            assert!(bits.bit_at(index));
        }
        for _ in 0..2 {
            bits.set_bit_at(index, false);
            assert!(!bits.bit_at(index));
        }
    }

    #[test]
    fn count_matches_bit_indices(bits in arbitrary_bitlist64(8)) {
        let indices = bits.bit_indices();
        assert_eq!(indices.len() as u64, bits.count());
        assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        for index in indices {
            assert!(bits.bit_at(index));
        }
    }

    #[test]
    fn bit_indices_matches_naive_scan(bits in arbitrary_bitlist64(8)) {
        let expected: Vec<u64> = (0..bits.bit_len()).filter(|index| bits.bit_at(*index)).collect();
        assert_eq!(bits.bit_indices(), expected);
    }

    #[test]
    fn bit_indices_into_stops_at_capacity(bits in arbitrary_bitlist64(4), capacity in 0usize..300) {
        let all = bits.bit_indices();
        let mut destination = vec![u64::MAX; capacity];
        let written = bits.bit_indices_into(&mut destination);
        assert_eq!(written, capacity.min(all.len()));
        assert_eq!(&destination[..written], &all[..written]);
        assert!(destination[written..].iter().all(|slot| *slot == u64::MAX));
    }

    #[test]
    fn bytes_round_trip(bits in arbitrary_bitlist64(8)) {
        let bytes = bits.bytes();
        assert!(bytes.len() <= bits.word_count() * 8);
        assert_ne!(bytes.last(), Some(&0));
        let decoded = Bitlist64::from_bytes(&bytes, bits.word_count()).unwrap();
        assert_eq!(decoded, bits);
        assert_eq!(decoded.bytes(), bytes);
    }

    #[test]
    fn contains_is_reflexive(bits in arbitrary_bitlist64(8)) {
        assert!(bits.contains(&bits));
    }

    #[test]
    fn overlaps_self_iff_nonzero(bits in arbitrary_bitlist64(8)) {
        prop_assume!(bits.bit_len() > 0);
        assert_eq!(bits.overlaps(&bits), bits.count() > 0);
    }

    #[test]
    fn contains_matches_bitwise_definition((left, right) in equal_length_bitlists(6)) {
        let expected = right.bit_indices().into_iter().all(|index| left.bit_at(index));
        assert_eq!(left.contains(&right), expected);
        assert!(left.or(&right).contains(&left));
        assert!(left.contains(&left.and(&right)));
    }

    #[test]
    fn overlaps_matches_intersection((left, right) in equal_length_bitlists(6)) {
        assert_eq!(left.overlaps(&right), !left.and(&right).is_zero());
        assert_eq!(left.overlaps(&right), right.overlaps(&left));
    }

    #[test]
    fn binary_operations_are_bitwise((left, right) in equal_length_bitlists(6)) {
        let (or, and, xor) = (left.or(&right), left.and(&right), left.xor(&right));
        for index in 0..left.bit_len() {
            let (l, r) = (left.bit_at(index), right.bit_at(index));
            assert_eq!(or.bit_at(index), l || r);
            assert_eq!(and.bit_at(index), l && r);
            assert_eq!(xor.bit_at(index), l ^ r);
        }
    }

    #[test]
    fn binary_operations_commute((left, right) in equal_length_bitlists(6)) {
        assert_eq!(left.or(&right), right.or(&left));
        assert_eq!(left.and(&right), right.and(&left));
        assert_eq!(left.xor(&right), right.xor(&left));
    }

    #[test]
    fn self_identities(bits in arbitrary_bitlist64(6)) {
        assert_eq!(bits.and(&bits), bits);
        assert_eq!(bits.or(&bits), bits);
        assert!(bits.xor(&bits).is_zero());
        assert_eq!(bits.not().not(), bits);
        assert_eq!(bits.not().count(), bits.bit_len() - bits.count());
    }

    #[test]
    fn into_forms_match_allocating_forms((left, right) in equal_length_bitlists(6), garbage in any::<u64>()) {
        let mut destination = Bitlist64::from_words(vec![garbage; left.word_count()]);
        left.or_into(&right, &mut destination);
        assert_eq!(destination, left.or(&right));
        left.and_into(&right, &mut destination);
        assert_eq!(destination, left.and(&right));
        left.xor_into(&right, &mut destination);
        assert_eq!(destination, left.xor(&right));
        left.not_into(&mut destination);
        assert_eq!(destination, left.not());
    }

    #[test]
    fn assign_forms_match_allocating_forms((left, right) in equal_length_bitlists(6)) {
        let mut target = left.clone();
        target.bitor_assign(&right);
        assert_eq!(target, left.or(&right));
        let mut target = left.clone();
        target.bitand_assign(&right);
        assert_eq!(target, left.and(&right));
        let mut target = left.clone();
        target.bitxor_assign(&right);
        assert_eq!(target, left.xor(&right));
    }

    #[test]
    fn operators_match_methods((left, right) in equal_length_bitlists(6)) {
        assert_eq!(&left | &right, left.or(&right));
        assert_eq!(&left & &right, left.and(&right));
        assert_eq!(&left ^ &right, left.xor(&right));
        assert_eq!(!&left, left.not());
        let mut target = left.clone();
        target ^= &right;
        target ^= &right;
        assert_eq!(target, left);
    }

    #[test]
    fn clone_is_independent(bits in arbitrary_bitlist64(4)) {
        prop_assume!(bits.bit_len() > 0);
        let mut copy = bits.clone();
        let flipped = !bits.bit_at(0);
        copy.set_bit_at(0, flipped);
        assert_ne!(copy.bit_at(0), bits.bit_at(0));
    }
}

#[test]
fn trailing_zero_word_is_trimmed() {
    let bits = Bitlist64::from_words(vec![0x0000_0000_0000_0005, 0x0]);
    assert_eq!(bits.bytes(), vec![0x05]);
    assert_eq!(bits.bit_indices(), vec![0, 2]);
    assert_eq!(bits.count(), 2);
}

#[test]
fn trimming_keeps_interior_zero_bytes() {
    let bits = Bitlist64::from_words(vec![0x0, 0x0000_0000_0001_0000, 0x0]);
    assert_eq!(bits.bytes(), vec![0, 0, 0, 0, 0, 0, 0, 0, 0x00, 0x00, 0x01]);
    assert_eq!(bits.bit_indices(), vec![80]);
}

#[test]
fn full_words_are_not_trimmed() {
    let bits = Bitlist64::from_words(vec![Word::MAX, 1 << 63]);
    assert_eq!(bits.bytes().len(), 16);
    assert_eq!(bits.bytes()[15], 0x80);
    assert_eq!(bits.count(), 65);
}

#[test]
fn all_zero_serializes_empty() {
    assert!(Bitlist64::from_words(vec![0; 4]).bytes().is_empty());
    assert!(Bitlist64::default().bytes().is_empty());
}

#[test]
fn set_algebra_scenario() {
    let left = Bitlist64::from_words(vec![0b0110]);
    let right = Bitlist64::from_words(vec![0b0011]);
    assert_eq!(left.or(&right).words(), &[0b0111]);
    assert_eq!(left.and(&right).words(), &[0b0010]);
    assert_eq!(left.xor(&right).words(), &[0b0101]);
    assert!(!left.contains(&right));
    assert!(!right.contains(&left));
    assert!(left.overlaps(&right));
}

#[test]
fn disjoint_do_not_overlap() {
    let left = Bitlist64::from_words(vec![0b0100, 0]);
    let right = Bitlist64::from_words(vec![0b0011, 1 << 40]);
    assert!(!left.overlaps(&right));
    assert!(!Bitlist64::default().overlaps(&Bitlist64::default()));
}

#[test]
fn zero_length_not_is_unchanged() {
    let empty = Bitlist64::default();
    assert_eq!(empty.not(), empty);
    assert!(empty.contains(&empty));
    assert!(empty.bit_indices().is_empty());
    let mut destination = Bitlist64::default();
    empty.not_into(&mut destination);
    assert_eq!(destination, empty);
}

#[test]
fn bit_indices_into_partial() {
    let bits = Bitlist64::from_words(vec![0b1010, 0b1]);
    let mut destination = [0u64; 2];
    assert_eq!(bits.bit_indices_into(&mut destination), 2);
    assert_eq!(destination, [1, 3]);
    let mut empty: [u64; 0] = [];
    assert_eq!(bits.bit_indices_into(&mut empty), 0);
}

#[test]
fn decoding_rejects_oversized_input() {
    let error = Bitlist64::from_bytes(&[1; 9], 1).unwrap_err();
    assert_eq!(error, bitfield::BitfieldError::TooManyBytes { max: 8, actual: 9 });
    assert_eq!(Bitlist64::from_bytes(&[], 0).unwrap(), Bitlist64::default());
    assert_eq!(Bitlist64::from_bytes(&[0x05], 2).unwrap().words(), &[0x05, 0]);
}

#[test]
fn display_lists_bits_from_index_zero() {
    let bits = Bitlist64::from_words(vec![0b101]);
    let rendered = bits.to_string();
    assert_eq!(rendered.len(), 64);
    assert!(rendered.starts_with("101000"));
}

#[test]
#[should_panic(expected = "bitlists are different lengths")]
fn contains_rejects_length_mismatch() {
    let _ = Bitlist64::new(64).contains(&Bitlist64::new(128));
}

#[test]
#[should_panic(expected = "bitlists are different lengths")]
fn overlaps_rejects_length_mismatch() {
    let _ = Bitlist64::new(64).overlaps(&Bitlist64::default());
}

#[test]
#[should_panic(expected = "bitlists are different lengths")]
fn or_rejects_length_mismatch() {
    let _ = Bitlist64::new(64).or(&Bitlist64::new(128));
}

#[test]
#[should_panic(expected = "bitlists are different lengths")]
fn and_into_rejects_destination_mismatch() {
    let mut destination = Bitlist64::new(128);
    Bitlist64::new(64).and_into(&Bitlist64::new(64), &mut destination);
}

#[test]
#[should_panic(expected = "bitlists are different lengths")]
fn xor_assign_rejects_length_mismatch() {
    let mut target = Bitlist64::new(64);
    target ^= &Bitlist64::new(192);
}

#[test]
#[should_panic(expected = "bitlists are different lengths")]
fn and_rejects_length_mismatch() {
    let _ = Bitlist64::new(128).and(&Bitlist64::new(64));
}

#[test]
#[should_panic(expected = "bitlists are different lengths")]
fn xor_rejects_length_mismatch() {
    let _ = Bitlist64::new(64).xor(&Bitlist64::default());
}

#[test]
#[should_panic(expected = "bitlists are different lengths")]
fn or_into_rejects_other_mismatch() {
    let mut destination = Bitlist64::new(64);
    Bitlist64::new(64).or_into(&Bitlist64::new(128), &mut destination);
}

#[test]
#[should_panic(expected = "bitlists are different lengths")]
fn xor_into_rejects_other_mismatch() {
    let mut destination = Bitlist64::new(128);
    Bitlist64::new(128).xor_into(&Bitlist64::new(64), &mut destination);
}

#[test]
#[should_panic(expected = "bitlists are different lengths")]
fn not_into_rejects_destination_mismatch() {
    let mut destination = Bitlist64::new(64);
    Bitlist64::new(128).not_into(&mut destination);
}

#[test]
#[should_panic(expected = "bitlists are different lengths")]
fn or_assign_rejects_length_mismatch() {
    let mut target = Bitlist64::new(64);
    target |= &Bitlist64::new(128);
}

#[test]
#[should_panic(expected = "bitlists are different lengths")]
fn and_assign_rejects_length_mismatch() {
    let mut target = Bitlist64::new(128);
    target &= &Bitlist64::new(64);
}

#[test]
fn assign_random_stays_in_bounds() {
    use rand::SeedableRng;
    let mut random_number_generator = rand::rngs::SmallRng::seed_from_u64(7);
    let mut bits = Bitlist64::new(256);
    bits.assign_random(&mut random_number_generator);
    assert_eq!(bits.bit_len(), 256);
    assert!(bits.count() > 0);
    assert_eq!(bits.bit_indices().len() as u64, bits.count());
}

fn sparse_word() -> impl Strategy<Value = Word> {
    prop_oneof![
        Just(0),
        any::<Word>(),
        (0u32..64).prop_map(|shift| 1 << shift),
        (0u32..64).prop_map(|shift| Word::MAX >> shift),
    ]
}

fn arbitrary_words(max_words: usize) -> impl Strategy<Value = Vec<Word>> {
    prop::collection::vec(sparse_word(), 0..max_words)
}

fn arbitrary_bitlist64(max_words: usize) -> impl Strategy<Value = Bitlist64> {
    arbitrary_words(max_words).prop_map(Bitlist64::from_words)
}

fn equal_length_bitlists(max_words: usize) -> impl Strategy<Value = (Bitlist64, Bitlist64)> {
    (0..max_words).prop_flat_map(|word_count| {
        (
            prop::collection::vec(sparse_word(), word_count).prop_map(Bitlist64::from_words),
            prop::collection::vec(sparse_word(), word_count).prop_map(Bitlist64::from_words),
        )
    })
}
