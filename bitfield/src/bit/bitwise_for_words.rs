use crate::BitLength;
use crate::bit::words::{SetBitIndices, Word, WordAccessor};
use sorted_iter::assume::AssumeSortedByItemExt;
use std::iter::zip;

const LENGTH_MISMATCH: &str = "bitlists are different lengths";

#[inline]
#[track_caller]
fn assert_same_bit_len<Left, Right>(left: &Left, right: &Right)
where
    Left: ?Sized + BitLength,
    Right: ?Sized + BitLength,
{
    assert_eq!(left.bit_len(), right.bit_len(), "{LENGTH_MISMATCH}");
}

#[inline]
fn combine_into(left: &[Word], right: &[Word], destination: &mut [Word], operation: impl Fn(Word, Word) -> Word) {
    for (target, (left, right)) in zip(destination.iter_mut(), zip(left, right)) {
        *target = operation(*left, *right);
    }
}

#[inline]
fn combine_assign(target: &mut [Word], other: &[Word], operation: impl Fn(Word, Word) -> Word) {
    for (target, other) in zip(target.iter_mut(), other) {
        *target = operation(*target, *other);
    }
}

pub trait BitwiseForWords
where
    Self: AsRef<[Word]> + BitLength,
{
    #[inline]
    fn bit_at(&self, index: u64) -> bool {
        index < self.bit_len() && WordAccessor::for_index(index).value_of(self.as_ref())
    }

    #[inline]
    fn count(&self) -> u64 {
        self.as_ref().iter().map(|word| u64::from(word.count_ones())).sum()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.as_ref().iter().all(|word| *word == 0)
    }
}

impl<Bits> BitwiseForWords for Bits where Bits: ?Sized + AsRef<[Word]> + BitLength {}

pub trait BitwiseMutForWords
where
    Self: AsMut<[Word]> + BitLength,
{
    #[inline]
    fn set_bit_at(&mut self, index: u64, to: bool) {
        if index < self.bit_len() {
            WordAccessor::for_index(index).set_value_of(self.as_mut(), to);
        }
    }

    #[inline]
    fn clear_bits(&mut self) {
        self.as_mut().fill(0);
    }
}

impl<Bits> BitwiseMutForWords for Bits where Bits: ?Sized + AsMut<[Word]> + BitLength {}

pub trait BitSupportForWords
where
    Self: AsRef<[Word]> + BitLength,
{
    #[inline]
    fn support(&self) -> impl sorted_iter::SortedIterator<Item = u64> {
        let bit_len = self.bit_len();
        SetBitIndices::new(self.as_ref())
            .take_while(move |index| *index < bit_len)
            .assume_sorted_by_item()
    }
}

impl<Bits> BitSupportForWords for Bits where Bits: ?Sized + AsRef<[Word]> + BitLength {}

pub trait BitwisePairForWords<Other: ?Sized>
where
    Self: AsRef<[Word]> + BitLength,
    Other: AsRef<[Word]> + BitLength,
{
    #[inline]
    #[track_caller]
    fn contains(&self, other: &Other) -> bool {
        assert_same_bit_len(self, other);
        zip(self.as_ref(), other.as_ref()).all(|(word, other_word)| *word == *word | *other_word)
    }

    #[inline]
    #[track_caller]
    fn overlaps(&self, other: &Other) -> bool {
        assert_same_bit_len(self, other);
        if self.bit_len() == 0 {
            return false;
        }
        zip(self.as_ref(), other.as_ref()).any(|(word, other_word)| *word & *other_word != 0)
    }
}

impl<Bits, Other> BitwisePairForWords<Other> for Bits
where
    Bits: ?Sized + AsRef<[Word]> + BitLength,
    Other: ?Sized + AsRef<[Word]> + BitLength,
{
}

pub trait BitwisePairMutForWords<Other: ?Sized>
where
    Self: AsRef<[Word]> + AsMut<[Word]> + BitLength,
    Other: AsRef<[Word]> + BitLength,
{
    #[inline]
    #[track_caller]
    fn or_into(&self, other: &Other, destination: &mut Self) {
        assert_same_bit_len(self, other);
        assert_same_bit_len(self, destination);
        combine_into(self.as_ref(), other.as_ref(), destination.as_mut(), |left, right| left | right);
    }

    #[inline]
    #[track_caller]
    fn and_into(&self, other: &Other, destination: &mut Self) {
        assert_same_bit_len(self, other);
        assert_same_bit_len(self, destination);
        combine_into(self.as_ref(), other.as_ref(), destination.as_mut(), |left, right| left & right);
    }

    #[inline]
    #[track_caller]
    fn xor_into(&self, other: &Other, destination: &mut Self) {
        assert_same_bit_len(self, other);
        assert_same_bit_len(self, destination);
        combine_into(self.as_ref(), other.as_ref(), destination.as_mut(), |left, right| left ^ right);
    }

    #[inline]
    #[track_caller]
    fn not_into(&self, destination: &mut Self) {
        assert_same_bit_len(self, destination);
        for (target, word) in zip(destination.as_mut().iter_mut(), self.as_ref()) {
            *target = !*word;
        }
    }

    #[inline]
    #[track_caller]
    fn bitor_assign(&mut self, other: &Other) {
        assert_same_bit_len(self, other);
        combine_assign(self.as_mut(), other.as_ref(), |left, right| left | right);
    }

    #[inline]
    #[track_caller]
    fn bitand_assign(&mut self, other: &Other) {
        assert_same_bit_len(self, other);
        combine_assign(self.as_mut(), other.as_ref(), |left, right| left & right);
    }

    #[inline]
    #[track_caller]
    fn bitxor_assign(&mut self, other: &Other) {
        assert_same_bit_len(self, other);
        combine_assign(self.as_mut(), other.as_ref(), |left, right| left ^ right);
    }
}

impl<Bits, Other> BitwisePairMutForWords<Other> for Bits
where
    Bits: ?Sized + AsRef<[Word]> + AsMut<[Word]> + BitLength,
    Other: ?Sized + AsRef<[Word]> + BitLength,
{
}
