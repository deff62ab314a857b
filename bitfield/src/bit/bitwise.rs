use sorted_iter::SortedIterator;

/// Logical number of bits of a vector. Indices `>= bit_len()` are out of bounds.
pub trait BitLength {
    fn bit_len(&self) -> u64;
}

/// Bit-indexable and countable.
///
/// Out-of-bounds reads are not an error: [`Bitwise::bit_at`] returns `false` for any
/// index at or beyond [`BitLength::bit_len`].
///
/// See also [`BitwiseMut`], [`BitSupport`], [`BitwisePair`], and [`BitwisePairMut`].
pub trait Bitwise: BitLength {
    fn bit_at(&self, index: u64) -> bool;
    fn count(&self) -> u64;
    #[inline]
    fn is_zero(&self) -> bool {
        self.count() == 0
    }
}

#[macro_export]
macro_rules! delegate_bitwise_body {
    ($delegate_trait:path) => {
        #[inline]
        fn bit_at(&self, index: u64) -> bool {
            <Self as $delegate_trait>::bit_at(self, index)
        }

        #[inline]
        fn count(&self) -> u64 {
            <Self as $delegate_trait>::count(self)
        }

        #[inline]
        fn is_zero(&self) -> bool {
            <Self as $delegate_trait>::is_zero(self)
        }
    };
}
pub use delegate_bitwise_body;

/// Bit-settable. Out-of-bounds writes are ignored.
pub trait BitwiseMut: Bitwise {
    fn set_bit_at(&mut self, index: u64, to: bool);
    fn clear_bits(&mut self);

    fn assign_random(&mut self, random_number_generator: &mut impl rand::Rng) {
        for index in 0..self.bit_len() {
            self.set_bit_at(index, random_number_generator.r#gen());
        }
    }
}

#[macro_export]
macro_rules! delegate_bitwise_mut_body {
    ($delegate_trait:path) => {
        #[inline]
        fn set_bit_at(&mut self, index: u64, to: bool) {
            <Self as $delegate_trait>::set_bit_at(self, index, to)
        }
        #[inline]
        fn clear_bits(&mut self) {
            <Self as $delegate_trait>::clear_bits(self)
        }
    };
}
pub use delegate_bitwise_mut_body;

/// Ascending enumeration of the indices of set bits.
pub trait BitSupport: Bitwise {
    fn support(&self) -> impl SortedIterator<Item = u64>;

    /// All set-bit indices, ascending. The result has exactly [`Bitwise::count`] entries.
    fn bit_indices(&self) -> Vec<u64> {
        self.support().collect()
    }

    /// Writes set-bit indices in ascending order into `destination` without allocating
    /// and returns how many were written.
    ///
    /// Enumeration stops as soon as `destination` is full, so the remaining set bits are
    /// silently left out. Size `destination` to [`Bitwise::count`] to receive every index.
    ///
    /// ```
    /// use bitfield::{BitSupport, Bitlist64};
    ///
    /// let bits = Bitlist64::from_words(vec![0b1011]);
    /// let mut indices = [0u64; 2];
    /// assert_eq!(bits.bit_indices_into(&mut indices), 2);
    /// assert_eq!(indices, [0, 1]);
    /// ```
    fn bit_indices_into(&self, destination: &mut [u64]) -> usize {
        let mut written = 0;
        for (slot, index) in destination.iter_mut().zip(self.support()) {
            *slot = index;
            written += 1;
        }
        written
    }
}

/// Canonical serialized form.
pub trait ToBytes {
    fn bytes(&self) -> Vec<u8>;
}

/// Set predicates between two vectors of equal length.
///
/// # Panics
///
/// Every method panics if the two operands differ in [`BitLength::bit_len`].
pub trait BitwisePair<Other: ?Sized = Self> {
    /// `true` iff every bit set in `other` is also set in `self`.
    fn contains(&self, other: &Other) -> bool;
    /// `true` iff `self` and `other` have at least one set bit in common.
    fn overlaps(&self, other: &Other) -> bool;
}

#[macro_export]
macro_rules! delegate_bitwise_pair_body {
    ($other_type:ty, $delegate_trait:path) => {
        #[inline]
        fn contains(&self, other: &$other_type) -> bool {
            <Self as $delegate_trait>::contains(self, other)
        }
        #[inline]
        fn overlaps(&self, other: &$other_type) -> bool {
            <Self as $delegate_trait>::overlaps(self, other)
        }
    };
}
pub use delegate_bitwise_pair_body;

/// Set algebra: union, intersection, symmetric difference and complement.
///
/// The `*_into` methods write the result into a caller-supplied destination of the same
/// length and never allocate. The allocating forms ([`or`](BitwisePairMut::or),
/// [`and`](BitwisePairMut::and), [`xor`](BitwisePairMut::xor),
/// [`not`](BitwisePairMut::not)) clone `self` and call the matching `*_into` method.
///
/// # Panics
///
/// Every method panics if `self`, `other` and `destination` do not all share one
/// [`BitLength::bit_len`].
pub trait BitwisePairMut<Other: ?Sized = Self>: BitwisePair<Other> {
    fn or_into(&self, other: &Other, destination: &mut Self);
    fn and_into(&self, other: &Other, destination: &mut Self);
    fn xor_into(&self, other: &Other, destination: &mut Self);
    fn not_into(&self, destination: &mut Self);

    fn bitor_assign(&mut self, other: &Other);
    fn bitand_assign(&mut self, other: &Other);
    fn bitxor_assign(&mut self, other: &Other);

    #[must_use]
    fn or(&self, other: &Other) -> Self
    where
        Self: Clone,
    {
        let mut destination = self.clone();
        self.or_into(other, &mut destination);
        destination
    }

    #[must_use]
    fn and(&self, other: &Other) -> Self
    where
        Self: Clone,
    {
        let mut destination = self.clone();
        self.and_into(other, &mut destination);
        destination
    }

    #[must_use]
    fn xor(&self, other: &Other) -> Self
    where
        Self: Clone,
    {
        let mut destination = self.clone();
        self.xor_into(other, &mut destination);
        destination
    }

    #[must_use]
    fn not(&self) -> Self
    where
        Self: Clone,
    {
        let mut destination = self.clone();
        self.not_into(&mut destination);
        destination
    }
}

#[macro_export]
macro_rules! delegate_bitwise_pair_mut_body {
    ($other_type:ty, $delegate_trait:path) => {
        #[inline]
        fn or_into(&self, other: &$other_type, destination: &mut Self) {
            <Self as $delegate_trait>::or_into(self, other, destination);
        }
        #[inline]
        fn and_into(&self, other: &$other_type, destination: &mut Self) {
            <Self as $delegate_trait>::and_into(self, other, destination);
        }
        #[inline]
        fn xor_into(&self, other: &$other_type, destination: &mut Self) {
            <Self as $delegate_trait>::xor_into(self, other, destination);
        }
        #[inline]
        fn not_into(&self, destination: &mut Self) {
            <Self as $delegate_trait>::not_into(self, destination);
        }
        #[inline]
        fn bitor_assign(&mut self, other: &$other_type) {
            <Self as $delegate_trait>::bitor_assign(self, other);
        }
        #[inline]
        fn bitand_assign(&mut self, other: &$other_type) {
            <Self as $delegate_trait>::bitand_assign(self, other);
        }
        #[inline]
        fn bitxor_assign(&mut self, other: &$other_type) {
            <Self as $delegate_trait>::bitxor_assign(self, other);
        }
    };
}
pub use delegate_bitwise_pair_mut_body;

#[macro_export]
macro_rules! delegate_bitwise {
    ($type:ty, $delegate_trait:path) => {
        impl Bitwise for $type {
            delegate_bitwise_body! {$delegate_trait}
        }
    };
}
pub use delegate_bitwise;

#[macro_export]
macro_rules! delegate_bitwise_mut {
    ($type:ty, $delegate_trait:path) => {
        impl BitwiseMut for $type {
            delegate_bitwise_mut_body! {$delegate_trait}
        }
    };
}
pub use delegate_bitwise_mut;

#[macro_export]
macro_rules! delegate_bitwise_pair {
    ($type:ty, $other_type:ty, $delegate_trait:path) => {
        impl BitwisePair<$other_type> for $type {
            delegate_bitwise_pair_body! {$other_type, $delegate_trait}
        }
    };
}
pub use delegate_bitwise_pair;

#[macro_export]
macro_rules! delegate_bitwise_pair_mut {
    ($type:ty, $other_type:ty, $delegate_trait:path) => {
        impl BitwisePairMut<$other_type> for $type {
            delegate_bitwise_pair_mut_body! {$other_type, $delegate_trait}
        }
    };
}
pub use delegate_bitwise_pair_mut;
