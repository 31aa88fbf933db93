//! Growable, byte-aligned bit container.
//!
//! # Examples
//!
//! ```rust
//! use bit_box::BitBox;
//!
//! let mut flags = BitBox::new(129);
//! assert_eq!(flags.size(), 136);
//!
//! flags.set(3);
//! assert_eq!(flags.get_byte(0), 0x10);
//!
//! // Writing past the end grows the box, reading past it does not.
//! flags.set(641);
//! assert_eq!(flags.size(), 648);
//! assert!(!flags.get(4500));
//! assert_eq!(flags.size(), 648);
//! ```
//!
//! ## Aggregate queries
//!
//! ```rust
//! use bit_box::BitBox;
//!
//! let flags: BitBox = [0, 19, 43].into_iter().collect();
//!
//! assert!(flags.and([0, 19, 43]));
//! assert!(!flags.and([0, 19, 99]));
//! assert!(flags.or([1, 2, 43]));
//! assert!(flags.xor([1, 19, 42]));
//! assert!(!flags.xor([0, 19]));
//! ```

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use bytemuck::Pod;

use crate::bit_ops;
use crate::iter::{Iter, IterOnes};
use crate::BitBoxError;

type Result<T> = core::result::Result<T, BitBoxError>;

/// A dynamically sized bit container.
///
/// Bits live in a contiguous `Vec<u8>`; bit `n` is stored in byte `n / 8`
/// under mask `0x80 >> (n % 8)` (most significant bit first). The capacity
/// reported by [`size`](BitBox::size) is always `bytes.len() * 8`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitBox {
    max: usize,
    bytes: Vec<u8>,
}

impl BitBox {
    /// Creates a box able to address `bits` bits, rounded up to whole bytes.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows `usize` or cannot be allocated.
    /// See [`try_new`](BitBox::try_new).
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_box::BitBox;
    ///
    /// assert_eq!(BitBox::new(129).size(), 136);
    /// assert_eq!(BitBox::new(0).size(), 0);
    /// ```
    pub fn new(bits: usize) -> Self {
        Self::try_new(bits).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn try_new(bits: usize) -> Result<Self> {
        let mut bit_box = Self::default();
        bit_box.try_resize(bits)?;
        Ok(bit_box)
    }

    /// Creates a box holding a copy of `bytes`, laid out MSB-first.
    ///
    /// ```
    /// use bit_box::BitBox;
    ///
    /// let flags = BitBox::from_bytes(&[0b1000_0001]);
    /// assert!(flags.get(0));
    /// assert!(flags.get(7));
    /// assert_eq!(flags.size(), 8);
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            max: bytes.len() * 8,
            bytes: bytes.to_vec(),
        }
    }

    /// Creates a box from plain-old-data words, reinterpreted as their
    /// native-endian bytes.
    pub fn from_words<T: Pod>(words: &[T]) -> Self {
        Self::from_bytes(bytemuck::cast_slice(words))
    }

    /// Byte index and mask addressing bit `n`.
    ///
    /// Useful together with [`as_bytes`](BitBox::as_bytes); performs no
    /// bounds checking.
    ///
    /// ```
    /// use bit_box::BitBox;
    ///
    /// assert_eq!(BitBox::position(36), (4, 0x08));
    /// ```
    #[inline]
    pub const fn position(n: usize) -> (usize, u8) {
        bit_ops::position(n)
    }

    /// Grows or shrinks the box to hold `bits` bits and returns the new
    /// capacity.
    ///
    /// Growing keeps every existing bit and zero-fills the new bytes.
    /// Shrinking drops every byte past `ceil(bits / 8)`; the bits they held
    /// are gone for good.
    ///
    /// # Panics
    ///
    /// Panics where [`try_resize`](BitBox::try_resize) would fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_box::BitBox;
    ///
    /// let mut flags = BitBox::new(16);
    /// flags.set(15);
    /// assert_eq!(flags.resize(4), 8);
    /// assert_eq!(flags.resize(16), 16);
    /// assert!(!flags.get(15));
    /// ```
    pub fn resize(&mut self, bits: usize) -> usize {
        self.try_resize(bits).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn try_resize(&mut self, bits: usize) -> Result<usize> {
        let needed = bit_ops::byte_len(bits)?;
        if bits > self.max {
            let additional = needed - self.bytes.len();
            self.bytes
                .try_reserve_exact(additional)
                .map_err(|_| BitBoxError::AllocationFailed { bytes: needed })?;
            self.bytes.resize(needed, 0);
        } else {
            self.bytes.truncate(needed);
            self.bytes.shrink_to_fit();
        }
        self.max = self.bytes.len() * 8;
        Ok(self.max)
    }

    /// Grows the box, if needed, so that bit `index` is addressable.
    fn ensure_addressable(&mut self, index: usize) -> Result<()> {
        if index >= self.max {
            let bits = index
                .checked_add(1)
                .ok_or(BitBoxError::IndexOverflow { index })?;
            self.try_resize(bits)?;
        }
        Ok(())
    }

    /// Returns whether bit `n` is set. Bits past the end read as unset.
    #[inline]
    pub fn get(&self, n: usize) -> bool {
        if n >= self.max {
            return false;
        }
        let (byte, mask) = bit_ops::position(n);
        self.bytes[byte] & mask != 0
    }

    /// Sets bit `n`, growing the box if `n` lies past the end.
    ///
    /// # Panics
    ///
    /// Panics where [`try_set`](BitBox::try_set) would fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_box::BitBox;
    ///
    /// let mut flags = BitBox::default();
    /// flags.set(5);
    /// assert_eq!(flags.size(), 8);
    /// assert_eq!(flags.get_byte(0), 0b0000_0100);
    /// ```
    pub fn set(&mut self, n: usize) {
        self.try_set(n).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn try_set(&mut self, n: usize) -> Result<()> {
        self.ensure_addressable(n)?;
        let (byte, mask) = bit_ops::position(n);
        self.bytes[byte] |= mask;
        Ok(())
    }

    /// Clears bit `n`. Never grows the box.
    pub fn unset(&mut self, n: usize) {
        if n < self.max {
            let (byte, mask) = bit_ops::position(n);
            self.bytes[byte] &= !mask;
        }
    }

    /// Flips bit `n`, growing the box if `n` lies past the end.
    ///
    /// # Panics
    ///
    /// Panics where [`try_toggle`](BitBox::try_toggle) would fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_box::BitBox;
    ///
    /// let mut flags = BitBox::default();
    /// flags.toggle(23);
    /// assert!(flags.get(23));
    /// flags.toggle(23);
    /// assert!(!flags.get(23));
    /// ```
    pub fn toggle(&mut self, n: usize) {
        self.try_toggle(n).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn try_toggle(&mut self, n: usize) -> Result<()> {
        self.ensure_addressable(n)?;
        let (byte, mask) = bit_ops::position(n);
        self.bytes[byte] ^= mask;
        Ok(())
    }

    /// Raw byte `i` of the buffer, or `0` past the end.
    #[inline]
    pub fn get_byte(&self, i: usize) -> u8 {
        self.bytes.get(i).copied().unwrap_or(0)
    }

    /// Capacity in bits; always a multiple of 8.
    #[inline]
    pub fn size(&self) -> usize {
        self.max
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the box has zero capacity.
    pub fn is_empty(&self) -> bool {
        self.max == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Unsets every bit, keeping the capacity.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Returns `true` if every listed bit is set (vacuously `true` for none).
    pub fn and<I: IntoIterator<Item = usize>>(&self, positions: I) -> bool {
        positions.into_iter().all(|n| self.get(n))
    }

    /// Returns `true` if at least one listed bit is set.
    pub fn or<I: IntoIterator<Item = usize>>(&self, positions: I) -> bool {
        positions.into_iter().any(|n| self.get(n))
    }

    /// Returns `true` if exactly one listed bit is set.
    ///
    /// This is an "exactly one" test over the whole list, not a running
    /// parity: three set bits yield `false`.
    ///
    /// ```
    /// use bit_box::BitBox;
    ///
    /// let flags: BitBox = [7, 12].into_iter().collect();
    /// assert!(flags.xor([0, 7]));
    /// assert!(!flags.xor([7, 12]));
    /// assert!(!flags.xor([7, 0, 12]));
    /// ```
    pub fn xor<I: IntoIterator<Item = usize>>(&self, positions: I) -> bool {
        let mut set = 0usize;
        for n in positions {
            if self.get(n) {
                set += 1;
                if set > 1 {
                    return false;
                }
            }
        }
        set == 1
    }

    /// Iterates over every bit in `0..size()`.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Iterates over the indices of set bits in ascending order.
    pub fn iter_ones(&self) -> IterOnes<'_> {
        IterOnes::new(&self.bytes)
    }
}

impl fmt::Debug for BitBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitBox({} bits: ", self.max)?;
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:08b}", byte)?;
        }
        f.write_str(")")
    }
}

impl<'a> IntoIterator for &'a BitBox {
    type Item = bool;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<usize> for BitBox {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for n in iter {
            self.set(n);
        }
    }
}

impl FromIterator<usize> for BitBox {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bit_box = Self::default();
        bit_box.extend(iter);
        bit_box
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rounds_up_to_whole_bytes() {
        let bb = BitBox::new(129);
        assert_eq!(bb.size(), 136);
        assert_eq!(bb.byte_len(), 17);
        assert!(bb.as_bytes().iter().all(|&b| b == 0));

        let empty = BitBox::new(0);
        assert_eq!(empty.size(), 0);
        assert!(empty.is_empty());
        assert_eq!(empty, BitBox::default());
    }

    #[test]
    fn basic_bit_manipulation() {
        let mut bb = BitBox::default();
        bb.set(5);
        assert!(bb.get(5));
        assert_eq!(bb.as_bytes(), &[4]);

        bb.set(15);
        assert!(bb.get(15));
        bb.unset(15);
        assert!(!bb.get(15));
        assert_eq!(bb.size(), 16);
        assert_eq!(bb.byte_len(), 2);
    }

    #[test]
    fn unset_past_the_end_is_a_no_op() {
        let mut bb = BitBox::new(8);
        bb.unset(100);
        assert_eq!(bb.size(), 8);
        assert_eq!(bb.byte_len(), 1);
    }

    #[test]
    fn set_grows_byte_by_byte() {
        let mut bb = BitBox::default();
        bb.set(0);
        assert_eq!(bb.size(), 8);
        assert_eq!(bb.byte_len(), 1);

        bb.set(15);
        assert_eq!(bb.size(), 16);
        assert_eq!(bb.byte_len(), 2);

        bb.set(641);
        assert_eq!(bb.size(), 648);
        assert_eq!(bb.byte_len(), 81);

        assert!(!bb.get(4500));
        assert_eq!(bb.size(), 648);
        assert_eq!(bb.byte_len(), 81);
    }

    #[test]
    fn set_on_byte_boundary_grows() {
        let mut bb = BitBox::new(8);
        bb.set(8);
        assert_eq!(bb.size(), 16);
        assert!(bb.get(8));
        assert_eq!(bb.get_byte(1), 0x80);
    }

    #[test]
    fn toggle_bit_zero_on_empty_box() {
        let mut bb = BitBox::default();
        bb.toggle(0);
        assert_eq!(bb.size(), 8);
        assert!(bb.get(0));
        assert_eq!(bb.get_byte(0), 0x80);

        bb.toggle(0);
        assert!(!bb.get(0));
        assert_eq!(bb.size(), 8);
    }

    #[test]
    fn get_byte_past_the_end_is_zero() {
        let mut bb = BitBox::default();
        bb.set(3);
        assert_eq!(bb.get_byte(0), 0x10);
        assert_eq!(bb.get_byte(1), 0);
        assert_eq!(bb.get_byte(32), 0);
    }

    #[test]
    fn clear_and_resize() {
        let mut bb = BitBox::default();
        bb.set(90);

        bb.clear();
        assert_eq!(bb.byte_len(), 12);
        assert!(bb.as_bytes().iter().all(|&b| b == 0));

        assert_eq!(bb.resize(15), 16);
        assert_eq!(bb.byte_len(), 2);

        bb.set(15);
        bb.resize(15);
        assert!(bb.get(15));

        bb.resize(4);
        assert!(!bb.get(15));
        assert_eq!(bb.byte_len(), 1);

        assert_eq!(bb.resize(16), 16);
        assert!(!bb.get(15));

        let mut bb = BitBox::new(63);
        assert_eq!(bb.resize(64), 64);
    }

    #[test]
    fn resize_to_zero_empties_the_box() {
        let mut bb: BitBox = [1, 30].into_iter().collect();
        assert_eq!(bb.resize(0), 0);
        assert!(bb.is_empty());
        assert_eq!(bb.count_ones(), 0);
    }

    #[test]
    fn and_queries() {
        let bb: BitBox = [0, 19, 43].into_iter().collect();
        assert!(bb.and([0, 19, 43]));
        assert!(!bb.and([0, 19, 99]));
        assert!(bb.and([0]));
        assert!(!bb.and([42]));
        assert!(bb.and(core::iter::empty()));
    }

    #[test]
    fn or_queries() {
        let bb: BitBox = [7, 12].into_iter().collect();
        assert!(bb.or([0, 7]));
        assert!(!bb.or([0, 33]));
        assert!(bb.or([1, 2, 3, 4, 7]));
        assert!(bb.or([7, 12]));
        assert!(!bb.or(core::iter::empty()));
    }

    #[test]
    fn xor_queries() {
        let bb: BitBox = [7, 12].into_iter().collect();
        assert!(bb.xor([0, 7]));
        assert!(!bb.xor([0, 33]));
        assert!(bb.xor([1, 2, 3, 4, 7]));
        assert!(!bb.xor([7, 12]));
        assert!(!bb.xor([7, 0, 12]));
        assert!(!bb.xor(core::iter::empty()));
    }

    #[test]
    fn aggregates_accept_slices() {
        let bb: BitBox = [2, 9].into_iter().collect();
        let positions = [2usize, 9, 1000];
        assert!(!bb.and(positions.iter().copied()));
        assert!(bb.or(positions[1..].iter().copied()));
        assert!(bb.xor(positions[1..].iter().copied()));
    }

    #[test]
    fn iterators_follow_bit_order() {
        let bb: BitBox = [1, 8, 15].into_iter().collect();
        let bits: Vec<bool> = bb.iter().collect();
        assert_eq!(bits.len(), 16);
        assert!(bits[1] && bits[8] && bits[15]);
        assert_eq!(bits.iter().filter(|&&b| b).count(), 3);

        assert_eq!(bb.iter_ones().collect::<Vec<_>>(), vec![1, 8, 15]);
        assert_eq!(bb.count_ones(), 3);
    }

    #[test]
    fn from_words_uses_native_byte_order() {
        let word = 0x8001u16;
        let bb = BitBox::from_words(&[word]);
        assert_eq!(bb.size(), 16);
        assert_eq!(bb.as_bytes(), &word.to_ne_bytes());
    }

    #[test]
    fn from_words_accepts_derived_pod() {
        use bytemuck_derive::{Pod, Zeroable};

        #[repr(C)]
        #[derive(Clone, Copy, Pod, Zeroable)]
        struct Mask {
            lo: u8,
            hi: u8,
        }

        let bb = BitBox::from_words(&[Mask { lo: 0x80, hi: 0x01 }]);
        assert!(bb.get(0));
        assert!(bb.get(15));
        assert_eq!(bb.count_ones(), 2);
    }

    #[test]
    fn debug_shows_bytes_in_binary() {
        let bb: BitBox = [0, 15].into_iter().collect();
        assert_eq!(
            format!("{:?}", bb),
            "BitBox(16 bits: 10000000 00000001)"
        );
    }

    #[test]
    fn try_set_reports_unaddressable_index() {
        let mut bb = BitBox::default();
        assert_eq!(
            bb.try_set(usize::MAX),
            Err(BitBoxError::IndexOverflow { index: usize::MAX })
        );
        assert_eq!(
            bb.try_toggle(usize::MAX),
            Err(BitBoxError::IndexOverflow { index: usize::MAX })
        );
        assert!(bb.is_empty());
    }

    #[test]
    fn try_resize_reports_capacity_overflow() {
        let mut bb = BitBox::new(8);
        bb.set(3);
        assert_eq!(
            bb.try_resize(usize::MAX),
            Err(BitBoxError::CapacityOverflow { bits: usize::MAX })
        );
        assert_eq!(bb.size(), 8);
        assert!(bb.get(3));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn try_resize_reports_allocation_failure() {
        let mut bb = BitBox::default();
        let bits = usize::MAX - 7;
        assert_eq!(
            bb.try_resize(bits),
            Err(BitBoxError::AllocationFailed { bytes: bits / 8 })
        );
        assert!(bb.is_empty());
    }

    #[test]
    #[should_panic(expected = "cannot be addressed")]
    fn set_panics_on_unaddressable_index() {
        BitBox::default().set(usize::MAX);
    }
}
