use core::iter::FusedIterator;

use crate::BitBox;

/// Iterator over every bit of a [`BitBox`], yielding `true` for set bits.
pub struct Iter<'a> {
    bit_box: &'a BitBox,
    index: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(bit_box: &'a BitBox) -> Self {
        Self { bit_box, index: 0 }
    }
}

impl Iterator for Iter<'_> {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.bit_box.size() {
            None
        } else {
            let bit = self.bit_box.get(self.index);
            self.index += 1;
            Some(bit)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bit_box.size() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Iterator over the indices of set bits, skipping zero bytes.
pub struct IterOnes<'a> {
    bytes: &'a [u8],
    byte_index: usize,
    // unvisited set bits of bytes[byte_index]
    current: u8,
}

impl<'a> IterOnes<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            byte_index: 0,
            current: bytes.first().copied().unwrap_or(0),
        }
    }
}

impl Iterator for IterOnes<'_> {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current != 0 {
                let offset = self.current.leading_zeros() as usize;
                self.current &= !(0x80 >> offset);
                return Some(self.byte_index * 8 + offset);
            }
            if self.byte_index + 1 >= self.bytes.len() {
                return None;
            }
            self.byte_index += 1;
            self.current = self.bytes[self.byte_index];
        }
    }
}

impl FusedIterator for IterOnes<'_> {}
