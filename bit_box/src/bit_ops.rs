use crate::BitBoxError;

/// Byte index and MSB-first mask of bit `n`. No bounds checking.
#[inline(always)]
pub(crate) const fn position(n: usize) -> (usize, u8) {
    (n >> 3, 0x80 >> (n & 7))
}

/// Number of bytes needed to hold `bits` bits.
///
/// Fails when the resulting capacity (`bytes * 8`) would not fit in `usize`.
#[inline]
pub(crate) fn byte_len(bits: usize) -> Result<usize, BitBoxError> {
    let bytes = bits.div_ceil(8);
    match bytes.checked_mul(8) {
        Some(_) => Ok(bytes),
        None => Err(BitBoxError::CapacityOverflow { bits }),
    }
}
