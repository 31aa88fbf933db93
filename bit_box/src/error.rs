#[cfg(feature = "std")]
use thiserror::Error;

/// Errors raised when a [`BitBox`](crate::BitBox) cannot grow to the
/// requested size.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoxError {
    /// The bit count cannot be rounded up to a byte-aligned capacity in `usize`.
    #[cfg_attr(
        feature = "std",
        error("{bits} bits exceed the addressable byte-aligned capacity")
    )]
    CapacityOverflow { bits: usize },

    /// Bit index `usize::MAX` has no room for the bit count covering it.
    #[cfg_attr(feature = "std", error("bit index {index} cannot be addressed"))]
    IndexOverflow { index: usize },

    /// The allocator refused to grow the buffer.
    #[cfg_attr(feature = "std", error("failed to allocate {bytes} bytes"))]
    AllocationFailed { bytes: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitBoxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitBoxError::CapacityOverflow { bits } => {
                write!(f, "{} bits exceed the addressable byte-aligned capacity", bits)
            }
            BitBoxError::IndexOverflow { index } => {
                write!(f, "bit index {} cannot be addressed", index)
            }
            BitBoxError::AllocationFailed { bytes } => {
                write!(f, "failed to allocate {} bytes", bytes)
            }
        }
    }
}
