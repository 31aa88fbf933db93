//! # bit_box
//!
//! A dynamically sized bit container, `no_std` compatible (needs `alloc`).
//!
//! ```rust
//! use bit_box::BitBox;
//!
//! let mut flags = BitBox::default();
//! flags.set(5);
//! assert!(flags.get(5));
//! assert_eq!(flags.size(), 8);
//!
//! flags.toggle(5);
//! assert!(!flags.get(5));
//! ```
//!
//! ## Bit layout
//!
//! Bits are packed MSB-first: bit 0 is `0x80` of byte 0, bit 7 is `0x01`.
//!
//! ```rust
//! use bit_box::BitBox;
//!
//! let mut flags = BitBox::new(16);
//! flags.set(3);
//! flags.set(8);
//! assert_eq!(flags.as_bytes(), &[0b0001_0000, 0b1000_0000]);
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::BitBoxError;

mod bit_ops;

pub mod bit_box;
pub use bit_box::BitBox;

pub mod iter;
pub use iter::{Iter, IterOnes};
