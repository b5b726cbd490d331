//! This crate contains common developer utilities for crates within the
//! `overflow` system, such as the platform width probe and the widening
//! helpers that the checked operators are built on. Most users should never
//! have to interact with this directly.
//!
//! There is a hidden reexport of this crate for `overflow_core` and
//! `overflow`.

#![cfg_attr(not(feature = "std"), no_std)]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]

mod error;
mod widening;

pub use error::ArithError;
pub use widening::{
    widen_mul_i16, widen_mul_i32, widen_mul_i8, widen_mul_u16, widen_mul_u32, widen_mul_u8,
    widening_mul_u64,
};

// The native-width dispatch only knows about the 32 and 64 bit operator sets
#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!(
    "`overflow` only supports targets where `isize` and `usize` are 32 or 64 bits wide"
);

/// Number of bits in a `usize`
pub const USIZE_BITS: usize = usize::BITS as usize;

/// Returns if the native integers `isize` and `usize` are 64 bits wide, and
/// `false` if they are 32 bits wide.
///
/// `u32::MAX` is shifted left and then right by one bit in `usize`. If `usize`
/// is wider than 32 bits the top bit survives the round trip, otherwise it is
/// shifted out and the comparison fails. This is evaluated on every call and
/// is trivially constant folded.
#[inline]
#[must_use]
pub const fn is_64_bit() -> bool {
    let max_u32 = u32::MAX as usize;
    ((max_u32 << 1) >> 1) == max_u32
}

#[test]
fn probe_matches_pointer_width() {
    assert_eq!(is_64_bit(), cfg!(target_pointer_width = "64"));
    assert_eq!(is_64_bit(), USIZE_BITS == 64);
}
