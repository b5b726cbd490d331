//! This crate compiles all the interfaces of `overflow_core`.

#![cfg_attr(not(feature = "std"), no_std)]

pub use overflow_core::*;
