//! Arbitrary precision unsigned integers stored as 32-bit limbs.
//!
//! Arithmetic never mutates its operands: every operation returns a freshly
//! allocated, normalized result. Operations that allocate come in a fallible
//! `try_` form; the operator traits treat allocation failure as fatal.

pub mod core;
pub mod error;
pub mod from;
pub mod conversion;
pub mod iter_limbs;
pub mod cmp;
pub mod arith;
pub mod display;

#[cfg(test)]
pub mod proptest;

pub use crate::core::BigUint;
pub use crate::core::BigUintRef;
pub use crate::error::{BigUintError, ParseBigUintError};
