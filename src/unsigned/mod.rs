//! Arbitrary-precision unsigned integers
//!
//! This module defines `BigUnsigned` and everything that operates on it.
//!
//! The value is stored as a sequence of `u32` limbs, most significant
//! first, and is kept normalized at all times. Every operation works on
//! borrowed operands and produces a fresh value.
//!
//! Submodules:
//! - `limb`: limb layout and the constants derived from it
//! - `repr`: storage, normalization and inspection
//! - `cmp`: total order
//! - `ops`: addition, magnitude difference and multiplication
//! - `div`: single-limb long division and multi-limb quotient refinement
//! - `pow`: square-and-multiply exponentiation
//! - `decimal`: exact decimal import and export
//! - `conv`: native integer and approximate floating-point conversions
//! - `num`: `num-traits` integration

mod cmp;
mod conv;
mod decimal;
mod div;
mod limb;
mod num;
mod ops;
mod pow;
mod repr;

pub use limb::Limb;
pub use repr::BigUnsigned;
