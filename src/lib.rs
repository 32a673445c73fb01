//! Arbitrary-precision unsigned integer arithmetic
//!
//! This crate provides `BigUnsigned`, a non-negative integer of unbounded
//! magnitude, along with exact conversion to and from decimal digits.
//!
//! The focus is on **clarity and predictable semantics**: values are
//! immutable by convention, always normalized, and every fallible
//! operation reports a typed error instead of producing a wrapped or
//! sentinel result.
//!
//! # Module overview
//!
//! - `unsigned`  
//!   The `BigUnsigned` type and its arithmetic core: comparison, addition,
//!   magnitude difference, schoolbook multiplication, long division with
//!   remainder and binary exponentiation.
//!
//!   Decimal import accepts any sequence of unsigned primitive digits and
//!   decimal export is exact for any magnitude. Conversions to native
//!   integers are checked, and an `f64` export is available for values
//!   of at most 53 bits, which it represents exactly.
//!
//! - `error`  
//!   `BigUnsignedError`, the single error type of the crate.
//!
//! # Example
//!
//! ```
//! use bigunsigned::BigUnsigned;
//!
//! let a: BigUnsigned = "4294967296".parse().unwrap();
//! let b = BigUnsigned::from(3u8);
//!
//! let (q, r) = a.div_rem(&b).unwrap();
//! assert_eq!(q.to_string(), "1431655765");
//! assert_eq!(r, BigUnsigned::from(1u8));
//! ```
//!
//! # Design goals
//!
//! - No operation can overflow or lose precision
//! - Operands are never mutated
//! - A single canonical representation per value

mod error;

pub mod unsigned;

pub use error::BigUnsignedError;
pub use unsigned::{BigUnsigned, Limb};
