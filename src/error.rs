//! Error type shared by every fallible operation of the crate.

use thiserror::Error;

/// Errors reported by construction, division and narrowing conversions.
///
/// Addition, subtraction and multiplication never fail: the limb width
/// leaves room for every intermediate product and carry, so only the
/// boundaries of the crate (parsing, division preconditions, conversions
/// to fixed-size types) can reject their input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigUnsignedError {
    /// A decimal input element is not a digit in `0..=9`.
    #[error("invalid decimal digit at position {position}")]
    InvalidDigit { position: usize },

    /// A decimal input had no digits at all.
    #[error("decimal input is empty")]
    EmptyInput,

    /// The divisor is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The dividend is smaller than the divisor.
    #[error("dividend is smaller than divisor")]
    DividendSmallerThanDivisor,

    /// The floating-point export was requested for a value wider than an
    /// `f64` holds exactly. The exact decimal export still works.
    #[error("{bits}-bit value exceeds the exact f64 range of {limit} bits")]
    MagnitudeTooLargeForApproximateConversion { bits: u64, limit: u32 },

    /// The value does not fit into a native integer of `bits` bits.
    #[error("value does not fit in {bits} bits")]
    Overflow { bits: u32 },
}
