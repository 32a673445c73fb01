//! Conversions between `BigUnsigned` and `usize`.
//!
//! The platform width is only known at compile time, so `usize` goes
//! through `u64`, which covers every supported target.

use crate::error::BigUnsignedError;
use crate::unsigned::BigUnsigned;

use super::native::narrow;

/// Converts a `usize` into at most two limbs.
impl From<usize> for BigUnsigned {
    fn from(value: usize) -> Self {
        BigUnsigned::from(value as u64)
    }
}

/// Attempts to convert a `BigUnsigned` into a `usize`.
impl TryFrom<&BigUnsigned> for usize {
    type Error = BigUnsignedError;

    fn try_from(value: &BigUnsigned) -> Result<Self, Self::Error> {
        narrow(value, usize::BITS)
    }
}
