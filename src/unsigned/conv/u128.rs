//! Conversions between `BigUnsigned` and `u128`.

use crate::error::BigUnsignedError;
use crate::unsigned::BigUnsigned;

use super::native::{from_u128, to_u128};

/// Converts a `u128` into at most four limbs.
impl From<u128> for BigUnsigned {
    fn from(value: u128) -> Self {
        from_u128(value)
    }
}

/// Attempts to convert a `BigUnsigned` into a `u128`.
impl TryFrom<&BigUnsigned> for u128 {
    type Error = BigUnsignedError;

    fn try_from(value: &BigUnsigned) -> Result<Self, Self::Error> {
        to_u128(value).ok_or(BigUnsignedError::Overflow { bits: u128::BITS })
    }
}
