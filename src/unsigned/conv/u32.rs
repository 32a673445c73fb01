//! Conversions between `BigUnsigned` and `u32`.
//!
//! A `u32` is exactly one limb, so these are the cheapest conversions.

use crate::error::BigUnsignedError;
use crate::unsigned::BigUnsigned;

/// Converts a `u32` into a single-limb value (or zero).
impl From<u32> for BigUnsigned {
    fn from(value: u32) -> Self {
        BigUnsigned::from_limbs([value])
    }
}

/// Attempts to convert a `BigUnsigned` into a `u32`.
///
/// The conversion succeeds only for values of at most one limb.
impl TryFrom<&BigUnsigned> for u32 {
    type Error = BigUnsignedError;

    fn try_from(value: &BigUnsigned) -> Result<Self, Self::Error> {
        match value.limbs() {
            [] => Ok(0),
            [limb] => Ok(*limb),
            _ => Err(BigUnsignedError::Overflow { bits: u32::BITS }),
        }
    }
}
