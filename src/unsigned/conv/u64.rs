//! Conversions between `BigUnsigned` and `u64`.

use crate::error::BigUnsignedError;
use crate::unsigned::BigUnsigned;

use super::native::{from_u128, narrow};

/// Converts a `u64` into at most two limbs.
impl From<u64> for BigUnsigned {
    fn from(value: u64) -> Self {
        from_u128(value.into())
    }
}

/// Attempts to convert a `BigUnsigned` into a `u64`.
///
/// Fails if any limb above the lowest two is set.
impl TryFrom<&BigUnsigned> for u64 {
    type Error = BigUnsignedError;

    fn try_from(value: &BigUnsigned) -> Result<Self, Self::Error> {
        narrow(value, u64::BITS)
    }
}
