//! Conversions between `BigUnsigned` and `u16`.

use crate::error::BigUnsignedError;
use crate::unsigned::BigUnsigned;

use super::native::narrow;

/// Converts a `u16` into a single-limb value (or zero).
impl From<u16> for BigUnsigned {
    fn from(value: u16) -> Self {
        BigUnsigned::from_limbs([u32::from(value)])
    }
}

/// Attempts to convert a `BigUnsigned` into a `u16`.
impl TryFrom<&BigUnsigned> for u16 {
    type Error = BigUnsignedError;

    fn try_from(value: &BigUnsigned) -> Result<Self, Self::Error> {
        narrow(value, u16::BITS)
    }
}
