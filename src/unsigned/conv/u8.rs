//! Conversions between `BigUnsigned` and `u8`.

use crate::error::BigUnsignedError;
use crate::unsigned::BigUnsigned;

use super::native::narrow;

/// Converts a `u8` into a single-limb value (or zero).
impl From<u8> for BigUnsigned {
    fn from(value: u8) -> Self {
        BigUnsigned::from_limbs([u32::from(value)])
    }
}

/// Attempts to convert a `BigUnsigned` into a `u8`.
///
/// Fails if the value is 256 or more.
impl TryFrom<&BigUnsigned> for u8 {
    type Error = BigUnsignedError;

    fn try_from(value: &BigUnsigned) -> Result<Self, Self::Error> {
        narrow(value, u8::BITS)
    }
}
