//! Shared helpers for the fixed-width integer conversions.

use crate::error::BigUnsignedError;
use crate::unsigned::BigUnsigned;
use crate::unsigned::limb::{LIMB_BITS, Limb};

/// Limbs of a `u128`, most significant first, normalized.
pub(super) fn from_u128(value: u128) -> BigUnsigned {
    let limbs = (0..u128::BITS / LIMB_BITS)
        .rev()
        .map(|i| (value >> (i * LIMB_BITS)) as Limb);

    BigUnsigned::from_limbs(limbs)
}

/// The value as a `u128`, if it fits.
pub(in crate::unsigned) fn to_u128(value: &BigUnsigned) -> Option<u128> {
    if value.len() > (u128::BITS / LIMB_BITS) as usize {
        return None;
    }

    Some(
        value
            .limbs
            .iter()
            .fold(0u128, |acc, &l| (acc << LIMB_BITS) | l as u128),
    )
}

/// Narrows into a native integer of `bits` bits.
pub(super) fn narrow<T>(value: &BigUnsigned, bits: u32) -> Result<T, BigUnsignedError>
where
    T: TryFrom<u128>,
{
    to_u128(value)
        .and_then(|v| T::try_from(v).ok())
        .ok_or(BigUnsignedError::Overflow { bits })
}
