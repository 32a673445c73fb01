//! Limb layout and the constants derived from it.
//!
//! A limb is half the width of the working type used for limb arithmetic.
//! This is what keeps every `limb * limb + carry` inside `Wide`, so no
//! operation of the arithmetic core can overflow.

/// A single digit of the internal base.
pub type Limb = u32;

/// Working type for limb arithmetic: holds any `Limb * Limb + Limb + Limb`.
pub(crate) type Wide = u64;

/// Number of bits in one limb.
pub(crate) const LIMB_BITS: u32 = Limb::BITS;

/// The internal radix, `2^LIMB_BITS`.
pub(crate) const BASE: Wide = 1 << LIMB_BITS;

/// Selects the low limb of a `Wide`.
pub(crate) const LIMB_MASK: Wide = BASE - 1;

/// Decimal digits consumed to seed one conversion sweep.
///
/// `10^DECIMAL_BLOCK < BASE`, so the seed always fits in a limb and
/// `acc * 10 + 9` stays far below `Wide::MAX`.
pub(crate) const DECIMAL_BLOCK: usize = (Wide::MAX.ilog10() / 2) as usize;

/// Widest value, in bits, that an `f64` holds exactly.
pub(crate) const APPROX_BIT_LIMIT: u32 = f64::MANTISSA_DIGITS;

const _: () = assert!(Wide::BITS == 2 * LIMB_BITS);

/// Splits a working value into `(high, low)` limbs.
#[inline]
pub(crate) fn split(value: Wide) -> (Wide, Limb) {
    (value >> LIMB_BITS, (value & LIMB_MASK) as Limb)
}
