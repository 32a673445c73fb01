//! Arbitrary-precision unsigned integer storage
//!
//! This module defines `BigUnsigned`, an owned sequence of limbs in base
//! `2^32`, stored **most significant limb first**.
//!
//! Every value handed out by this crate is normalized: it never carries a
//! leading zero limb, and zero is the empty sequence. Comparing by length is
//! only meaningful under that invariant, so every operation that builds a
//! result normalizes it before returning.

use std::fmt::{self, Debug, Formatter};

use crate::unsigned::limb::Limb;

/// Arbitrary-precision unsigned integer.
///
/// The value is an immutable-by-convention sequence of `u32` limbs in
/// **big-endian** limb order. Arithmetic always allocates a new value and
/// never touches its operands.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigUnsigned {
    pub(crate) limbs: Vec<Limb>,
}

impl BigUnsigned {
    /// The value zero (no limbs).
    pub const ZERO: Self = Self { limbs: Vec::new() };

    /// Returns the value one.
    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }

    /// Builds a value from limbs ordered most significant first.
    ///
    /// Leading zero limbs are dropped, so any input is accepted.
    pub fn from_limbs<I>(limbs: I) -> Self
    where
        I: IntoIterator<Item = Limb>,
    {
        let mut value = Self {
            limbs: limbs.into_iter().collect(),
        };
        value.normalize();
        value
    }

    /// Zero-filled scratch value of `len` limbs.
    ///
    /// Not normalized: callers fill it in and call [`Self::normalized`].
    pub(crate) fn zeroed(len: usize) -> Self {
        Self {
            limbs: vec![0; len],
        }
    }

    /// The limbs, most significant first. Empty for zero.
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Number of limbs. Zero has none.
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    /// Returns `true` for the value zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of significant bits. Zero has none.
    pub fn bits(&self) -> u64 {
        self.limbs.first().map_or(0, |&top| {
            self.len() as u64 * Limb::BITS as u64 - top.leading_zeros() as u64
        })
    }

    /// Returns `true` when the lowest bit is clear.
    pub fn is_even(&self) -> bool {
        self.limbs.last().is_none_or(|&l| l & 1 == 0)
    }

    /// Removes leading zero limbs.
    pub(crate) fn normalize(&mut self) {
        let leading = self.limbs.iter().take_while(|&&l| l == 0).count();

        if leading != 0 {
            self.limbs.drain(..leading);
        }
    }

    pub(crate) fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub(crate) fn is_normalized(&self) -> bool {
        self.limbs.first().is_none_or(|&l| l != 0)
    }
}

impl Debug for BigUnsigned {
    /// Lists the limbs in the internal base, separated by `", "`.
    ///
    /// This is a diagnostic view, not a decimal rendering; use `Display`
    /// for the exact decimal value.
    ///
    /// Example:
    /// `BigUnsigned[1090, 1218060802]`
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("BigUnsigned[")?;

        for (i, limb) in self.limbs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{limb}")?;
        }

        f.write_str("]")
    }
}
