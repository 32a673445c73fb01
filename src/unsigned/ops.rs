//! Addition, subtraction and multiplication for `BigUnsigned`
//!
//! All three are schoolbook algorithms over the limb sequence, walked from
//! the least significant limb (the end of the vector) toward the front:
//! - addition propagates a carry taken from the high half of `Wide`
//! - subtraction is a magnitude difference with a wraparound borrow
//! - multiplication sums shifted single-limb partial products
//!
//! None of them can overflow: limbs are half the width of `Wide`, so
//! `limb * limb + carry` and `limb + limb + carry` always fit.

use std::cmp::Ordering;
use std::iter;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::unsigned::BigUnsigned;
use crate::unsigned::limb::{LIMB_BITS, LIMB_MASK, Limb, Wide, split};

impl BigUnsigned {
    /// Sum of two values.
    ///
    /// `Θ(max(len(self), len(rhs)))`.
    pub(crate) fn add_limbs(&self, rhs: &BigUnsigned) -> BigUnsigned {
        let (longer, shorter) = if self.len() >= rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        // One extra slot at the front for the final carry.
        let mut out = BigUnsigned::zeroed(longer.len() + 1);
        let mut carry: Wide = 0;

        let padded = shorter.limbs.iter().rev().copied().chain(iter::repeat(0));

        for ((o, &l), s) in out
            .limbs
            .iter_mut()
            .rev()
            .zip(longer.limbs.iter().rev())
            .zip(padded)
        {
            let (high, low) = split(l as Wide + s as Wide + carry);
            *o = low;
            carry = high;
        }

        out.limbs[0] = carry as Limb;

        out.normalized()
    }

    /// Magnitude difference `|self - rhs|`.
    ///
    /// The smaller operand is always subtracted from the larger one, so the
    /// order of the arguments does not matter. Equal values give zero.
    pub fn abs_diff(&self, rhs: &BigUnsigned) -> BigUnsigned {
        let (big, small) = match self.cmp(rhs) {
            Ordering::Equal => return BigUnsigned::ZERO,
            Ordering::Greater => (self, rhs),
            Ordering::Less => (rhs, self),
        };

        let mut out = BigUnsigned::zeroed(big.len());
        let mut borrow: Wide = 0;

        let padded = small.limbs.iter().rev().copied().chain(iter::repeat(0));

        for ((o, &b), s) in out
            .limbs
            .iter_mut()
            .rev()
            .zip(big.limbs.iter().rev())
            .zip(padded)
        {
            // A negative result wraps and sets every bit above the limb.
            let diff = (b as Wide).wrapping_sub(borrow).wrapping_sub(s as Wide);
            borrow = (diff >> LIMB_BITS) & 1;
            *o = (diff & LIMB_MASK) as Limb;
        }

        debug_assert_eq!(borrow, 0);

        out.normalized()
    }

    /// `self - rhs`, or `None` when `rhs` is larger.
    pub fn checked_sub(&self, rhs: &BigUnsigned) -> Option<BigUnsigned> {
        if self < rhs {
            return None;
        }

        Some(self.abs_diff(rhs))
    }

    /// Partial product `self * limb`, shifted up by `shift` limbs.
    pub(crate) fn mul_limb(&self, limb: Limb, shift: usize) -> BigUnsigned {
        if self.is_zero() || limb == 0 {
            return BigUnsigned::ZERO;
        }

        let mut out = BigUnsigned::zeroed(self.len() + 1 + shift);
        let mut carry: Wide = 0;

        for (o, &l) in out.limbs[..=self.len()]
            .iter_mut()
            .rev()
            .zip(self.limbs.iter().rev())
        {
            let (high, low) = split(l as Wide * limb as Wide + carry);
            *o = low;
            carry = high;
        }

        out.limbs[0] = carry as Limb;

        out.normalized()
    }

    /// Schoolbook product.
    ///
    /// `Θ(len(self) * len(rhs))`.
    pub(crate) fn mul_limbs(&self, rhs: &BigUnsigned) -> BigUnsigned {
        rhs.limbs
            .iter()
            .rev()
            .enumerate()
            .fold(BigUnsigned::ZERO, |total, (shift, &r)| {
                total.add_limbs(&self.mul_limb(r, shift))
            })
    }
}

/// Implements a binary operator for every owned/borrowed combination by
/// forwarding to a `&BigUnsigned, &BigUnsigned` method.
macro_rules! forward_binop {
    ($(#[$attr:meta])* impl $imp:ident, $method:ident => $inner:ident) => {
        $(#[$attr])*
        impl $imp<&BigUnsigned> for &BigUnsigned {
            type Output = BigUnsigned;

            fn $method(self, rhs: &BigUnsigned) -> BigUnsigned {
                self.$inner(rhs)
            }
        }

        $(#[$attr])*
        impl $imp<BigUnsigned> for &BigUnsigned {
            type Output = BigUnsigned;

            fn $method(self, rhs: BigUnsigned) -> BigUnsigned {
                self.$inner(&rhs)
            }
        }

        $(#[$attr])*
        impl $imp<&BigUnsigned> for BigUnsigned {
            type Output = BigUnsigned;

            fn $method(self, rhs: &BigUnsigned) -> BigUnsigned {
                (&self).$inner(rhs)
            }
        }

        $(#[$attr])*
        impl $imp<BigUnsigned> for BigUnsigned {
            type Output = BigUnsigned;

            fn $method(self, rhs: BigUnsigned) -> BigUnsigned {
                (&self).$inner(&rhs)
            }
        }
    };
}

pub(crate) use forward_binop;

/// Implements `op=` for borrowed and owned right-hand sides. The left
/// operand is replaced by a freshly built value.
macro_rules! forward_assign {
    (impl $imp:ident, $method:ident => $inner:ident) => {
        impl $imp<&BigUnsigned> for BigUnsigned {
            fn $method(&mut self, rhs: &BigUnsigned) {
                *self = (&*self).$inner(rhs);
            }
        }

        impl $imp<BigUnsigned> for BigUnsigned {
            fn $method(&mut self, rhs: BigUnsigned) {
                *self = (&*self).$inner(&rhs);
            }
        }
    };
}

// Addition.
forward_binop!(impl Add, add => add_limbs);
forward_assign!(impl AddAssign, add_assign => add_limbs);

// Magnitude difference: `a - b` never underflows, see `abs_diff`.
forward_binop!(impl Sub, sub => abs_diff);
forward_assign!(impl SubAssign, sub_assign => abs_diff);

// Schoolbook multiplication.
forward_binop!(impl Mul, mul => mul_limbs);
forward_assign!(impl MulAssign, mul_assign => mul_limbs);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_product_carries_into_new_limb() {
        let v = BigUnsigned::from_limbs([Limb::MAX, Limb::MAX]);
        let p = v.mul_limb(Limb::MAX, 0);

        // (2^64 - 1) * (2^32 - 1) = 2^96 - 2^64 - 2^32 + 1
        assert_eq!(p.limbs(), &[Limb::MAX - 1, Limb::MAX, 1]);
    }

    #[test]
    fn partial_product_shift_appends_zero_limbs() {
        let v = BigUnsigned::from_limbs([3]);
        assert_eq!(v.mul_limb(5, 2).limbs(), &[15, 0, 0]);
        assert_eq!(v.mul_limb(0, 2), BigUnsigned::ZERO);
        assert_eq!(BigUnsigned::ZERO.mul_limb(5, 2), BigUnsigned::ZERO);
    }

    #[test]
    fn borrow_runs_through_zero_limbs() {
        let a = BigUnsigned::from_limbs([1, 0, 0]);
        let b = BigUnsigned::from_limbs([1]);

        assert_eq!(a.abs_diff(&b).limbs(), &[Limb::MAX, Limb::MAX]);
    }

    #[test]
    fn carry_runs_through_full_limbs() {
        let a = BigUnsigned::from_limbs([Limb::MAX, Limb::MAX]);
        let b = BigUnsigned::from_limbs([1]);

        assert_eq!(a.add_limbs(&b).limbs(), &[1, 0, 0]);
    }
}
