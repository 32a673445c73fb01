//! Division for `BigUnsigned`
//!
//! Multi-limb division has no exact single pass. The quotient is first
//! estimated from the divisor's leading limb with the single-limb long
//! division primitive, then refined.
//!
//! The estimate never falls below the true quotient `q*`, so whenever
//! `estimate * divisor <= dividend` it is already exact. Otherwise the loop
//! keeps a bracket `lo <= q* < hi` and probes its midpoint. Each probe is
//! multiplied out; the excess (or remainder) it leaves is fed back through
//! the single-limb primitive against the leading divisor limb `a`:
//! - dividing by `a`, rounded up, bounds how far the probe may be off
//! - dividing by `a + 1` bounds how far it must be off
//!
//! Both ends of the bracket move toward `q*` and the probe is strictly
//! inside the bracket, so the loop always terminates.
//!
//! Before estimating, both operands are scaled by one limb so the divisor's
//! leading limb is at least `BASE / 2`. The quotient is unchanged and each
//! refinement step then gains close to a full limb of precision.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::ops::{Div, Rem};

use tracing::{debug, debug_span, trace};

use crate::error::BigUnsignedError;
use crate::unsigned::BigUnsigned;
use crate::unsigned::limb::{BASE, Limb, Wide};
use crate::unsigned::ops::forward_binop;

/// Long division of a limb sequence by a single divisor in `1..=BASE`.
///
/// Returns the normalized quotient and the remainder.
pub(crate) fn div_limb(limbs: &[Limb], divisor: Wide) -> (BigUnsigned, Wide) {
    debug_assert!(divisor != 0 && divisor <= BASE);

    let mut quotient = BigUnsigned::zeroed(limbs.len());
    let mut carry: Wide = 0;

    for (q, &l) in quotient.limbs.iter_mut().zip(limbs) {
        // carry < divisor <= BASE, so this stays below 2^64.
        let current = l as Wide + carry * BASE;
        *q = (current / divisor) as Limb;
        carry = current % divisor;
    }

    (quotient.normalized(), carry)
}

/// `⌊limbs / divisor⌋ + 1`.
///
/// Applied to the excess of an overshooting trial quotient, this is never
/// smaller than the number of divisors the trial overshot by.
fn div_limb_overshoot(limbs: &[Limb], divisor: Wide) -> BigUnsigned {
    div_limb(limbs, divisor).0.add_limbs(&BigUnsigned::one())
}

/// The leading `len - drop` limbs, i.e. `⌊value / BASE^drop⌋`.
fn leading(value: &BigUnsigned, drop: usize) -> &[Limb] {
    &value.limbs[..value.len().saturating_sub(drop)]
}

fn check_preconditions(
    dividend: &BigUnsigned,
    divisor: &BigUnsigned,
) -> Result<(), BigUnsignedError> {
    if divisor.is_zero() {
        return Err(BigUnsignedError::DivisionByZero);
    }

    if dividend < divisor {
        return Err(BigUnsignedError::DividendSmallerThanDivisor);
    }

    Ok(())
}

/// Quotient of `dividend / divisor` for `dividend >= divisor > 0`.
fn quotient(dividend: &BigUnsigned, divisor: &BigUnsigned) -> BigUnsigned {
    let _span = debug_span!(
        "divide",
        dividend_limbs = dividend.len(),
        divisor_limbs = divisor.len()
    )
    .entered();

    let scale = (BASE / (divisor.limbs[0] as Wide + 1)) as Limb;

    let (n, d) = if scale > 1 {
        (
            Cow::Owned(dividend.mul_limb(scale, 0)),
            Cow::Owned(divisor.mul_limb(scale, 0)),
        )
    } else {
        (Cow::Borrowed(dividend), Cow::Borrowed(divisor))
    };

    let a = d.limbs[0] as Wide;
    let m = d.len() - 1;

    let mut hi = div_limb(leading(&n, m), a).0;
    let mut product = hi.mul_limbs(&d);

    if product <= *n {
        debug!(iterations = 0, "quotient estimate exact");
        return hi;
    }

    let one = BigUnsigned::one();
    let mut lo = BigUnsigned::ZERO;
    let mut q = hi.clone();
    let mut iterations = 0usize;

    let found = loop {
        iterations += 1;

        match product.cmp(&n) {
            Ordering::Greater => {
                let excess = product.abs_diff(&n);
                let top = leading(&excess, m);

                // q* >= q - (⌊top / a⌋ + 1), clamped at zero.
                let drop_at_most = div_limb_overshoot(top, a);
                lo = lo.max(q.checked_sub(&drop_at_most).unwrap_or(BigUnsigned::ZERO));

                // q* <= q - ⌊top / (a + 1)⌋ - 1. The drop is below q.
                let drop_at_least = div_limb(top, a + 1).0;
                hi = hi.min(q.abs_diff(&drop_at_least));
            }
            Ordering::Less | Ordering::Equal => {
                let remainder = n.abs_diff(&product);

                if remainder < *d {
                    break q;
                }

                let top = leading(&remainder, m);

                // q* >= q + max(1, ⌊top / (a + 1)⌋).
                let rise_at_least = div_limb(top, a + 1).0.max(one.clone());
                lo = lo.max(q.add_limbs(&rise_at_least));

                // q* <= q + ⌊top / a⌋.
                let rise_below = div_limb_overshoot(top, a);
                hi = hi.min(q.add_limbs(&rise_below));
            }
        }

        let width = hi.abs_diff(&lo);

        trace!(iteration = iterations, bracket_limbs = width.len(), "quotient bracket narrowed");

        if width == one {
            break lo;
        }

        q = div_limb(&lo.add_limbs(&hi).limbs, 2).0;
        product = q.mul_limbs(&d);
    };

    debug!(iterations, "quotient refined");

    found
}

impl BigUnsigned {
    /// `self / rhs`.
    ///
    /// # Errors
    ///
    /// - [`BigUnsignedError::DivisionByZero`] when `rhs` is zero
    /// - [`BigUnsignedError::DividendSmallerThanDivisor`] when `self < rhs`
    pub fn checked_div(&self, rhs: &BigUnsigned) -> Result<BigUnsigned, BigUnsignedError> {
        check_preconditions(self, rhs)?;

        Ok(quotient(self, rhs))
    }

    /// Quotient and remainder of `self / rhs`.
    ///
    /// Fails under the same conditions as [`Self::checked_div`].
    pub fn div_rem(
        &self,
        rhs: &BigUnsigned,
    ) -> Result<(BigUnsigned, BigUnsigned), BigUnsignedError> {
        check_preconditions(self, rhs)?;

        let q = quotient(self, rhs);
        let r = self.abs_diff(&q.mul_limbs(rhs));

        Ok((q, r))
    }

    /// `self % rhs`.
    ///
    /// Fails under the same conditions as [`Self::checked_div`].
    pub fn checked_rem(&self, rhs: &BigUnsigned) -> Result<BigUnsigned, BigUnsignedError> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    fn div_floor(&self, rhs: &BigUnsigned) -> BigUnsigned {
        assert!(!rhs.is_zero(), "division by zero");

        if self < rhs {
            return BigUnsigned::ZERO;
        }

        quotient(self, rhs)
    }

    fn rem_floor(&self, rhs: &BigUnsigned) -> BigUnsigned {
        assert!(!rhs.is_zero(), "division by zero");

        if self < rhs {
            return self.clone();
        }

        self.abs_diff(&quotient(self, rhs).mul_limbs(rhs))
    }
}

forward_binop!(
    /// Integer division producing the floor quotient.
    ///
    /// A dividend smaller than the divisor yields zero. Use
    /// [`BigUnsigned::checked_div`] to have that reported as
    /// [`BigUnsignedError::DividendSmallerThanDivisor`] instead.
    ///
    /// ```
    /// use bigunsigned::{BigUnsigned, BigUnsignedError};
    ///
    /// let (small, big) = (BigUnsigned::from(7u8), BigUnsigned::from(9u8));
    ///
    /// assert_eq!(&small / &big, BigUnsigned::ZERO);
    /// assert_eq!(
    ///     small.checked_div(&big),
    ///     Err(BigUnsignedError::DividendSmallerThanDivisor)
    /// );
    /// ```
    ///
    /// # Panics
    ///
    /// Panics with `"division by zero"` when the divisor is zero.
    impl Div, div => div_floor
);

forward_binop!(
    /// Remainder of the floor division.
    ///
    /// A dividend smaller than the divisor is returned unchanged. Use
    /// [`BigUnsigned::checked_rem`] to have that reported instead.
    ///
    /// # Panics
    ///
    /// Panics with `"division by zero"` when the divisor is zero.
    impl Rem, rem => rem_floor
);
