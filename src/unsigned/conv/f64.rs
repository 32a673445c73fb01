//! Floating-point export.
//!
//! Exact output always goes through the decimal converter. This path is a
//! fast view for values an `f64` represents exactly.

use crate::error::BigUnsignedError;
use crate::unsigned::BigUnsigned;
use crate::unsigned::limb::{APPROX_BIT_LIMIT, BASE};

impl BigUnsigned {
    /// Converts the value to an `f64`.
    ///
    /// Only values of at most `APPROX_BIT_LIMIT` (53) bits are accepted, so
    /// every accepted value converts without rounding. That covers all
    /// one-limb values and two-limb values up to `2^53 - 1`.
    ///
    /// # Errors
    ///
    /// [`BigUnsignedError::MagnitudeTooLargeForApproximateConversion`] for
    /// wider values; use the decimal export for those.
    pub fn to_f64_approx(&self) -> Result<f64, BigUnsignedError> {
        let bits = self.bits();

        if bits > u64::from(APPROX_BIT_LIMIT) {
            return Err(BigUnsignedError::MagnitudeTooLargeForApproximateConversion {
                bits,
                limit: APPROX_BIT_LIMIT,
            });
        }

        Ok(self
            .limbs
            .iter()
            .fold(0.0, |acc, &l| acc * BASE as f64 + l as f64))
    }
}
