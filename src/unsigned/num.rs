//! `num-traits` integration.

use num_traits::{One, ToPrimitive, Zero};

use crate::unsigned::BigUnsigned;
use crate::unsigned::conv;

impl Zero for BigUnsigned {
    fn zero() -> Self {
        BigUnsigned::ZERO
    }

    fn is_zero(&self) -> bool {
        BigUnsigned::is_zero(self)
    }
}

impl One for BigUnsigned {
    fn one() -> Self {
        BigUnsigned::one()
    }

    fn is_one(&self) -> bool {
        self.limbs == [1]
    }
}

impl ToPrimitive for BigUnsigned {
    fn to_i64(&self) -> Option<i64> {
        self.to_u64().and_then(|v| i64::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self).ok()
    }

    fn to_u128(&self) -> Option<u128> {
        conv::to_u128(self)
    }

    /// `None` past the approximate conversion limit.
    fn to_f64(&self) -> Option<f64> {
        self.to_f64_approx().ok()
    }
}
