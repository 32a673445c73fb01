//! Binary exponentiation.
//!
//! Square-and-multiply built only from the arithmetic core: the exponent
//! is read from its lowest bit and halved with the single-limb division.

use num_traits::Pow;

use crate::unsigned::BigUnsigned;
use crate::unsigned::div::div_limb;

impl BigUnsigned {
    /// Raises `self` to the power `exponent`. `0^0` is one.
    ///
    /// Uses `Θ(log exponent)` multiplications.
    pub fn pow(&self, exponent: &BigUnsigned) -> BigUnsigned {
        let mut result = BigUnsigned::one();
        let mut base = self.clone();
        let mut exponent = exponent.clone();

        while !exponent.is_zero() {
            if !exponent.is_even() {
                result = result.mul_limbs(&base);
            }

            exponent = div_limb(&exponent.limbs, 2).0;

            if !exponent.is_zero() {
                base = base.mul_limbs(&base);
            }
        }

        result
    }
}

impl Pow<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    fn pow(self, rhs: &BigUnsigned) -> BigUnsigned {
        BigUnsigned::pow(self, rhs)
    }
}

impl Pow<BigUnsigned> for BigUnsigned {
    type Output = BigUnsigned;

    fn pow(self, rhs: BigUnsigned) -> BigUnsigned {
        BigUnsigned::pow(&self, &rhs)
    }
}

impl Pow<u32> for &BigUnsigned {
    type Output = BigUnsigned;

    fn pow(self, rhs: u32) -> BigUnsigned {
        BigUnsigned::pow(self, &BigUnsigned::from(rhs))
    }
}

impl Pow<u32> for BigUnsigned {
    type Output = BigUnsigned;

    fn pow(self, rhs: u32) -> BigUnsigned {
        BigUnsigned::pow(&self, &BigUnsigned::from(rhs))
    }
}
