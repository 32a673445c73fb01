//! Decimal conversion
//!
//! Decimal input is turned into limbs by long division of the decimal
//! number itself by `BASE`, performed digit by digit so the whole number is
//! never held in a native integer:
//! - seed an accumulator with the leading `DECIMAL_BLOCK` digits
//! - sweep the rest, `acc = acc * 10 + digit`, writing `acc / BASE` back
//!   into the consumed slot and keeping `acc % BASE`
//! - the sweep leaves a shorter decimal quotient and one limb (the final
//!   remainder); repeat until the quotient fits in a single limb
//!
//! The reverse direction accumulates `limb * BASE^i` in decimal digit
//! arithmetic. Both directions are quadratic in the number of digits.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use num_traits::{PrimInt, Unsigned};

use crate::error::BigUnsignedError;
use crate::unsigned::BigUnsigned;
use crate::unsigned::limb::{BASE, DECIMAL_BLOCK, Limb, Wide};

/// Value of a short run of decimal digits.
///
/// Callers pass at most `DECIMAL_BLOCK` digits, which always fit a limb.
fn digits_value(digits: &[u8]) -> Wide {
    digits
        .iter()
        .fold(0, |acc, &d| acc * 10 + d as Wide)
}

/// Converts validated decimal digits, most significant first, to limbs.
///
/// The buffer is reused for the shrinking decimal quotient.
fn limbs_from_decimal(mut digits: Vec<u8>) -> BigUnsigned {
    // Produced least significant first.
    let mut limbs = Vec::with_capacity(digits.len() / DECIMAL_BLOCK + 1);
    let mut len = digits.len();

    while len > DECIMAL_BLOCK {
        let mut acc = digits_value(&digits[..DECIMAL_BLOCK]);

        for j in DECIMAL_BLOCK..len {
            acc = acc * 10 + digits[j] as Wide;
            digits[j - DECIMAL_BLOCK] = (acc / BASE) as u8;
            acc %= BASE;
        }

        len -= DECIMAL_BLOCK;
        limbs.push(acc as Limb);
    }

    let head = digits_value(&digits[..len]);

    if head != 0 {
        limbs.push(head as Limb);
    }

    limbs.reverse();

    BigUnsigned { limbs }.normalized()
}

/// `digits *= factor` on little-endian decimal digits.
fn mul_decimal(digits: &mut Vec<u8>, factor: Wide) {
    let mut carry: Wide = 0;

    for d in digits.iter_mut() {
        let current = *d as Wide * factor + carry;
        *d = (current % 10) as u8;
        carry = current / 10;
    }

    while carry != 0 {
        digits.push((carry % 10) as u8);
        carry /= 10;
    }
}

/// `acc += addend` on little-endian decimal digits.
fn add_decimal(acc: &mut Vec<u8>, addend: &[u8]) {
    if acc.len() < addend.len() {
        acc.resize(addend.len(), 0);
    }

    let mut carry = 0u8;

    for (i, a) in acc.iter_mut().enumerate() {
        let sum = *a + addend.get(i).copied().unwrap_or(0) + carry;
        *a = sum % 10;
        carry = sum / 10;

        if carry == 0 && i >= addend.len() {
            break;
        }
    }

    if carry != 0 {
        acc.push(carry);
    }
}

impl BigUnsigned {
    /// Builds a value from decimal digit values, most significant first.
    ///
    /// Any unsigned primitive integer type is accepted as the digit type;
    /// every element must lie in `0..=9`. Leading zeros are allowed.
    ///
    /// # Errors
    ///
    /// - [`BigUnsignedError::EmptyInput`] when there are no digits
    /// - [`BigUnsignedError::InvalidDigit`] for the first element above 9
    pub fn from_decimal_digits<I, T>(digits: I) -> Result<Self, BigUnsignedError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
        T: PrimInt + Unsigned,
    {
        let digits = digits.into_iter();

        if digits.len() == 0 {
            return Err(BigUnsignedError::EmptyInput);
        }

        let mut buffer = Vec::with_capacity(digits.len());

        for (position, digit) in digits.enumerate() {
            match digit.to_u8() {
                Some(d) if d <= 9 => buffer.push(d),
                _ => return Err(BigUnsignedError::InvalidDigit { position }),
            }
        }

        Ok(limbs_from_decimal(buffer))
    }

    /// Exact decimal digits, most significant first.
    ///
    /// Zero yields `[0]`; any other value has no leading zero.
    pub fn to_decimal_digits(&self) -> Vec<u8> {
        // Both little-endian while accumulating.
        let mut acc = vec![0u8];
        let mut weight = vec![1u8];

        for (i, &limb) in self.limbs.iter().rev().enumerate() {
            if limb != 0 {
                let mut term = weight.clone();
                mul_decimal(&mut term, limb as Wide);
                add_decimal(&mut acc, &term);
            }

            if i + 1 < self.len() {
                mul_decimal(&mut weight, BASE);
            }
        }

        while acc.len() > 1 && acc.last() == Some(&0) {
            acc.pop();
        }

        acc.reverse();
        acc
    }
}

impl FromStr for BigUnsigned {
    type Err = BigUnsignedError;

    /// Parses a plain decimal numeral: ASCII digits only, no sign, prefix,
    /// separators or whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_digits(s.bytes().map(|b| b.wrapping_sub(b'0')))
    }
}

impl Display for BigUnsigned {
    /// Formats the exact decimal value.
    ///
    /// Width, fill and alignment flags are honoured.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let digits: String = self
            .to_decimal_digits()
            .into_iter()
            .map(|d| char::from(b'0' + d))
            .collect();

        f.pad_integral(true, "", &digits)
    }
}
