//! Total order over `BigUnsigned`.
//!
//! With no leading zero limbs, a longer value is always the larger one.
//! Values of equal length are compared limb by limb from the most
//! significant end, and the first mismatch decides. Running off the end
//! without a mismatch is the explicit equality case.

use std::cmp::Ordering;

use crate::unsigned::BigUnsigned;

impl Ord for BigUnsigned {
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert!(self.is_normalized() && other.is_normalized());

        self.len().cmp(&other.len()).then_with(|| {
            self.limbs
                .iter()
                .zip(other.limbs.iter())
                .find(|(l, r)| l != r)
                .map_or(Ordering::Equal, |(l, r)| l.cmp(r))
        })
    }
}

impl PartialOrd for BigUnsigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
