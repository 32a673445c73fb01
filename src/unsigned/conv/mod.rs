//! Conversions between `BigUnsigned` and native numeric types
//!
//! Each submodule covers one native width, following these rules:
//! - widening into `BigUnsigned` is infallible (`From`)
//! - narrowing out of it is fallible (`TryFrom`) and reports the target
//!   width in `BigUnsignedError::Overflow`
//! - floating-point export is approximate and bounded by a limb count
//!
//! Decimal conversions live in the `decimal` module.

mod f64;
pub(super) mod native;
mod u128;
mod u16;
mod u32;
mod u64;
mod u8;
mod usize;

pub(super) use native::to_u128;
