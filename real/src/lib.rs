//! The [`BasedReal`] value type: an arbitrary-precision real number
//! positioned against a named [`basedreal_base::RadixBase`].

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod add;
mod carry;
mod cmp;
mod construct;
mod convert;
mod div;
mod index;
mod magnitude;
mod mul;
mod parse;
mod pow;
mod repr;
mod resize;

#[cfg(test)]
mod test_support;

pub use repr::BasedReal;
