//! Shared primitives for the `basedreal` crates: the error taxonomy, the
//! [`LoopingList`] periodic-sequence type, and the [`RadixBase`] mixed-radix
//! system registry and its position math.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod error;
mod looping;
mod radix;
#[cfg(feature = "std")]
mod registry;

pub use error::{Error, Result};
pub use looping::LoopingList;
pub use radix::{digit_width, RadixBase};
#[cfg(feature = "std")]
pub use registry::{lookup, register};
