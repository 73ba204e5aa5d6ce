//! `basedreal`: arbitrary-precision mixed-radix positional real numbers.
//!
//! Re-exports [`basedreal_base`] and [`basedreal_real`], and pre-registers
//! the standard bases named in `spec.md` §4.2.

#![cfg_attr(not(feature = "std"), no_std)]

pub use basedreal_base::{digit_width, lookup, register, Error, LoopingList, RadixBase, Result};
pub use basedreal_real::BasedReal;

/// Registers the standard bases `spec.md` §4.2 names, so callers can
/// `lookup("sexagesimal")` etc. without building a [`RadixBase`] by hand.
/// Idempotent: re-registering an already-registered name is harmless, since
/// the registry simply overwrites the existing entry with an equal one.
#[cfg(feature = "std")]
pub fn init_standard_bases() -> Result<()> {
    register(vec![10], vec![10], "decimal", None)?;
    register(vec![60], vec![60], "sexagesimal", None)?;
    register(vec![60], vec![60], "floating_sexagesimal", None)?;
    register(
        vec![10, 12, 30],
        vec![60],
        "historical",
        Some(vec!["".into(), "r ".into(), "s ".into()]),
    )?;
    register(vec![10], vec![100], "historical_decimal", None)?;
    register(vec![10], vec![60], "integer_and_sexagesimal", None)?;
    register(vec![10], vec![24, 60], "temporal", None)?;
    Ok(())
}
