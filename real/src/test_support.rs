//! Shared `RadixBase` fixtures for the test modules scattered across this
//! crate, mirroring the historical/sexagesimal/decimal worked examples used
//! throughout `spec.md`.

#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

use basedreal_base::RadixBase;

/// Plain base-10, single-digit-per-position, no separators.
pub(crate) fn decimal_base() -> Arc<RadixBase> {
    Arc::new(RadixBase::new(vec![10], vec![10], "decimal", None).expect("valid radix"))
}

/// Uniform base-60, comma-separated integer positions.
pub(crate) fn sexagesimal_base() -> Arc<RadixBase> {
    Arc::new(RadixBase::new(vec![60], vec![60], "sexagesimal", None).expect("valid radix"))
}

/// The `§8` worked-example base: integer positions cycle `[10, 12, 30]`
/// (units, signs, rounds -- outermost first), fractional positions are
/// uniformly sexagesimal.
pub(crate) fn historical_base() -> Arc<RadixBase> {
    Arc::new(
        RadixBase::new(
            vec![10, 12, 30],
            vec![60],
            "historical",
            Some(vec!["".into(), "r ".into(), "s ".into()]),
        )
        .expect("valid radix"),
    )
}
