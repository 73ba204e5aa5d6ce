//! Shared `RadixBase` fixtures for the integration suites in this directory,
//! built through the crate's public API (mirroring the worked examples used
//! throughout `spec.md`).

use std::sync::Arc;

use basedreal_base::RadixBase;

/// Plain base-10, single-digit-per-position, no separators.
#[allow(dead_code)]
pub fn decimal_base() -> Arc<RadixBase> {
    Arc::new(RadixBase::new(vec![10], vec![10], "decimal", None).expect("valid radix"))
}

/// Uniform base-60, comma-separated integer positions.
#[allow(dead_code)]
pub fn sexagesimal_base() -> Arc<RadixBase> {
    Arc::new(RadixBase::new(vec![60], vec![60], "sexagesimal", None).expect("valid radix"))
}

/// The worked-example base: integer positions cycle `[10, 12, 30]` (units,
/// signs, rounds -- outermost first), fractional positions are uniformly
/// sexagesimal.
#[allow(dead_code)]
pub fn historical_base() -> Arc<RadixBase> {
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
