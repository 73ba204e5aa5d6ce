//! Process-wide registry of named [`RadixBase`]s.

use std::sync::Arc;

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::radix::RadixBase;
use crate::{Error, Result};

/// Registrations are keyed by base name and written once at process
/// startup; after that they are read-only (per the spec's concurrency
/// model). Lazily initialised on first access.
static REGISTRY: OnceLock<Mutex<HashMap<String, Arc<RadixBase>>>> = OnceLock::new();

fn registry() -> &'static Mutex<HashMap<String, Arc<RadixBase>>> {
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Validates and registers a new base under `name`, returning a shared
/// handle to it. Fails with [`Error::InvalidRadix`] if any radix is below 2.
/// Re-registering an existing name replaces the previous base, matching the
/// "one-time at process startup" lifecycle: hosts that register at runtime
/// are responsible for serialising their own registration calls.
pub fn register(
    left: Vec<u32>,
    right: Vec<u32>,
    name: impl Into<String>,
    separators: Option<Vec<String>>,
) -> Result<Arc<RadixBase>> {
    let name = name.into();
    let base = Arc::new(RadixBase::new(left, right, name.clone(), separators)?);
    registry().lock().unwrap().insert(name, base.clone());
    Ok(base)
}

/// Looks up a previously registered base by name.
pub fn lookup(name: &str) -> Result<Arc<RadixBase>> {
    registry()
        .lock()
        .unwrap()
        .get(name)
        .cloned()
        .ok_or(Error::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_then_lookup_roundtrips() {
        let name = "test-registry-roundtrip";
        register(vec![10], vec![10], name, None).unwrap();
        let found = lookup(name).unwrap();
        assert_eq!(found.name(), name);
    }

    #[test]
    fn lookup_missing_fails_not_found() {
        assert_eq!(lookup("definitely-not-registered-xyz").unwrap_err(), Error::NotFound);
    }

    #[test]
    fn register_rejects_small_radix() {
        assert_eq!(
            register(vec![1], vec![2], "bad-registry-base", None).unwrap_err(),
            Error::InvalidRadix
        );
    }
}
