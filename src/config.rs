//! Environment-driven switches for the harness helpers
//!
//! Two boolean-ish variables, read once at start-up: RUNCHECK_TRACE and
//! RUNCHECK_DEBUG. Enabling trace implies debug. There is no other
//! configuration surface.

use std::env;

/// Resolved diagnostic switches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    pub trace: bool,
    pub debug: bool,
}

impl HarnessConfig {
    /// Read the switches from the process environment.
    /// Call once during start-up and pass the result around.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let trace = lookup("RUNCHECK_TRACE").is_some_and(|v| truthy(&v));
        let debug = lookup("RUNCHECK_DEBUG").is_some_and(|v| truthy(&v));

        HarnessConfig {
            trace,
            // trace implies debug
            debug: debug || trace,
        }
    }
}

/// "Boolean-ish": set to anything but empty, "0", or "false" counts as on.
fn truthy(value: &str) -> bool {
    !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(trace: Option<&str>, debug: Option<&str>) -> HarnessConfig {
        HarnessConfig::from_lookup(|key| match key {
            "RUNCHECK_TRACE" => trace.map(String::from),
            "RUNCHECK_DEBUG" => debug.map(String::from),
            _ => None,
        })
    }

    #[test]
    fn unset_means_off() {
        let config = config_with(None, None);
        assert!(!config.trace);
        assert!(!config.debug);
    }

    #[test]
    fn debug_alone() {
        let config = config_with(None, Some("1"));
        assert!(!config.trace);
        assert!(config.debug);
    }

    #[test]
    fn trace_implies_debug() {
        let config = config_with(Some("1"), None);
        assert!(config.trace);
        assert!(config.debug);
    }

    #[test]
    fn falsy_values_are_off() {
        for value in ["", "0", "false", "FALSE"] {
            let config = config_with(Some(value), Some(value));
            assert!(!config.trace, "{:?} should be off", value);
            assert!(!config.debug, "{:?} should be off", value);
        }
    }

    #[test]
    fn arbitrary_values_are_on() {
        let config = config_with(None, Some("yes"));
        assert!(config.debug);
    }
}
