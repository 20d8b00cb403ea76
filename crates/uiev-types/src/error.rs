//! Unified error-code interface.
//!
//! Every uiev error type implements [`ErrorCode`] so that diagnostics
//! sinks can log a stable, machine-readable code next to the message.
//!
//! # Example
//!
//! ```
//! use uiev_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum WidgetError {
//!     Detached,
//! }
//!
//! impl ErrorCode for WidgetError {
//!     fn code(&self) -> &'static str {
//!         "WIDGET_DETACHED"
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         false
//!     }
//! }
//!
//! assert_eq!(WidgetError::Detached.code(), "WIDGET_DETACHED");
//! ```

/// Machine-readable classification of an error.
///
/// # Code Format
///
/// - UPPER_SNAKE_CASE, e.g. `"EVENT_RECURSIVE_FIRE"`
/// - Prefixed with the owning layer (`EVENT_`, `CONFIG_`)
/// - Stable once published
pub trait ErrorCode {
    /// Returns the stable error code.
    fn code(&self) -> &'static str;

    /// Returns whether the caller can reasonably retry or correct at runtime.
    ///
    /// Programmer-contract violations are never recoverable.
    fn is_recoverable(&self) -> bool;
}

/// Asserts that an error code is non-empty, prefixed, and UPPER_SNAKE_CASE.
///
/// # Panics
///
/// Panics with a descriptive message when any check fails.
///
/// ```
/// use uiev_types::{assert_error_code, ErrorCode};
///
/// struct Stale;
///
/// impl ErrorCode for Stale {
///     fn code(&self) -> &'static str { "CACHE_STALE" }
///     fn is_recoverable(&self) -> bool { true }
/// }
///
/// assert_error_code(&Stale, "CACHE_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "Error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "Error code '{code}' must start with prefix '{expected_prefix}'"
    );
    assert!(
        is_upper_snake_case(code),
        "Error code '{code}' must be UPPER_SNAKE_CASE"
    );
}

/// Runs [`assert_error_code`] over every given variant.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum ProbeError {
        Busy,
        Broken,
    }

    impl ErrorCode for ProbeError {
        fn code(&self) -> &'static str {
            match self {
                Self::Busy => "PROBE_BUSY",
                Self::Broken => "PROBE_BROKEN",
            }
        }

        fn is_recoverable(&self) -> bool {
            matches!(self, Self::Busy)
        }
    }

    #[test]
    fn codes_and_recoverability() {
        assert_eq!(ProbeError::Busy.code(), "PROBE_BUSY");
        assert!(ProbeError::Busy.is_recoverable());
        assert!(!ProbeError::Broken.is_recoverable());
    }

    #[test]
    fn all_variants_pass_convention() {
        assert_error_codes(&[ProbeError::Busy, ProbeError::Broken], "PROBE_");
    }

    #[test]
    #[should_panic(expected = "must start with prefix")]
    fn wrong_prefix_panics() {
        assert_error_code(&ProbeError::Busy, "EVENT_");
    }

    #[test]
    fn snake_case_detection() {
        assert!(is_upper_snake_case("EVENT_BAD_SENDER"));
        assert!(is_upper_snake_case("V2_TAG"));
        assert!(!is_upper_snake_case(""));
        assert!(!is_upper_snake_case("event_bad"));
        assert!(!is_upper_snake_case("_EVENT"));
        assert!(!is_upper_snake_case("EVENT_"));
        assert!(!is_upper_snake_case("EVENT__BAD"));
    }
}
