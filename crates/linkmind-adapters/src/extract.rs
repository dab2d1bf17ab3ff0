//! Fail-soft field extraction.
//!
//! Each field is read with [`extract`], which reports why it failed, and the
//! caller folds the failure into the field's default with [`extract_or`].
//! Malformed telemetry never raises past an adapter.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use linkmind_core::errors::ExtractError;

/// Declare a lazily compiled pattern. A pattern that fails to compile yields
/// `None` and every extraction against it reports [`ExtractError::BadPattern`].
macro_rules! field_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($regex_str).ok());
    };
}

/// Capture group 1 of `pattern` in `text`, parsed as `T`.
pub fn extract<T: FromStr>(
    field: &'static str,
    pattern: &LazyLock<Option<Regex>>,
    text: &str,
) -> Result<T, ExtractError> {
    let Some(re) = pattern.as_ref() else {
        return Err(ExtractError::BadPattern { field });
    };
    let raw = re
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(ExtractError::Missing { field })?;
    raw.trim().parse::<T>().map_err(|_| ExtractError::Unparseable {
        field,
        raw: raw.to_string(),
    })
}

/// [`extract`], falling back to `default` on any failure.
pub fn extract_or<T: FromStr>(
    field: &'static str,
    pattern: &LazyLock<Option<Regex>>,
    text: &str,
    default: T,
) -> T {
    match extract(field, pattern, text) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(field, error = %e, "field extraction fell back to default");
            default
        }
    }
}
