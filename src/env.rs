//! Environment variable resolution
//!
//! Raw values come back exactly as the process environment holds them; no
//! trimming is applied, and a variable set to the empty string is a present
//! value, not an absent one. Absence is signaled per lookup mode: an error
//! for required parameters, `None` or a caller-supplied default otherwise.
//!
//! All lookups are side-effect-free and idempotent: re-invoking any of them
//! against an unchanged environment returns the same result.

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

/// Look up a required environment variable.
///
/// # Errors
///
/// [`ConfigError::MissingVariable`] naming the variable when it is not set.
pub fn required(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::missing_variable(name))
}

/// Look up an optional environment variable.
pub fn optional(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Look up an optional environment variable with a literal fallback.
pub fn optional_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
///
/// # Errors
///
/// [`ConfigError::Parse`] when the variable is set but its value does not
/// parse as `T`. An unset variable is not an error.
pub fn parsed_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(name) {
        Some(value) => value
            .parse::<T>()
            .map_err(|e| ConfigError::parse_error::<T>(name, e)),
        None => Ok(default),
    }
}

/// Parse an optional environment variable.
///
/// Returns `None` when the variable is not set, `Some(T)` when it is.
///
/// # Errors
///
/// [`ConfigError::Parse`] when the variable is set but its value does not
/// parse as `T`.
pub fn optional_parsed<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(name) {
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::parse_error::<T>(name, e)),
        None => Ok(None),
    }
}
