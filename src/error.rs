//! Error types for configuration resolution

/// Errors that can occur while resolving the configuration table.
///
/// Two semantic kinds matter to callers: a configuration source is *missing*
/// (a required environment variable or secret is absent), or a value is
/// *present but malformed* (failed coercion). Use [`ConfigError::is_missing`]
/// to tell them apart without matching every variant.
///
/// Filesystem anomalies while reading a secret (file not found, path is a
/// directory, permission denied) are normalized into the missing kind:
/// from the caller's perspective "secret unusable" is the only actionable
/// signal. Any other I/O failure surfaces as [`ConfigError::SecretRead`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is not set.
    #[error("Environment variable '{name}' is required but not set")]
    MissingVariable {
        /// Name of the missing environment variable
        name: String,
    },

    /// Required secret is not available in the secret directory.
    ///
    /// Covers three underlying conditions: the file does not exist, the path
    /// is a directory, or the file is unreadable due to permissions.
    #[error("Secret '{name}' is not available")]
    MissingSecret {
        /// Name of the missing secret
        name: String,
    },

    /// Failed to parse a configuration value into the target type.
    ///
    /// Raised for non-numeric integer fields and unknown consultation-type
    /// tokens. The message carries the parser's own description, including
    /// the offending token where the parser reports one.
    #[error("Failed to parse environment variable '{name}' as {type_name}: {message}")]
    Parse {
        /// Name of the environment variable being parsed
        name: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: String,
        /// Error message from the parser
        message: String,
    },

    /// Failed to read a secret file for a reason other than absence.
    #[error("Failed to read secret '{name}' from '{path}': {source}")]
    SecretRead {
        /// Name of the secret being read
        name: String,
        /// Path to the file that failed to be read
        path: String,
        /// Underlying I/O error that caused the failure
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a parse error carrying the target type's name
    pub fn parse_error<T>(name: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            name: name.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a missing environment variable error
    pub fn missing_variable(name: impl Into<String>) -> Self {
        Self::MissingVariable { name: name.into() }
    }

    /// Create a missing secret error
    pub fn missing_secret(name: impl Into<String>) -> Self {
        Self::MissingSecret { name: name.into() }
    }

    /// True when the error reports an absent source rather than a malformed
    /// or unreadable value.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            Self::MissingVariable { .. } | Self::MissingSecret { .. }
        )
    }
}
