//! Secret file access
//!
//! Secrets are individually-named files under a base directory, the way
//! Kubernetes and Docker mount them. The file's full text content is the
//! value, with surrounding whitespace stripped; content is treated as opaque
//! text and never parsed further.
//!
//! Secrets may be absent in development environments, so lookups come in a
//! required flavor (fails fast with a missing-secret error) and an optional
//! flavor (absence yields `None`).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::ConfigError;

const SECRET_DIR_VAR: &str = "SECRET_DIR";
const DEFAULT_SECRET_DIR: &str = "secrets";

/// Reads secret values from files in a configured directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretStore {
    dir: PathBuf,
}

impl SecretStore {
    /// Create a store rooted at the directory named by `SECRET_DIR`,
    /// defaulting to `"secrets"` when the variable is not set.
    pub fn from_env() -> Self {
        Self::new(env::optional_or(SECRET_DIR_VAR, DEFAULT_SECRET_DIR))
    }

    /// Create a store rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory secrets are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read a required secret.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingSecret`] naming the secret when the file does
    /// not exist, is a directory, or is unreadable due to permissions;
    /// [`ConfigError::SecretRead`] for any other I/O failure.
    pub fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.read(name)?
            .ok_or_else(|| ConfigError::missing_secret(name))
    }

    /// Read an optional secret.
    ///
    /// The three not-available conditions that make [`SecretStore::required`]
    /// fail yield `Ok(None)` here instead.
    ///
    /// # Errors
    ///
    /// [`ConfigError::SecretRead`] for I/O failures other than the
    /// not-available conditions.
    pub fn optional(&self, name: &str) -> Result<Option<String>, ConfigError> {
        self.read(name)
    }

    fn read(&self, name: &str) -> Result<Option<String>, ConfigError> {
        let path = self.dir.join(name);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content.trim().to_string())),
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::NotFound | ErrorKind::IsADirectory | ErrorKind::PermissionDenied
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(ConfigError::SecretRead {
                name: name.to_string(),
                path: path.display().to_string(),
                source: e,
            }),
        }
    }
}
