//! Configuration bootstrap for the public-consultation monitor
//!
//! `consultconf` resolves the process configuration once at startup from two
//! sources: process environment variables, and individually-named secret
//! files under a secret directory (Kubernetes / Docker style mounts). The
//! result is an immutable [`Settings`] table handed to the rest of the
//! application; everything downstream (persistence, notification delivery)
//! only consumes the resolved values.
//!
//! # Features
//!
//! - **Required vs optional lookups**: a missing required source fails fast
//!   with an error naming it; optional sources fall back to `None` or a
//!   literal default, never logging or retrying.
//! - **Missing vs malformed**: absence and failed coercion are distinct
//!   error kinds, so startup code can tell "not configured" from
//!   "misconfigured" (see [`ConfigError::is_missing`]).
//! - **Typed coercion**: integers via `FromStr`, comma-separated
//!   consultation-type sets, URL query-string mappings.
//! - **Directory-based secrets**: one file per secret, content trimmed and
//!   otherwise opaque, with on-demand accessors so optional secrets need not
//!   exist until used.
//!
//! # Example
//!
//! ```rust
//! use consultconf::Settings;
//!
//! # fn main() -> anyhow::Result<()> {
//! # std::env::set_var("SLACK_CHANNEL_ID", "C0123456789");
//! let settings = Settings::from_env()?;
//! assert_eq!(settings.time_zone, "Europe/Riga");
//! assert!(!settings.enabled_public_consultation_types.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Sources
//!
//! Environment variables are read through [`env`]; raw values are never
//! trimmed, and a variable set to the empty string counts as present.
//! Secrets are read through [`SecretStore`], rooted at `SECRET_DIR`
//! (default `"secrets"`); a secret file that is absent, a directory, or
//! unreadable due to permissions is uniformly "not available".

pub mod env;

mod consultation;
mod error;
mod query;
mod secrets;
mod settings;

pub use consultation::{PublicConsultationType, UnknownConsultationType};
pub use error::ConfigError;
pub use query::{parse_query_string, QueryParams};
pub use secrets::SecretStore;
pub use settings::{default_database_url, DatabaseSettings, Settings, DATA_DIR, ROOT_URL};
