//! The resolved parameter table
//!
//! Every parameter is resolved exactly once by [`Settings::from_env`] at
//! process startup. The resulting value is immutable; consumers receive it by
//! reference instead of reaching into process-wide state. If resolution fails
//! the process must not proceed to serve anything; this is a fail-fast
//! boundary, not a retry boundary.
//!
//! The two secret accessors defer their lookup until called, so an optional
//! secret does not have to exist before something actually needs it.

use serde::Serialize;

use crate::consultation::PublicConsultationType;
use crate::env;
use crate::error::ConfigError;
use crate::query::{self, QueryParams};
use crate::secrets::SecretStore;

/// Relative directory for locally persisted data.
pub const DATA_DIR: &str = "data";

/// Root URL of the municipal site the monitor watches.
pub const ROOT_URL: &str = "https://www.riga.lv";

const ENABLED_TYPES_VAR: &str = "ENABLED_PUBLIC_CONSULTATION_TYPES";
// Earlier deployments configured the set under this name; still honored.
const LEGACY_TYPES_VAR: &str = "PUBLIC_CONSULTATION_TYPES";

/// Connection URL for the embedded file-based database, used when no explicit
/// database driver or host is configured.
pub fn default_database_url() -> String {
    format!("sqlite://{DATA_DIR}/sqlite.db")
}

/// Explicit database connection parameters.
///
/// All fields are optional; a deployment that supplies none of them runs on
/// [`default_database_url`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatabaseSettings {
    /// Driver identifier, e.g. `postgresql`.
    pub driver: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Database name.
    pub name: Option<String>,
    pub username: Option<String>,
    /// Extra connection query parameters (`sslmode=require&...`).
    pub query: QueryParams,
}

impl DatabaseSettings {
    fn from_env() -> Result<Self, ConfigError> {
        // An empty DATABASE_PORT counts as unset.
        let port = match env::optional("DATABASE_PORT").filter(|s| !s.is_empty()) {
            Some(raw) => Some(
                raw.parse::<u16>()
                    .map_err(|e| ConfigError::parse_error::<u16>("DATABASE_PORT", e))?,
            ),
            None => None,
        };
        Ok(Self {
            driver: env::optional("DATABASE_DRIVER"),
            host: env::optional("DATABASE_HOST"),
            port,
            name: env::optional("DATABASE_NAME"),
            username: env::optional("DATABASE_USERNAME"),
            query: query::parse_query_string(
                env::optional("DATABASE_QUERY_STRING_PARAMETERS").as_deref(),
            ),
        })
    }

    /// Whether any explicit connection parameter was supplied.
    pub fn is_configured(&self) -> bool {
        self.driver.is_some()
            || self.host.is_some()
            || self.port.is_some()
            || self.name.is_some()
            || self.username.is_some()
            || !self.query.is_empty()
    }
}

/// The application's resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Slack channel notifications are delivered to.
    pub slack_channel_id: String,
    /// Consultation categories the monitor processes. Never empty.
    pub enabled_public_consultation_types: Vec<PublicConsultationType>,
    /// Retention period for consultations no longer listed upstream, in days.
    pub days_to_store_inactive_public_consultations: u32,
    /// IANA time zone identifier used for scheduling and display.
    pub time_zone: String,
    /// Explicit database connection parameters, if any.
    pub database: DatabaseSettings,
    #[serde(skip)]
    secrets: SecretStore,
}

impl Settings {
    /// Resolve the full parameter table from the process environment.
    ///
    /// The secret directory is resolved first since secret reads depend on
    /// it; the remaining parameters have no ordering dependencies.
    /// Resolution is all-or-nothing: the first missing or malformed
    /// parameter aborts with an error.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingVariable`] for absent required variables,
    /// [`ConfigError::Parse`] for values that fail coercion.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_secret_store(SecretStore::from_env())
    }

    /// Resolve the parameter table against an explicit secret store.
    pub fn with_secret_store(secrets: SecretStore) -> Result<Self, ConfigError> {
        let (types_var, raw_types) = match env::optional(ENABLED_TYPES_VAR) {
            Some(raw) => (ENABLED_TYPES_VAR, Some(raw)),
            None => (LEGACY_TYPES_VAR, env::optional(LEGACY_TYPES_VAR)),
        };

        let settings = Settings {
            slack_channel_id: env::required("SLACK_CHANNEL_ID")?,
            enabled_public_consultation_types: PublicConsultationType::parse_enabled(
                raw_types.as_deref(),
                types_var,
            )?,
            days_to_store_inactive_public_consultations: env::parsed_or(
                "DAYS_TO_STORE_INACTIVE_PUBLIC_CONSULTATIONS",
                365,
            )?,
            time_zone: env::optional_or("TIME_ZONE", "Europe/Riga"),
            database: DatabaseSettings::from_env()?,
            secrets,
        };

        tracing::debug!(
            secret_dir = %settings.secrets.dir().display(),
            enabled_types = settings.enabled_public_consultation_types.len(),
            database_configured = settings.database.is_configured(),
            "configuration resolved"
        );

        Ok(settings)
    }

    /// The secret store the table was resolved against.
    pub fn secret_store(&self) -> &SecretStore {
        &self.secrets
    }

    /// Slack bot user OAuth token, read from the secret store on demand.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingSecret`] when the `slack-bot-user-oauth-token`
    /// secret is not available.
    pub fn slack_bot_user_oauth_token(&self) -> Result<String, ConfigError> {
        self.secrets.required("slack-bot-user-oauth-token")
    }

    /// Database password, read from the secret store on demand.
    ///
    /// Absent in deployments that pass credentials another way, hence
    /// optional.
    pub fn database_password(&self) -> Result<Option<String>, ConfigError> {
        self.secrets.optional("database-password")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database_url_is_rooted_in_data_dir() {
        assert_eq!(default_database_url(), "sqlite://data/sqlite.db");
        assert!(default_database_url().contains(DATA_DIR));
    }

    #[test]
    fn test_root_url_is_absolute() {
        let parsed = url::Url::parse(ROOT_URL).unwrap();
        assert_eq!(parsed.scheme(), "https");
    }

    #[test]
    fn test_database_settings_default_is_unconfigured() {
        assert!(!DatabaseSettings::default().is_configured());
    }

    #[test]
    fn test_database_settings_any_field_marks_configured() {
        let host_only = DatabaseSettings {
            host: Some("db.internal".to_string()),
            ..Default::default()
        };
        assert!(host_only.is_configured());

        let query_only = DatabaseSettings {
            query: query::parse_query_string(Some("sslmode=require")),
            ..Default::default()
        };
        assert!(query_only.is_configured());
    }
}
