//! Public consultation categories
//!
//! The monitor only processes consultations whose category is enabled. The
//! enabled set comes from a comma-separated environment variable; an empty or
//! absent list enables every category so a bare deployment watches
//! everything.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Category of municipal public consultation.
///
/// String tokens (the configuration contract) are the kebab-case member
/// names, e.g. `building-intention`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PublicConsultationType {
    /// Building intention hearings
    BuildingIntention,
    /// Territory and detail plan reviews
    TerritoryPlanning,
    /// General public discussions
    PublicDiscussion,
}

/// Token that does not match any consultation category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown public consultation type '{0}'")]
pub struct UnknownConsultationType(pub String);

impl PublicConsultationType {
    /// Every category, in declaration order.
    pub const ALL: [PublicConsultationType; 3] = [
        PublicConsultationType::BuildingIntention,
        PublicConsultationType::TerritoryPlanning,
        PublicConsultationType::PublicDiscussion,
    ];

    /// The configuration token for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            PublicConsultationType::BuildingIntention => "building-intention",
            PublicConsultationType::TerritoryPlanning => "territory-planning",
            PublicConsultationType::PublicDiscussion => "public-discussion",
        }
    }

    /// Parse a comma-separated list of category tokens into the enabled set.
    ///
    /// Tokens are trimmed and empty tokens dropped, so trailing commas and
    /// stray whitespace are harmless. An unrecognized token is an error
    /// rather than being skipped: silently dropping it would hide
    /// misconfiguration. When nothing remains (unset variable, empty string,
    /// only separators) every category is enabled, so the result is never
    /// empty. Order follows the input.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] naming `var_name` and the offending token.
    pub fn parse_enabled(
        raw: Option<&str>,
        var_name: &str,
    ) -> Result<Vec<PublicConsultationType>, ConfigError> {
        let mut types = Vec::new();
        for token in raw.unwrap_or_default().split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let parsed = token
                .parse::<PublicConsultationType>()
                .map_err(|e| ConfigError::parse_error::<PublicConsultationType>(var_name, e))?;
            types.push(parsed);
        }
        if types.is_empty() {
            types.extend(Self::ALL);
        }
        Ok(types)
    }
}

impl fmt::Display for PublicConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublicConsultationType {
    type Err = UnknownConsultationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "building-intention" => Ok(PublicConsultationType::BuildingIntention),
            "territory-planning" => Ok(PublicConsultationType::TerritoryPlanning),
            "public-discussion" => Ok(PublicConsultationType::PublicDiscussion),
            _ => Err(UnknownConsultationType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip() {
        for t in PublicConsultationType::ALL {
            assert_eq!(t.as_str().parse::<PublicConsultationType>().unwrap(), t);
        }
    }

    #[test]
    fn test_from_str_unknown_token() {
        let err = "not-a-type".parse::<PublicConsultationType>().unwrap_err();
        assert_eq!(err, UnknownConsultationType("not-a-type".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown public consultation type 'not-a-type'"
        );
    }

    #[test]
    fn test_serde_tokens_match_from_str() {
        let json = serde_json::to_string(&PublicConsultationType::BuildingIntention).unwrap();
        assert_eq!(json, "\"building-intention\"");

        let parsed: PublicConsultationType =
            serde_json::from_str("\"territory-planning\"").unwrap();
        assert_eq!(parsed, PublicConsultationType::TerritoryPlanning);
    }

    #[test]
    fn test_parse_enabled_absent_enables_all() {
        let types = PublicConsultationType::parse_enabled(None, "TYPES").unwrap();
        assert_eq!(types, PublicConsultationType::ALL.to_vec());
    }

    #[test]
    fn test_parse_enabled_empty_string_enables_all() {
        let types = PublicConsultationType::parse_enabled(Some(""), "TYPES").unwrap();
        assert_eq!(types, PublicConsultationType::ALL.to_vec());
    }

    #[test]
    fn test_parse_enabled_only_separators_enables_all() {
        let types = PublicConsultationType::parse_enabled(Some(" , ,"), "TYPES").unwrap();
        assert_eq!(types, PublicConsultationType::ALL.to_vec());
    }

    #[test]
    fn test_parse_enabled_trims_and_drops_empty_tokens() {
        let types = PublicConsultationType::parse_enabled(
            Some("building-intention, territory-planning ,"),
            "TYPES",
        )
        .unwrap();
        assert_eq!(
            types,
            vec![
                PublicConsultationType::BuildingIntention,
                PublicConsultationType::TerritoryPlanning,
            ]
        );
    }

    #[test]
    fn test_parse_enabled_preserves_input_order() {
        let types = PublicConsultationType::parse_enabled(
            Some("public-discussion,building-intention"),
            "TYPES",
        )
        .unwrap();
        assert_eq!(
            types,
            vec![
                PublicConsultationType::PublicDiscussion,
                PublicConsultationType::BuildingIntention,
            ]
        );
    }

    #[test]
    fn test_parse_enabled_unknown_token_fails() {
        let result = PublicConsultationType::parse_enabled(Some("not-a-type"), "TYPES");
        match result {
            Err(ConfigError::Parse { name, message, .. }) => {
                assert_eq!(name, "TYPES");
                assert!(message.contains("not-a-type"));
            }
            _ => panic!("Expected Parse error"),
        }
    }
}
