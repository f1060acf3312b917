//! URL query-string coercion

use std::collections::BTreeMap;

/// Decoded query-string parameters: key to values, in appearance order per
/// key.
pub type QueryParams = BTreeMap<String, Vec<String>>;

/// Decode a URL query string into a key-to-values mapping.
///
/// Standard `application/x-www-form-urlencoded` rules: `&`-separated pairs,
/// `=`-separated key and value, percent-decoding. A key given several times
/// collects its values in order. Pairs with an empty value are dropped, and
/// `None` yields an empty mapping.
pub fn parse_query_string(raw: Option<&str>) -> QueryParams {
    let mut params = QueryParams::new();
    if let Some(raw) = raw {
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            params
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_yields_empty_mapping() {
        assert!(parse_query_string(None).is_empty());
        assert!(parse_query_string(Some("")).is_empty());
    }

    #[test]
    fn test_repeated_keys_collect_in_order() {
        let params = parse_query_string(Some("sslmode=require&x=1&x=2"));
        assert_eq!(params.len(), 2);
        assert_eq!(params["sslmode"], vec!["require"]);
        assert_eq!(params["x"], vec!["1", "2"]);
    }

    #[test]
    fn test_percent_decoding() {
        let params = parse_query_string(Some("search%20path=public%2Cextensions"));
        assert_eq!(params["search path"], vec!["public,extensions"]);
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let params = parse_query_string(Some("options=-c+statement_timeout%3D5000"));
        assert_eq!(params["options"], vec!["-c statement_timeout=5000"]);
    }

    #[test]
    fn test_empty_values_are_dropped() {
        let params = parse_query_string(Some("keep=1&drop=&bare"));
        assert_eq!(params.len(), 1);
        assert_eq!(params["keep"], vec!["1"]);
    }
}
