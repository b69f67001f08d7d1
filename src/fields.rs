//! Field-Level Parsers
//!
//! Shared pure parsing rules for individual wire fields. The query-string,
//! fragment and JSON decoders differ only in where the raw text comes from;
//! the per-field rules live here so all entry points agree on them.

use std::time::Duration;

use url::Url;

use crate::error::ParseError;

/// Join a scope list into the canonical single space-separated string.
pub fn join_scope(scope: &[String]) -> String {
    scope.join(" ")
}

/// Split a space-separated scope string, discarding empty segments produced
/// by consecutive separators.
pub fn split_scope(raw: &str) -> Vec<String> {
    raw.split(' ')
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}

/// Parse an `expires_in`-style lifetime: a finite, non-negative real number
/// of seconds that fits a `Duration`.
pub fn parse_lifetime(name: &'static str, raw: &str) -> Result<Duration, ParseError> {
    let invalid = || ParseError::InvalidNumber {
        name,
        value: raw.to_string(),
    };

    let seconds: f64 = raw.parse().map_err(|_| invalid())?;
    Duration::try_from_secs_f64(seconds).map_err(|_| invalid())
}

/// Collect the key/value pairs of a redirect URI's query string.
pub(crate) fn query_parameters(location: &Url) -> Vec<(String, String)> {
    location
        .query_pairs()
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect()
}

/// Collect the key/value pairs of a redirect URI's fragment. A missing or
/// empty fragment is a decode failure in its own right, distinct from a
/// missing required key.
pub(crate) fn fragment_parameters(location: &Url) -> Result<Vec<(String, String)>, ParseError> {
    let fragment = location.fragment().unwrap_or_default();
    if fragment.is_empty() {
        return Err(ParseError::MissingFragment);
    }

    Ok(url::form_urlencoded::parse(fragment.as_bytes())
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect())
}

/// Look up the first value recorded under a name.
pub(crate) fn find<'a>(parameters: &'a [(String, String)], name: &str) -> Option<&'a str> {
    parameters
        .iter()
        .find(|(parameter, _)| parameter == name)
        .map(|(_, value)| value.as_str())
}

/// Look up a required value, failing the decode when it is missing.
pub(crate) fn require<'a>(
    parameters: &'a [(String, String)],
    name: &'static str,
) -> Result<&'a str, ParseError> {
    find(parameters, name).ok_or(ParseError::MissingParameter(name))
}

/// Parse a URI reference, resolving relative references against the visited
/// location.
pub fn parse_uri_reference(
    name: &'static str,
    raw: &str,
    base: &Url,
) -> Result<Url, ParseError> {
    Url::options()
        .base_url(Some(base))
        .parse(raw)
        .map_err(|_| ParseError::InvalidUri {
            name,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_round_trip() {
        let scope = vec!["some".to_string(), "scope".to_string(), "values".to_string()];
        assert_eq!(split_scope(&join_scope(&scope)), scope);
    }

    #[test]
    fn test_split_scope_discards_empty_segments() {
        assert_eq!(split_scope("a  b"), vec!["a", "b"]);
        assert_eq!(split_scope(""), Vec::<String>::new());
        assert_eq!(split_scope("  "), Vec::<String>::new());
    }

    #[test]
    fn test_parse_lifetime() {
        assert_eq!(
            parse_lifetime("expires_in", "3600").unwrap(),
            Duration::from_secs(3600)
        );
        assert_eq!(
            parse_lifetime("expires_in", "0.5").unwrap(),
            Duration::from_secs_f64(0.5)
        );
    }

    #[test]
    fn test_parse_lifetime_rejects_garbage() {
        for raw in ["notanumber", "-1", "inf", "NaN", "", "1e300"] {
            let error = parse_lifetime("expires_in", raw).unwrap_err();
            assert_eq!(
                error,
                ParseError::InvalidNumber {
                    name: "expires_in",
                    value: raw.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_parse_uri_reference_absolute() {
        let base = Url::parse("https://client.net/callback").unwrap();
        let uri = parse_uri_reference("error_uri", "https://errors.net/denied", &base).unwrap();
        assert_eq!(uri.as_str(), "https://errors.net/denied");
    }

    #[test]
    fn test_parse_uri_reference_relative_resolves_against_location() {
        let base = Url::parse("https://client.net/callback").unwrap();
        let uri = parse_uri_reference("error_uri", "/errors/denied", &base).unwrap();
        assert_eq!(uri.as_str(), "https://client.net/errors/denied");
    }

    #[test]
    fn test_parse_uri_reference_rejects_malformed_text() {
        let base = Url::parse("https://client.net/callback").unwrap();
        let error = parse_uri_reference("error_uri", "https://exa mple", &base).unwrap_err();
        assert!(matches!(error, ParseError::InvalidUri { name: "error_uri", .. }));
    }
}
