//! Parameter Collections
//!
//! An ordered, duplicate-permitting key/value sink for request parameters.
//! Encoders accumulate fixed fields and extension contributions here before
//! rendering the collection as either a URL query string or an
//! `application/x-www-form-urlencoded` body.

use url::form_urlencoded;
use url::Url;

use crate::fields::join_scope;
use crate::optional::Optional;

/// An insertion-ordered multimap from parameter name to string value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterCollection {
    entries: Vec<(String, String)>,
}

impl ParameterCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection seeded with the query parameters already present
    /// on a URL.
    pub fn from_url_query(url: &Url) -> Self {
        let entries = url
            .query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        Self { entries }
    }

    /// Append a parameter unconditionally.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Append a parameter when the value is logically present, rendering it
    /// via its canonical string form. Absent values add nothing.
    pub fn push_optional<T: ToString>(&mut self, name: impl Into<String>, value: &Optional<T>) {
        if let Optional::Present(value) = value {
            self.push(name, value.to_string());
        }
    }

    /// Append a scope-style list as a single space-joined parameter when
    /// present. Scope is never repeated as multiple same-named parameters.
    pub fn push_optional_list(
        &mut self,
        name: impl Into<String>,
        value: &Optional<Vec<String>>,
    ) {
        if let Optional::Present(value) = value {
            self.push(name, join_scope(value));
        }
    }

    /// Look up the first value recorded under a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the collection as a URL query string (no leading `?`).
    pub fn to_query_string(&self) -> String {
        self.encode()
    }

    /// Render the collection as an `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        self.encode()
    }

    fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.entries {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

impl<'a> IntoIterator for &'a ParameterCollection {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order_and_duplicates() {
        let mut params = ParameterCollection::new();
        params.push("a", "1");
        params.push("b", "2");
        params.push("a", "3");

        let entries: Vec<_> = params.iter().collect();
        assert_eq!(entries, vec![("a", "1"), ("b", "2"), ("a", "3")]);
        assert_eq!(params.get("a"), Some("1"));
    }

    #[test]
    fn test_push_optional_absent_adds_nothing() {
        let mut params = ParameterCollection::new();
        params.push_optional("state", &Optional::<String>::Absent);
        assert!(params.is_empty());
    }

    #[test]
    fn test_push_optional_present_empty_string_is_kept() {
        let mut params = ParameterCollection::new();
        params.push_optional("state", &Optional::Present(String::new()));
        assert_eq!(params.get("state"), Some(""));
        assert_eq!(params.to_query_string(), "state=");
    }

    #[test]
    fn test_push_optional_list_space_joins() {
        let mut params = ParameterCollection::new();
        params.push_optional_list(
            "scope",
            &Optional::Present(vec!["some".into(), "scope".into(), "values".into()]),
        );

        assert_eq!(params.get("scope"), Some("some scope values"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_from_url_query() {
        let url = Url::parse("https://unit-test.net?parameter=value&other=something").unwrap();
        let params = ParameterCollection::from_url_query(&url);

        assert_eq!(params.get("parameter"), Some("value"));
        assert_eq!(params.get("other"), Some("something"));
    }

    #[test]
    fn test_form_encoding_escapes_reserved_characters() {
        let mut params = ParameterCollection::new();
        params.push("redirect_uri", "https://redirect-uri.net/");
        params.push("state", "some state");

        assert_eq!(
            params.to_form_body(),
            "redirect_uri=https%3A%2F%2Fredirect-uri.net%2F&state=some+state"
        );
    }
}
