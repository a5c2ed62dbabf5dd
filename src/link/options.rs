//! Route references - what callers hand to the URL builder.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Insertion-ordered string map.
///
/// Iteration follows insertion order, which fixes both the order in which
/// params are substituted and the order of the query string. Inserting an
/// existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap(Vec<(String, String)>);

impl ParamMap {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or replace a value. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for ParamMap {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl Serialize for ParamMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ParamMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParamMapVisitor;

        impl<'de> Visitor<'de> for ParamMapVisitor {
            type Value = ParamMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of string keys to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ParamMap, A::Error> {
                let mut map = ParamMap::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    map.insert(k, v);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ParamMapVisitor)
    }
}

/// A logical route reference.
///
/// `to` uses the same bracket placeholders as scanned route paths.
///
/// # Example
///
/// ```
/// use typed_routes::link::{RouteOptions, resolve};
///
/// let url = resolve(
///     &RouteOptions::new("/blog/[slug]")
///         .param("slug", "hello")
///         .locale("fr")
///         .search("ref", "nav")
///         .hash("comments"),
/// );
/// assert_eq!(url, "/fr/blog/hello?ref=nav#comments");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    /// Route path to link to (e.g., `/about` or `/blog/[slug]`)
    pub to: String,
    /// Values for the placeholders in `to`
    pub params: ParamMap,
    /// Locale prefix (e.g., `fr` -> `/fr/about`)
    pub locale: Option<String>,
    /// Query params; empty means no `?`
    pub search: ParamMap,
    /// Fragment without the leading `#`
    pub hash: Option<String>,
}

impl RouteOptions {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            ..Self::default()
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key, value);
        self
    }

    pub fn params(mut self, params: impl Into<ParamMap>) -> Self {
        self.params = params.into();
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn search(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.search.insert(key, value);
        self
    }

    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Locale, if present and non-empty.
    pub fn locale_str(&self) -> Option<&str> {
        self.locale.as_deref().filter(|l| !l.is_empty())
    }

    /// Fragment, if present and non-empty.
    pub fn hash_str(&self) -> Option<&str> {
        self.hash.as_deref().filter(|h| !h.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_map_keeps_insertion_order() {
        let map = ParamMap::from([("sort", "desc"), ("q", "react"), ("page", "2")]);
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["sort", "q", "page"]);
    }

    #[test]
    fn test_param_map_replace_in_place() {
        let mut map = ParamMap::from([("a", "1"), ("b", "2")]);
        assert_eq!(map.insert("a", "3"), Some("1".to_string()));
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_param_map_json_order() {
        let map: ParamMap = serde_json::from_str(r#"{"z": "1", "a": "2"}"#).unwrap();
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"z":"1","a":"2"}"#);
    }

    #[test]
    fn test_param_map_rejects_non_strings() {
        let result: Result<ParamMap, _> = serde_json::from_str(r#"{"page": 2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_route_options_from_json() {
        let options: RouteOptions = serde_json::from_str(
            r#"{"to": "/blog/[slug]", "params": {"slug": "hello"}, "locale": "en"}"#,
        )
        .unwrap();
        assert_eq!(options.to, "/blog/[slug]");
        assert_eq!(options.params.get("slug"), Some("hello"));
        assert_eq!(options.locale_str(), Some("en"));
        assert!(options.search.is_empty());
        assert_eq!(options.hash_str(), None);
    }

    #[test]
    fn test_empty_locale_and_hash_are_absent() {
        let options = RouteOptions::new("/").locale("").hash("");
        assert_eq!(options.locale_str(), None);
        assert_eq!(options.hash_str(), None);
    }
}
