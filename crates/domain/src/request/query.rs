//! Query parameter types

use serde::{Deserialize, Serialize};

/// A query parameter key-value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// The parameter key
    pub key: String,
    /// The parameter value
    pub value: String,
}

impl QueryParam {
    /// Creates a new query parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An insertion-ordered collection of query parameters.
///
/// Key order is preserved for readability of the resulting query string;
/// the server treats it as irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams {
    items: Vec<QueryParam>,
}

impl QueryParams {
    /// Creates an empty query parameter collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Sets a parameter, replacing an existing one with the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(param) = self.items.iter_mut().find(|p| p.key == key) {
            param.value = value;
        } else {
            self.items.push(QueryParam::new(key, value));
        }
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    /// Merges these parameters over `defaults`.
    ///
    /// Defaults the caller did not supply come first; caller-supplied
    /// values win on key collision.
    #[must_use]
    pub fn merged_over(&self, defaults: &Self) -> Self {
        let mut merged = Self::new();
        for default in &defaults.items {
            if self.get(&default.key).is_none() {
                merged.items.push(default.clone());
            }
        }
        merged.items.extend(self.items.iter().cloned());
        merged
    }

    /// Borrowed key-value pairs, for query-string encoding.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.items
            .iter()
            .map(|p| (p.key.as_str(), p.value.as_str()))
            .collect()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_merge_keeps_defaults_first() {
        let defaults = params(&[("delay", "500")]);
        let caller = params(&[("page", "2")]);

        let merged = caller.merged_over(&defaults);
        assert_eq!(merged.pairs(), vec![("delay", "500"), ("page", "2")]);
    }

    #[test]
    fn test_merge_caller_wins_on_collision() {
        let defaults = params(&[("delay", "500")]);
        let caller = params(&[("delay", "0")]);

        let merged = caller.merged_over(&defaults);
        assert_eq!(merged.pairs(), vec![("delay", "0")]);
    }

    #[test]
    fn test_set_replaces_existing_key() {
        let mut p = QueryParams::new();
        p.set("type", "info");
        p.set("type", "free");
        assert_eq!(p.len(), 1);
        assert_eq!(p.get("type"), Some("free"));
    }
}
