//! Request header map

use serde::{Deserialize, Serialize};

/// The `Authorization` header name.
pub const AUTHORIZATION: &str = "Authorization";

/// An insertion-ordered header map.
///
/// Lookup is case-insensitive; a header keeps the casing it was first set
/// with. Setting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers {
    items: Vec<(String, String)>,
}

impl Headers {
    /// Creates an empty header map.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Sets a header, replacing an existing one with the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self
            .items
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            slot.1 = value;
        } else {
            self.items.push((name, value));
        }
    }

    /// Returns the value for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns true if `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Fills in `defaults` without overriding headers already present.
    pub fn merge_defaults(&mut self, defaults: &Self) {
        for (name, value) in &defaults.items {
            if !self.contains(name) {
                self.items.push((name.clone(), value.clone()));
            }
        }
    }

    /// Iterates over headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(String, String)> for Headers {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.set(name, value);
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut headers = Headers::new();
        headers.set("Content-Type", "application/json");
        assert_eq!(headers.get("content-type"), Some("application/json"));
        assert!(headers.contains("CONTENT-TYPE"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut headers = Headers::new();
        headers.set(AUTHORIZATION, "Bearer T1");
        headers.set("authorization", "Bearer T2");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(AUTHORIZATION), Some("Bearer T2"));
    }

    #[test]
    fn test_merge_defaults_does_not_override() {
        let mut headers = Headers::new();
        headers.set("Accept", "text/csv");

        let mut defaults = Headers::new();
        defaults.set("Accept", "application/json");
        defaults.set("client-id", "00-board");

        headers.merge_defaults(&defaults);
        assert_eq!(headers.get("Accept"), Some("text/csv"));
        assert_eq!(headers.get("client-id"), Some("00-board"));
    }
}
