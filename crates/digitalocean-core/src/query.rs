//! Convenience builder for HTTP query parameters.
//!
//! Endpoint parameters are collected as ordered key/value pairs. Keys are compile-time
//! constants, which keeps them disjoint from the credential parameters appended by the
//! dispatcher.

use std::fmt::Display;

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: ToString,
    {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Append one pair per item, repeating the key (`k=a&k=b`).
    pub fn push_list<I>(&mut self, key: &'static str, values: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.pairs
            .extend(values.into_iter().map(|value| (key, value.to_string())));
    }

    /// Chainable form of [`QueryParams::push`].
    #[must_use]
    pub fn with<T>(mut self, key: &'static str, value: T) -> Self
    where
        T: Display,
    {
        self.push(key, value);
        self
    }

    /// Append every pair of another builder.
    pub fn extend(&mut self, other: Self) {
        self.pairs.extend(other.pairs);
    }

    /// Iterate over the collected pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Returns true if a pair with the given key has been added.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| *k == key)
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::QueryParams;

    #[test]
    fn push_opt_skips_none() {
        let mut params = QueryParams::new();
        params.push_opt("name", Option::<String>::None);
        assert!(params.is_empty());
    }

    #[test]
    fn push_opt_formats_present_value() {
        let mut params = QueryParams::new();
        params.push_opt("backups_enabled", Some(false));
        assert_eq!(params.into_pairs(), vec![("backups_enabled", "false".to_string())]);
    }

    #[test]
    fn push_list_repeats_key() {
        let mut params = QueryParams::new();
        params.push_list("ssh_key_ids", [11u64, 12]);
        assert_eq!(
            params.into_pairs(),
            vec![
                ("ssh_key_ids", "11".to_string()),
                ("ssh_key_ids", "12".to_string())
            ]
        );
    }

    #[test]
    fn extend_preserves_order() {
        let mut params = QueryParams::new().with("name", "web-1").with("size_id", 66);
        params.extend(QueryParams::new().with("backups_enabled", true));

        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "size_id", "backups_enabled"]);
        assert!(params.contains_key("size_id"));
        assert!(!params.contains_key("client_id"));
    }
}
