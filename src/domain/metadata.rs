//! Immutable metadata bags
//!
//! [`Metadata`] is a frozen, string-keyed map shared by reference. Error items
//! and outcomes both carry one; an absent bag is the process-wide empty map.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

static EMPTY: OnceLock<Arc<BTreeMap<String, Value>>> = OnceLock::new();

/// Immutable string-keyed map of optional values
///
/// `Value::Null` stands for a key that is present without a value. Cloning a
/// `Metadata` shares the backing map.
///
/// # Examples
///
/// ```
/// use outcome::domain::Metadata;
/// use serde_json::json;
///
/// let metadata = Metadata::builder()
///     .insert("attempt", json!(3))
///     .insert("trace", json!(null))
///     .build();
///
/// assert_eq!(metadata.get("attempt"), Some(&json!(3)));
/// assert!(metadata.contains_key("trace"));
/// assert!(Metadata::empty().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Metadata(Arc<BTreeMap<String, Value>>);

impl Metadata {
    /// Returns the shared empty metadata bag
    pub fn empty() -> Self {
        Self(EMPTY.get_or_init(|| Arc::new(BTreeMap::new())).clone())
    }

    /// Creates a new builder
    pub fn builder() -> MetadataBuilder {
        MetadataBuilder::default()
    }

    /// Freezes an owned map
    pub fn from_map(map: BTreeMap<String, Value>) -> Self {
        if map.is_empty() {
            return Self::empty();
        }
        Self(Arc::new(map))
    }

    /// Looks up a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if the key is present, even with a null value
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns true if both bags share the same backing map
    pub fn ptr_eq(&self, other: &Metadata) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::empty()
    }
}

// An empty map on the wire becomes the shared empty bag.
impl<'de> Deserialize<'de> for Metadata {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        BTreeMap::<String, Value>::deserialize(deserializer).map(Self::from_map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Builder for [`Metadata`]
#[derive(Debug, Default)]
pub struct MetadataBuilder {
    entries: BTreeMap<String, Value>,
}

impl MetadataBuilder {
    /// Creates a new MetadataBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Adds a key with no value
    pub fn insert_none(mut self, key: impl Into<String>) -> Self {
        self.entries.insert(key.into(), Value::Null);
        self
    }

    /// Freezes the collected entries
    pub fn build(self) -> Metadata {
        Metadata::from_map(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_metadata_is_shared() {
        let a = Metadata::empty();
        let b = Metadata::default();
        assert!(a.is_empty());
        assert!(a.ptr_eq(&b));
        assert!(Metadata::builder().build().ptr_eq(&a));
    }

    #[test]
    fn test_metadata_builder() {
        let metadata = Metadata::builder()
            .insert("user", "alice")
            .insert("retries", 2)
            .insert_none("correlation_id")
            .build();

        assert_eq!(metadata.len(), 3);
        assert_eq!(metadata.get("user"), Some(&json!("alice")));
        assert_eq!(metadata.get("correlation_id"), Some(&Value::Null));
        assert!(metadata.get("missing").is_none());
    }

    #[test]
    fn test_metadata_from_iterator() {
        let metadata: Metadata = [("a", 1), ("b", 2)].into_iter().collect();
        let keys: Vec<&str> = metadata.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_metadata_clone_shares_map() {
        let metadata = Metadata::builder().insert("k", "v").build();
        let copy = metadata.clone();
        assert!(metadata.ptr_eq(&copy));
        assert_eq!(metadata, copy);
    }

    #[test]
    fn test_metadata_serialization() {
        let metadata = Metadata::builder().insert("k", "v").build();
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json, json!({"k": "v"}));
        let back: Metadata = serde_json::from_value(json).unwrap();
        assert_eq!(back, metadata);
    }

    #[test]
    fn test_deserialized_empty_map_is_shared() {
        let back: Metadata = serde_json::from_str("{}").unwrap();
        assert!(back.ptr_eq(&Metadata::empty()));
    }
}
