//! Flat key/value metadata read from a document's front matter.

use std::collections::BTreeMap;

/// Front-matter fields of one document.
///
/// Every value is kept as text; nothing is coerced. Keys are whatever the
/// block contains, so the named accessors below cover the common fields and
/// [`Metadata::get`] reaches the rest. Accessors treat an empty value the
/// same as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    fields: BTreeMap<String, String>,
}

impl Metadata {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any earlier value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Raw value for `key`, including empty strings.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Value for `key`, or `None` when missing or empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_raw(key).filter(|v| !v.is_empty())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields were extracted.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.get("description")
    }

    pub fn difficulty(&self) -> Option<&str> {
        self.get("difficulty")
    }

    pub fn time(&self) -> Option<&str> {
        self.get("time")
    }

    pub fn category(&self) -> Option<&str> {
        self.get("category")
    }

    pub fn author(&self) -> Option<&str> {
        self.get("author")
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.get("last_updated")
    }

    /// Publication date: `date`, falling back to `last_updated`.
    pub fn date(&self) -> Option<&str> {
        self.get("date").or_else(|| self.last_updated())
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        for (k, v) in iter {
            metadata.insert(k, v);
        }
        metadata
    }
}
