//! Ordered HTML attributes.
//!
//! Attributes keep the order in which keys were first inserted, so rendered
//! markup is deterministic without sorting.

use indexmap::IndexMap;

/// Insertion-ordered attribute map.
///
/// Inserting a key that already exists replaces its value in place; the key
/// keeps its original position.
///
/// # Example
///
/// ```
/// use sitegen_html::Attributes;
///
/// let mut attrs = Attributes::new();
/// attrs.insert("href", "https://www.google.com");
/// attrs.insert("target", "_blank");
/// assert_eq!(attrs.to_html(), r#"href="https://www.google.com" target="_blank""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    items: IndexMap<String, String>,
}

impl Attributes {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the previous value if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.items.insert(key.into(), value.into())
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as `key="value"` pairs joined by a single space.
    ///
    /// Returns an empty string when there are no attributes, so callers must
    /// only add the separating space when the result is non-empty.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Append the serialized attributes to `out`.
    pub(crate) fn write_html(&self, out: &mut String) {
        for (i, (key, value)) in self.items.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
