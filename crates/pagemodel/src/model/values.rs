// Field-value mappings
//
// The unit of exchange for constructors, edits, and parent updates: an
// insertion-ordered mapping from field name to value. Last write wins per
// key.

use std::fmt;

use crate::model::FieldValue;

/// Ordered mapping of field names to values.
///
/// Passed to constructors ("initial field values merged over defaults"),
/// to `edit` ("partial mapping of new field values"), and broadcast to
/// collection members as a parent-update payload.
///
/// # Example
///
/// ```ignore
/// use pagemodel_rs::fields;
///
/// let values = fields! {
///     "sku" => "A-100",
///     "qty" => 3,
/// };
/// assert_eq!(values.get("qty").and_then(|v| v.as_i64()), Some(3));
/// ```
#[derive(Default)]
pub struct FieldValues {
    entries: Vec<(String, FieldValue)>,
}

impl FieldValues {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value. Replaces any earlier value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the value for a field name, if set.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Whether a value is present for the field name.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// New mapping holding clones of just the scalar entries.
    ///
    /// Parent-update hooks use this to merge a broadcast payload into their
    /// own fields; nested objects, collections, and handles cannot be
    /// duplicated by value and are left out.
    pub fn scalar_entries(&self) -> FieldValues {
        let mut out = FieldValues::new();
        for (name, value) in self.iter() {
            if let FieldValue::Scalar(scalar) = value {
                out.insert(name, scalar.clone());
            }
        }
        out
    }

    /// Merges `self` over `defaults`: defaults apply first, then every entry
    /// of `self` overwrites.
    pub fn merged_over(self, defaults: FieldValues) -> FieldValues {
        let mut merged = defaults;
        for (name, value) in self {
            merged.insert(name, value);
        }
        merged
    }
}

impl IntoIterator for FieldValues {
    type Item = (String, FieldValue);
    type IntoIter = std::vec::IntoIter<(String, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Debug for FieldValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, value)| (name, value)))
            .finish()
    }
}

/// Builds a [`FieldValues`] mapping from literal entries.
///
/// # Example
///
/// ```ignore
/// use pagemodel_rs::fields;
/// use serde_json::json;
///
/// let values = fields! {
///     "id" => 42,
///     "status" => "open",
///     "tags" => json!(["a", "b"]),
/// };
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::model::FieldValues::new()
    };
    ( $( $name:literal => $value:expr ),+ $(,)? ) => {{
        let mut values = $crate::model::FieldValues::new();
        $( values.insert($name, $value); )+
        values
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldKind;
    use serde_json::json;

    #[test]
    fn test_insert_last_write_wins() {
        let mut values = FieldValues::new();
        values.insert("a", 1i64);
        values.insert("a", 2i64);
        assert_eq!(values.len(), 1);
        assert_eq!(values.get("a").and_then(|v| v.as_i64()), Some(2));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let values = FieldValues::new()
            .with("first", 1i64)
            .with("second", 2i64)
            .with("third", 3i64);
        let names: Vec<&str> = values.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_merged_over_defaults() {
        let defaults = FieldValues::new()
            .with("status", "open")
            .with("qty", 1i64);
        let merged = FieldValues::new()
            .with("qty", 5i64)
            .merged_over(defaults);
        assert_eq!(merged.get("status").and_then(|v| v.as_str()), Some("open"));
        assert_eq!(merged.get("qty").and_then(|v| v.as_i64()), Some(5));
    }

    #[test]
    fn test_fields_macro() {
        let values = fields! {
            "id" => 7,
            "name" => "widget",
            "tags" => json!(["a", "b"]),
        };
        assert_eq!(values.len(), 3);
        assert_eq!(
            values.get("tags").map(FieldKind::of),
            Some(FieldKind::Sequence)
        );
    }

    #[test]
    fn test_fields_macro_empty() {
        let values = fields! {};
        assert!(values.is_empty());
    }
}
