// Option-merged field storage
//
// Applies field-value mappings onto an object's declared slots and keeps
// the running ledger of collection-valued field names used when broadcasting
// parent updates.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{FieldValue, FieldValues, Schema};

/// Declared field slots of one data object, filled by option merging.
///
/// Slots keep insertion order. Setting a field twice overwrites the value
/// (last write wins); the collection ledger, by contrast, is append-only —
/// see [`collection_fields`](Self::collection_fields).
pub struct FieldMap {
    schema: &'static Schema,
    slots: Vec<(String, FieldValue)>,
    collection_fields: Vec<String>,
}

impl FieldMap {
    /// Creates empty storage for the given schema.
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            slots: Vec::new(),
            collection_fields: Vec::new(),
        }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Applies a field-value mapping onto the slots.
    ///
    /// Per entry: the value's kind is checked against the declaration, then
    /// the slot is set (created on first write, overwritten after). Every
    /// collection-valued entry is also recorded on the collection ledger.
    pub fn set_options(&mut self, values: FieldValues) -> Result<()> {
        for (name, value) in values {
            self.schema.check_kind(&name, &value)?;
            if matches!(value, FieldValue::Collection(_)) {
                // Append-only: repeated applies that keep a field
                // collection-valued record it once per apply, and entries
                // are never removed when a slot changes kind.
                self.collection_fields.push(name.clone());
            }
            match self.slots.iter_mut().find(|(n, _)| *n == name) {
                Some(slot) => slot.1 = value,
                None => self.slots.push((name, value)),
            }
        }
        Ok(())
    }

    /// Verifies the named fields are set and non-null.
    ///
    /// Intended to run once, at the end of the constructor path.
    pub fn requires(&self, names: &[&str]) -> Result<()> {
        for name in names {
            if self.is_null_or_missing(name) {
                return Err(Error::MissingRequiredField {
                    type_name: self.schema.type_name(),
                    field: (*name).to_string(),
                });
            }
        }
        Ok(())
    }

    /// [`requires`](Self::requires) over every schema-declared required field.
    pub fn validate_required(&self) -> Result<()> {
        for decl in self.schema.required_fields() {
            if self.is_null_or_missing(decl.name()) {
                return Err(Error::MissingRequiredField {
                    type_name: self.schema.type_name(),
                    field: decl.name().to_string(),
                });
            }
        }
        Ok(())
    }

    fn is_null_or_missing(&self, name: &str) -> bool {
        match self.get(name) {
            None => true,
            Some(FieldValue::Scalar(Value::Null)) => true,
            Some(_) => false,
        }
    }

    /// Returns the value in the named slot, if set.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.slots
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Mutably returns the value in the named slot, if set.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldValue> {
        self.slots
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Iterates filled slots in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.slots.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The running ledger of collection-valued field names, in the order
    /// they were applied. Append-only across every `set_options` call:
    /// entries repeat and are never retired, matching the documented
    /// option-tracking behavior.
    pub fn collection_fields(&self) -> &[String] {
        &self.collection_fields
    }

    /// Convenience scalar accessor.
    pub fn scalar(&self, name: &str) -> Option<&Value> {
        match self.get(name) {
            Some(FieldValue::Scalar(value)) => Some(value),
            _ => None,
        }
    }

    /// Convenience string accessor.
    pub fn scalar_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    /// JSON-safe projection of the filled slots, used for facade payloads.
    ///
    /// Scalars and handle-free plain containers are included. Nested
    /// objects and collections are omitted (their own lifecycle calls carry
    /// them); handles never serialize.
    pub fn snapshot(&self) -> Value {
        let mut out = serde_json::Map::new();
        for (name, value) in self.iter() {
            match value {
                FieldValue::Scalar(scalar) => {
                    out.insert(name.to_string(), scalar.clone());
                }
                FieldValue::Sequence(items) => {
                    let json: Option<Vec<Value>> = items
                        .iter()
                        .map(|item| match item {
                            crate::model::PlainValue::Json(value) => Some(value.clone()),
                            crate::model::PlainValue::Handle(_) => None,
                        })
                        .collect();
                    match json {
                        Some(values) => {
                            out.insert(name.to_string(), Value::Array(values));
                        }
                        None => {
                            tracing::debug!(field = name, "omitting handle-bearing sequence from snapshot");
                        }
                    }
                }
                FieldValue::Mapping(entries) => {
                    let json: Option<serde_json::Map<String, Value>> = entries
                        .iter()
                        .map(|(key, item)| match item {
                            crate::model::PlainValue::Json(value) => {
                                Some((key.clone(), value.clone()))
                            }
                            crate::model::PlainValue::Handle(_) => None,
                        })
                        .collect();
                    match json {
                        Some(values) => {
                            out.insert(name.to_string(), Value::Object(values));
                        }
                        None => {
                            tracing::debug!(field = name, "omitting handle-bearing mapping from snapshot");
                        }
                    }
                }
                FieldValue::Object(_) | FieldValue::Collection(_) | FieldValue::Handle(_) => {}
            }
        }
        Value::Object(out)
    }
}
