// Field kinds and values
//
// Every declared field slot carries a kind tag, and the runtime value is the
// matching tagged variant. Copy strategy dispatches on the tag, never on a
// runtime type check.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::model::Collection;
use crate::model::DataObject;

/// Declaration-side tag for a field slot.
///
/// The tag fixes the copy strategy for the slot up front:
///
/// - `Scalar` values clone.
/// - `Sequence` and `Mapping` values are reconstructed structurally.
/// - `Object` and `Collection` values deep-copy recursively.
/// - `Handle` values are retained by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON scalar: null, bool, number, or string
    Scalar,
    /// Plain ordered container of copy-safe data
    Sequence,
    /// Plain keyed container of copy-safe data
    Mapping,
    /// Owned nested data object
    Object,
    /// Owned nested collection
    Collection,
    /// Opaque external resource, shared between copies
    Handle,
}

impl FieldKind {
    /// Returns the kind tag of a runtime value.
    pub fn of(value: &FieldValue) -> FieldKind {
        match value {
            FieldValue::Scalar(_) => FieldKind::Scalar,
            FieldValue::Sequence(_) => FieldKind::Sequence,
            FieldValue::Mapping(_) => FieldKind::Mapping,
            FieldValue::Object(_) => FieldKind::Object,
            FieldValue::Collection(_) => FieldKind::Collection,
            FieldValue::Handle(_) => FieldKind::Handle,
        }
    }
}

/// Opaque external resource stored in a field.
///
/// Handles wrap values with no meaningful copy semantics (driver sessions,
/// sockets, file descriptors). Deep copy retains the same underlying
/// reference: the original and the copy share the resource.
///
/// A handle placed *inside* a plain sequence or mapping is a declaration
/// mistake and fails the deep copy with a descriptive error.
#[derive(Clone)]
pub struct ExternalHandle {
    kind: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl ExternalHandle {
    /// Wraps a value under a short kind label used in diagnostics.
    pub fn new<T: Any + Send + Sync>(kind: &'static str, value: T) -> Self {
        Self {
            kind,
            inner: Arc::new(value),
        }
    }

    /// Returns the kind label supplied at wrap time.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Borrows the wrapped value if it is a `T`.
    pub fn downcast_ref<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }

    /// Whether two handles share the same underlying resource.
    pub fn shares_resource_with(&self, other: &ExternalHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ExternalHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExternalHandle({})", self.kind)
    }
}

/// What plain sequence and mapping fields may hold.
///
/// `Json` trees are structurally copyable. A `Handle` smuggled into a plain
/// container poisons deep copy: it cannot be serialized and reconstructed,
/// so the copy fails loudly instead of sharing state behind the caller's
/// back.
#[derive(Debug, Clone)]
pub enum PlainValue {
    /// Arbitrarily nested JSON data
    Json(Value),
    /// Un-serializable external resource (always a copy error)
    Handle(ExternalHandle),
}

impl From<Value> for PlainValue {
    fn from(value: Value) -> Self {
        PlainValue::Json(value)
    }
}

impl From<&str> for PlainValue {
    fn from(value: &str) -> Self {
        PlainValue::Json(Value::String(value.to_string()))
    }
}

impl From<String> for PlainValue {
    fn from(value: String) -> Self {
        PlainValue::Json(Value::String(value))
    }
}

impl From<i64> for PlainValue {
    fn from(value: i64) -> Self {
        PlainValue::Json(Value::from(value))
    }
}

impl From<bool> for PlainValue {
    fn from(value: bool) -> Self {
        PlainValue::Json(Value::Bool(value))
    }
}

impl From<ExternalHandle> for PlainValue {
    fn from(handle: ExternalHandle) -> Self {
        PlainValue::Handle(handle)
    }
}

/// Runtime value occupying a field slot.
///
/// One variant per [`FieldKind`]; the option merger rejects a value whose
/// variant does not match the slot's declared kind.
pub enum FieldValue {
    /// JSON scalar
    Scalar(Value),
    /// Plain ordered container
    Sequence(Vec<PlainValue>),
    /// Plain keyed container
    Mapping(BTreeMap<String, PlainValue>),
    /// Owned nested data object
    Object(Box<dyn DataObject>),
    /// Owned nested collection
    Collection(Collection),
    /// Opaque external resource
    Handle(ExternalHandle),
}

impl FieldValue {
    /// Borrows the scalar string, if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Borrows the scalar as an integer, if this is a numeric scalar.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Scalar(value) => value.as_i64(),
            _ => None,
        }
    }

    /// Borrows the nested collection, if any.
    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            FieldValue::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    /// Mutably borrows the nested collection, if any.
    pub fn as_collection_mut(&mut self) -> Option<&mut Collection> {
        match self {
            FieldValue::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    /// Borrows the nested data object, if any.
    pub fn as_object(&self) -> Option<&dyn DataObject> {
        match self {
            FieldValue::Object(object) => Some(object.as_ref()),
            _ => None,
        }
    }

    /// Mutably borrows the nested data object, if any.
    pub fn as_object_mut(&mut self) -> Option<&mut (dyn DataObject + 'static)> {
        match self {
            FieldValue::Object(object) => Some(object.as_mut()),
            _ => None,
        }
    }

    /// Borrows the plain sequence items, if any.
    pub fn as_sequence(&self) -> Option<&[PlainValue]> {
        match self {
            FieldValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Mutably borrows the plain sequence items, if any.
    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<PlainValue>> {
        match self {
            FieldValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Borrows the plain mapping entries, if any.
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, PlainValue>> {
        match self {
            FieldValue::Mapping(entries) => Some(entries),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Scalar(value) => write!(f, "Scalar({value})"),
            FieldValue::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            FieldValue::Mapping(entries) => f.debug_tuple("Mapping").field(entries).finish(),
            FieldValue::Object(object) => write!(f, "Object({})", object.schema().type_name()),
            FieldValue::Collection(collection) => write!(f, "{collection:?}"),
            FieldValue::Handle(handle) => write!(f, "{handle:?}"),
        }
    }
}

// Scalar conveniences: JSON arrays and objects become plain containers so a
// literal can never occupy a slot under the wrong tag.
impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                FieldValue::Sequence(items.into_iter().map(PlainValue::Json).collect())
            }
            Value::Object(entries) => FieldValue::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, PlainValue::Json(value)))
                    .collect(),
            ),
            scalar => FieldValue::Scalar(scalar),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Scalar(Value::String(value.to_string()))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Scalar(Value::String(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Scalar(Value::from(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Scalar(Value::from(value))
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Scalar(Value::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Scalar(Value::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Scalar(Value::Bool(value))
    }
}

impl From<Vec<PlainValue>> for FieldValue {
    fn from(items: Vec<PlainValue>) -> Self {
        FieldValue::Sequence(items)
    }
}

impl From<BTreeMap<String, PlainValue>> for FieldValue {
    fn from(entries: BTreeMap<String, PlainValue>) -> Self {
        FieldValue::Mapping(entries)
    }
}

impl From<Collection> for FieldValue {
    fn from(collection: Collection) -> Self {
        FieldValue::Collection(collection)
    }
}

impl From<Box<dyn DataObject>> for FieldValue {
    fn from(object: Box<dyn DataObject>) -> Self {
        FieldValue::Object(object)
    }
}

impl From<ExternalHandle> for FieldValue {
    fn from(handle: ExternalHandle) -> Self {
        FieldValue::Handle(handle)
    }
}
