// Core data model: declared fields, option merging, deep copy, collections.

mod collection;
mod copy;
mod data_object;
mod field;
mod macros;
mod options;
mod schema;
mod values;

pub use collection::Collection;
pub use data_object::DataObject;
pub use field::{ExternalHandle, FieldKind, FieldValue, PlainValue};
pub use options::FieldMap;
pub use schema::{ElementType, FieldDecl, Schema};
pub use values::FieldValues;
