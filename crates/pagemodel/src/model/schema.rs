// Field declarations and element-type descriptors
//
// A data object type declares its field layout once, as a static schema.
// The option merger and the deep-copy engine iterate the declaration
// instead of introspecting live values.

use std::fmt;

use crate::error::{Error, Result};
use crate::facade::FacadeHandle;
use crate::model::{DataObject, FieldKind, FieldValue, FieldValues};

/// One declared field slot: name, kind tag, required flag.
#[derive(Debug, Clone, Copy)]
pub struct FieldDecl {
    name: &'static str,
    kind: FieldKind,
    required: bool,
}

impl FieldDecl {
    /// Declares an optional field of the given kind.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    /// Marks the field as required (non-null at construction time).
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Static field layout of a data object type.
///
/// Usually produced by the [`data_object!`](crate::data_object) macro, one
/// `const` per type.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    type_name: &'static str,
    fields: &'static [FieldDecl],
}

impl Schema {
    pub const fn new(type_name: &'static str, fields: &'static [FieldDecl]) -> Self {
        Self { type_name, fields }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn fields(&self) -> &'static [FieldDecl] {
        self.fields
    }

    /// Looks up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|decl| decl.name == name)
    }

    /// Iterates the fields declared as required.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.fields.iter().filter(|decl| decl.is_required())
    }

    /// Verifies a value may occupy the named slot.
    ///
    /// Rejects undeclared field names and values whose variant does not
    /// match the declared kind. This is the declaration-time guard that
    /// keeps data objects and collections out of plain-container fields.
    pub fn check_kind(&self, name: &str, value: &FieldValue) -> Result<()> {
        let Some(decl) = self.field(name) else {
            return Err(Error::UnknownField {
                type_name: self.type_name,
                field: name.to_string(),
            });
        };
        let actual = FieldKind::of(value);
        if actual != decl.kind {
            return Err(Error::KindMismatch {
                type_name: self.type_name,
                field: name.to_string(),
                declared: decl.kind,
                actual,
            });
        }
        Ok(())
    }
}

/// Static descriptor of a collection's element type.
///
/// Fixes, at declaration time, everything a collection needs to know about
/// its members: how to construct one, and whether the type accepts
/// parent-driven updates.
#[derive(Clone, Copy)]
pub struct ElementType {
    /// Type name, matching the element schema's type name
    pub name: &'static str,
    /// The element type's declared field layout
    pub schema: &'static Schema,
    /// Whether members implement the parent update hook
    pub parent_updatable: bool,
    /// Standard constructor path for one element
    pub construct: fn(FacadeHandle, FieldValues) -> Result<Box<dyn DataObject>>,
}

impl fmt::Debug for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementType")
            .field("name", &self.name)
            .field("parent_updatable", &self.parent_updatable)
            .finish()
    }
}
