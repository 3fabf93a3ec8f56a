// Deep-copy engine
//
// Produces field mappings that share no mutable nested storage with their
// source. Strategy dispatches on the field's variant tag:
//
// - Collection: delegate to Collection::copy
// - Sequence / Mapping: structural reconstruction of every item
// - Object: recurse
// - Scalar: clone (immutable by convention)
// - Handle: retain the same reference
//
// A handle inside a plain container cannot be reconstructed and fails the
// whole copy with the offending field named.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::model::{FieldMap, FieldValue, FieldValues, PlainValue};

/// Copies every filled slot of a field map into a fresh mapping, ready to
/// feed back through the owning type's constructor.
pub(crate) fn copy_field_map(map: &FieldMap) -> Result<FieldValues> {
    tracing::debug!(
        type_name = map.schema().type_name(),
        fields = map.len(),
        "deep-copying fields"
    );
    let mut copied = FieldValues::new();
    for (name, value) in map.iter() {
        copied.insert(name, copy_value(name, value)?);
    }
    Ok(copied)
}

fn copy_value(field: &str, value: &FieldValue) -> Result<FieldValue> {
    match value {
        FieldValue::Collection(collection) => Ok(FieldValue::Collection(collection.copy()?)),
        FieldValue::Sequence(items) => {
            let copied = items
                .iter()
                .map(|item| copy_plain(field, item))
                .collect::<Result<Vec<_>>>()?;
            Ok(FieldValue::Sequence(copied))
        }
        FieldValue::Mapping(entries) => {
            let mut copied = BTreeMap::new();
            for (key, item) in entries {
                copied.insert(key.clone(), copy_plain(field, item)?);
            }
            Ok(FieldValue::Mapping(copied))
        }
        FieldValue::Object(object) => Ok(FieldValue::Object(object.deep_copy()?)),
        FieldValue::Scalar(scalar) => Ok(FieldValue::Scalar(scalar.clone())),
        FieldValue::Handle(handle) => Ok(FieldValue::Handle(handle.clone())),
    }
}

// Serialize-and-reconstruct: the copy must not share storage with the
// source, even through nested arrays and objects.
fn copy_plain(field: &str, item: &PlainValue) -> Result<PlainValue> {
    match item {
        PlainValue::Json(value) => {
            let text = serde_json::to_string(value)?;
            Ok(PlainValue::Json(serde_json::from_str(&text)?))
        }
        PlainValue::Handle(handle) => Err(Error::UnsupportedCopyValue {
            field: field.to_string(),
            value: format!("{handle:?}"),
            kind: handle.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;
    use crate::model::{ExternalHandle, FieldDecl, FieldKind, Schema};
    use serde_json::json;

    const SCHEMA: Schema = Schema::new(
        "CopySample",
        &[
            FieldDecl::new("id", FieldKind::Scalar),
            FieldDecl::new("tags", FieldKind::Sequence),
            FieldDecl::new("session", FieldKind::Handle),
        ],
    );

    #[test]
    fn test_plain_sequence_is_reconstructed() {
        let mut map = FieldMap::new(&SCHEMA);
        map.set_options(fields! { "tags" => json!([["a"], {"k": 1}]) })
            .unwrap();
        let copied = copy_field_map(&map).unwrap();
        let items = copied.get("tags").unwrap().as_sequence().unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_handle_field_copies_by_reference() {
        let handle = ExternalHandle::new("socket", 7u8);
        let mut map = FieldMap::new(&SCHEMA);
        map.set_options(fields! { "session" => handle.clone() })
            .unwrap();
        let copied = copy_field_map(&map).unwrap();
        let Some(FieldValue::Handle(copied_handle)) = copied.get("session") else {
            panic!("expected handle field");
        };
        assert!(copied_handle.shares_resource_with(&handle));
    }

    #[test]
    fn test_handle_inside_sequence_fails_with_field_name() {
        let mut map = FieldMap::new(&SCHEMA);
        map.set_options(
            fields! { "tags" => vec![PlainValue::from("ok"), PlainValue::from(ExternalHandle::new("socket", ()))] },
        )
        .unwrap();
        let err = copy_field_map(&map).unwrap_err();
        match err {
            Error::UnsupportedCopyValue { field, kind, .. } => {
                assert_eq!(field, "tags");
                assert_eq!(kind, "socket");
            }
            other => panic!("expected UnsupportedCopyValue, got {other:?}"),
        }
    }
}
