// Deep copy - independence, fidelity, and failure modes
//
// Covers:
// - Scalar and plain-container fidelity immediately after copy
// - Independence of plain containers, nested collections, nested objects
// - Handle fields shared by reference
// - Un-serializable values inside plain containers rejected by name

mod fixtures;

use fixtures::{Address, Order, order_with_items, sku_at};
use pagemodel_rs::model::PlainValue;
use pagemodel_rs::{DataObject, Error, ExternalHandle, RecordingFacade, fields};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_scalar_and_plain_fields_copy_faithfully() {
    let facade = RecordingFacade::shared();
    let order = Order::new(
        facade.clone(),
        fields! {
            "id" => 41,
            "status" => "open",
            "tags" => json!(["rush", "gift"]),
            "attrs" => json!({"channel": "web"}),
        },
    )
    .expect("order should build");

    let copy = order.deep_copy().expect("copy should succeed");

    assert_eq!(copy.field_map().snapshot(), order.field_map().snapshot());
    assert!(
        copy.as_any().downcast_ref::<Order>().is_some(),
        "copy should be the same runtime type"
    );
}

#[test]
fn test_plain_sequence_is_independent() {
    let facade = RecordingFacade::shared();
    let order = Order::new(
        facade.clone(),
        fields! { "id" => 1, "tags" => json!(["original"]) },
    )
    .expect("order should build");

    let mut copy = order.deep_copy().expect("copy should succeed");
    copy.field_map_mut()
        .get_mut("tags")
        .and_then(|value| value.as_sequence_mut())
        .expect("copy should have a tags sequence")
        .push(PlainValue::from("added-to-copy"));

    let original_tags = order
        .field_map()
        .get("tags")
        .and_then(|value| value.as_sequence())
        .expect("original should have a tags sequence");
    assert_eq!(original_tags.len(), 1, "original must not see the append");

    let copied_tags = copy
        .field_map()
        .get("tags")
        .and_then(|value| value.as_sequence())
        .expect("copy should have a tags sequence");
    assert_eq!(copied_tags.len(), 2);
}

#[test]
fn test_nested_collection_is_independent() {
    let facade = RecordingFacade::shared();
    let order = order_with_items(&facade, 7, &["A", "B"]);

    let mut copy = order.deep_copy().expect("copy should succeed");

    // Mutate a member inside the copy's collection.
    copy.field_map_mut()
        .get_mut("line_items")
        .and_then(|value| value.as_collection_mut())
        .expect("copy should have a line_items collection")
        .get_mut(0)
        .expect("member 0 should exist")
        .field_map_mut()
        .set_options(fields! { "sku" => "MUTATED" })
        .expect("member edit should succeed");

    assert_eq!(sku_at(&order, 0), "A", "original member must be untouched");
    assert_eq!(sku_at(copy.as_ref(), 0), "MUTATED");
}

#[test]
fn test_copy_performs_no_facade_calls() {
    let facade = RecordingFacade::shared();
    let order = order_with_items(&facade, 7, &["A", "B"]);
    let created_before = facade.calls_for("create").len();

    let _copy = order.deep_copy().expect("copy should succeed");

    assert_eq!(
        facade.calls_for("create").len(),
        created_before,
        "deep copy must not drive the facade"
    );
}

#[test]
fn test_nested_object_recurses() {
    let facade = RecordingFacade::shared();
    let address = Address::new(
        facade.clone(),
        fields! { "street" => "1 Main St", "city" => "Springfield" },
    )
    .expect("address should build");
    let order = Order::new(
        facade.clone(),
        fields! { "id" => 2, "ship_to" => Box::new(address) as Box<dyn DataObject> },
    )
    .expect("order should build");

    let mut copy = order.deep_copy().expect("copy should succeed");
    copy.field_map_mut()
        .get_mut("ship_to")
        .and_then(|value| value.as_object_mut())
        .expect("copy should have a nested address")
        .field_map_mut()
        .set_options(fields! { "city" => "Shelbyville" })
        .expect("nested edit should succeed");

    let original_city = order
        .field_map()
        .get("ship_to")
        .and_then(|value| value.as_object())
        .and_then(|address| address.field_map().scalar_str("city").map(str::to_string))
        .expect("original address should have a city");
    assert_eq!(original_city, "Springfield");
}

#[test]
fn test_handle_field_shares_resource() {
    let facade = RecordingFacade::shared();
    let handle = ExternalHandle::new("driver session", 99u32);
    let order = Order::new(
        facade.clone(),
        fields! { "id" => 3, "session" => handle.clone() },
    )
    .expect("order should build");

    let copy = order.deep_copy().expect("copy should succeed");
    let copied_handle = match copy.field_map().get("session") {
        Some(pagemodel_rs::FieldValue::Handle(h)) => h.clone(),
        other => panic!("expected handle field, got {other:?}"),
    };
    assert!(copied_handle.shares_resource_with(&handle));
}

#[test]
fn test_unserializable_value_in_plain_container_fails() {
    let facade = RecordingFacade::shared();
    let order = Order::new(
        facade.clone(),
        fields! {
            "id" => 4,
            "tags" => vec![
                PlainValue::from("fine"),
                PlainValue::from(ExternalHandle::new("live socket", ())),
            ],
        },
    )
    .expect("order should build");

    let err = order.deep_copy().expect_err("copy must fail");
    match err {
        Error::UnsupportedCopyValue { field, kind, .. } => {
            assert_eq!(field, "tags");
            assert_eq!(kind, "live socket");
        }
        other => panic!("expected UnsupportedCopyValue, got {other:?}"),
    }

    let message = format!(
        "{}",
        Error::UnsupportedCopyValue {
            field: "tags".to_string(),
            value: "ExternalHandle(live socket)".to_string(),
            kind: "live socket",
        }
    );
    assert!(message.contains("tags"));
    assert!(message.contains("collection"));
}
