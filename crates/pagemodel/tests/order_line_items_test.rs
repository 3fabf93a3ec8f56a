// End-to-end: an order with line items, copied, then grown independently
//
// The copied order's collection gains a third member; the original keeps
// exactly two, and member data stays detached in both directions.

mod fixtures;

use fixtures::{order_with_items, sku_at};
use pagemodel_rs::{DataObject, RecordingFacade, fields};
use pretty_assertions::assert_eq;

fn line_item_count(order: &dyn DataObject) -> usize {
    order
        .field_map()
        .get("line_items")
        .and_then(|value| value.as_collection())
        .expect("order should have a line_items collection")
        .len()
}

#[test]
fn test_copied_order_grows_independently() {
    let facade = RecordingFacade::shared();
    let order = order_with_items(&facade, 1, &["A", "B"]);
    assert_eq!(facade.calls_for("create").len(), 2);

    let mut order2 = order.deep_copy().expect("copy should succeed");
    assert_eq!(
        facade.calls_for("create").len(),
        2,
        "copying must not create records"
    );

    order2
        .field_map_mut()
        .get_mut("line_items")
        .and_then(|value| value.as_collection_mut())
        .expect("copy should have a line_items collection")
        .add(fields! { "sku" => "C" })
        .expect("third line item should be created");

    assert_eq!(line_item_count(order2.as_ref()), 3);
    assert_eq!(
        line_item_count(&order),
        2,
        "the original order must keep exactly two members"
    );
    assert_eq!(facade.calls_for("create").len(), 3);

    // Member data is detached in both directions.
    order2
        .field_map_mut()
        .get_mut("line_items")
        .and_then(|value| value.as_collection_mut())
        .unwrap()
        .get_mut(1)
        .unwrap()
        .field_map_mut()
        .set_options(fields! { "sku" => "B2" })
        .expect("member edit should succeed");
    assert_eq!(sku_at(&order, 1), "B");
    assert_eq!(sku_at(order2.as_ref(), 1), "B2");
}
