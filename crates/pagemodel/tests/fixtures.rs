// Shared data-object fixtures for integration tests

// Note: Items appear "unused" because each test binary compiles separately,
// but they ARE used across multiple test files. Suppress false-positive warnings.
#![allow(dead_code)]

use std::sync::Arc;

use pagemodel_rs::error::Result;
use pagemodel_rs::model::FieldValues;
use pagemodel_rs::{Collection, DataObject, RecordingFacade, data_object, fields};

data_object! {
    /// One line of an order. Accepts order-level broadcasts.
    pub struct LineItem {
        required "sku": Scalar,
        "qty": Scalar,
        "order_status": Scalar,
    }
    defaults = default_qty;
    updates = apply_order_update;
}

impl LineItem {
    fn default_qty() -> FieldValues {
        fields! { "qty" => 1 }
    }

    fn apply_order_update(&mut self, updates: &FieldValues) -> Result<()> {
        self.field_map_mut().set_options(updates.scalar_entries())
    }
}

data_object! {
    /// Shipping address nested inside an order.
    pub struct Address {
        required "street": Scalar,
        "city": Scalar,
    }
}

data_object! {
    /// A purchase order under test.
    pub struct Order {
        required "id": Scalar,
        "status": Scalar,
        "tags": Sequence,
        "attrs": Mapping,
        "ship_to": Object,
        "line_items": Collection,
        "session": Handle,
    }
}

/// An order whose `line_items` collection holds one member per sku.
pub fn order_with_items(facade: &Arc<RecordingFacade>, id: i64, skus: &[&str]) -> Order {
    let mut line_items = Collection::new(&LineItem::ELEMENT, facade.clone());
    for sku in skus {
        line_items
            .add(fields! { "sku" => *sku })
            .expect("fixture line item should be created");
    }
    Order::new(
        facade.clone(),
        fields! { "id" => id, "line_items" => line_items },
    )
    .expect("fixture order should build")
}

/// Sku of the line item at `index`, read back through the collection.
pub fn sku_at(order: &dyn DataObject, index: usize) -> String {
    order
        .field_map()
        .get("line_items")
        .and_then(|value| value.as_collection())
        .and_then(|collection| collection.get(index))
        .and_then(|member| member.field_map().scalar_str("sku").map(str::to_string))
        .expect("line item sku should be set")
}
