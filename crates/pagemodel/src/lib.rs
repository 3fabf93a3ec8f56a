//! pagemodel: Page-object and data-object conventions for acceptance testing
//!
//! This crate lets test authors bundle test data into typed, reusable data
//! objects, compose them into deep-copyable collections, and drive a
//! pluggable page facade (the browser-automation seam) through the objects'
//! lifecycle operations.
//!
//! # Examples
//!
//! ## Declaring and creating a data object
//!
//! ```ignore
//! use pagemodel_rs::{data_object, fields, RecordingFacade};
//!
//! data_object! {
//!     /// A customer account under test.
//!     pub struct Account {
//!         required "email": Scalar,
//!         "display_name": Scalar,
//!         "roles": Sequence,
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let facade = RecordingFacade::shared();
//!     let mut account = Account::new(
//!         facade,
//!         fields! {
//!             "email" => pagemodel_rs::data::random::email(),
//!             "roles" => serde_json::json!(["buyer"]),
//!         },
//!     )?;
//!     account.create()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Collections and deep copy
//!
//! ```ignore
//! use pagemodel_rs::{data_object, fields, Collection, DataObject, RecordingFacade};
//!
//! data_object! {
//!     pub struct LineItem {
//!         required "sku": Scalar,
//!         "qty": Scalar,
//!     }
//! }
//!
//! data_object! {
//!     pub struct Order {
//!         required "id": Scalar,
//!         "line_items": Collection,
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let facade = RecordingFacade::shared();
//!     let mut line_items = Collection::new(&LineItem::ELEMENT, facade.clone());
//!     line_items.add(fields! { "sku" => "A" })?;
//!     line_items.add(fields! { "sku" => "B" })?;
//!
//!     let order = Order::new(facade, fields! { "id" => 1, "line_items" => line_items })?;
//!
//!     // The copy shares nothing mutable with the original: growing the
//!     // copy's collection leaves the original at two members.
//!     let copy = order.deep_copy()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Random test data and date forms
//!
//! ```ignore
//! use pagemodel_rs::data::{datetime, random};
//!
//! let email = random::email();
//! let probe = random::attack_payload();
//! let due = datetime::iso(datetime::tomorrow(datetime::today()));
//! ```

pub mod data;
pub mod error;
pub mod facade;
pub mod model;

// Re-export error types
pub use error::{Error, Result};

// Re-export the facade seam
pub use facade::{FacadeError, FacadeHandle, FacadeResult, PageFacade, RecordingFacade};

// Re-export the core model
pub use model::{
    Collection, DataObject, ElementType, ExternalHandle, FieldDecl, FieldKind, FieldMap,
    FieldValue, FieldValues, PlainValue, Schema,
};
