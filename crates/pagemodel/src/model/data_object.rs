// Data objects
//
// A data object is one test-data record: declared fields filled by option
// merging, lifecycle operations that drive the page facade, and a deep-copy
// operation that rebuilds the exact runtime type through its own
// constructor path.

use std::any::Any;
use std::fmt;

use crate::error::{Error, Result};
use crate::facade::FacadeHandle;
use crate::model::copy;
use crate::model::{FieldMap, FieldValues, Schema};

/// One test-data record with declared, option-merged fields.
///
/// Types are usually defined with the [`data_object!`](crate::data_object)
/// macro, which generates the storage plumbing and the standard constructor
/// path. The provided lifecycle methods drive the [page
/// facade](crate::facade::PageFacade); override them when a record needs
/// more than a single facade call.
///
/// # Example
///
/// ```ignore
/// use pagemodel_rs::{data_object, fields, RecordingFacade};
///
/// data_object! {
///     /// A product under test.
///     pub struct Product {
///         required "sku": Scalar,
///         "price": Scalar,
///     }
/// }
///
/// let facade = RecordingFacade::shared();
/// let product = Product::new(facade, fields! { "sku" => "P-1", "price" => 995 })?;
/// let copy = product.deep_copy()?;
/// ```
pub trait DataObject: Any + Send {
    /// The type's declared field layout.
    fn schema(&self) -> &'static Schema;

    /// The filled field slots.
    fn field_map(&self) -> &FieldMap;

    /// Mutable access to the filled field slots.
    fn field_map_mut(&mut self) -> &mut FieldMap;

    /// The page facade this record drives.
    fn facade(&self) -> &FacadeHandle;

    /// Standard constructor path for this runtime type.
    ///
    /// Required-field validation runs again on the supplied values; the
    /// deep-copy engine relies on this to rebuild "the same type, checked
    /// the same way".
    fn construct(&self, values: FieldValues) -> Result<Box<dyn DataObject>>;

    /// Upcast for test-side downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Pushes the record to the system under test.
    fn create(&mut self) -> Result<()> {
        let type_name = self.schema().type_name();
        let snapshot = self.field_map().snapshot();
        tracing::debug!(type_name, "creating record");
        self.facade()
            .create_record(type_name, &snapshot)
            .map_err(|source| Error::ElementCreationFailure {
                element_type: type_name,
                source,
            })
    }

    /// Re-applies a partial field mapping, then pushes the merged state.
    fn edit(&mut self, updates: FieldValues) -> Result<()> {
        self.field_map_mut().set_options(updates)?;
        let type_name = self.schema().type_name();
        let snapshot = self.field_map().snapshot();
        tracing::debug!(type_name, "editing record");
        self.facade().update_record(type_name, &snapshot)?;
        Ok(())
    }

    /// Removes the record from the system under test.
    fn remove(&mut self) -> Result<()> {
        let type_name = self.schema().type_name();
        let snapshot = self.field_map().snapshot();
        tracing::debug!(type_name, "removing record");
        self.facade().delete_record(type_name, &snapshot)?;
        Ok(())
    }

    /// Hook invoked when an owning collection broadcasts an update.
    ///
    /// Fails unless the type overrides it; participating types also
    /// advertise the capability on their element-type descriptor so
    /// notifying collections are checked at configuration time.
    fn update_from_parent(&mut self, _updates: &FieldValues) -> Result<()> {
        Err(Error::UnimplementedParentUpdateHook {
            type_name: self.schema().type_name(),
        })
    }

    /// Independent copy of this record.
    ///
    /// Mutating the copy never affects the original, including through
    /// nested collections, nested objects, and plain containers. Handle
    /// fields keep sharing their external resource.
    fn deep_copy(&self) -> Result<Box<dyn DataObject>> {
        let copied = copy::copy_field_map(self.field_map())?;
        self.construct(copied)
    }
}

impl fmt::Debug for dyn DataObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({} fields)",
            self.schema().type_name(),
            self.field_map().len()
        )
    }
}
