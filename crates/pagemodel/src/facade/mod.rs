// Page facade - the driver seam data objects drive
//
// The concrete driver (browser automation, HTTP fixtures, anything) lives
// behind this trait. The core only forwards record lifecycles with a
// JSON-safe field snapshot; what the driver does with them is opaque.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

mod recording;

pub use recording::{FacadeCall, RecordingFacade};

/// Result type alias for facade operations
pub type FacadeResult<T> = std::result::Result<T, FacadeError>;

/// Errors surfaced by the page facade
#[derive(Debug, Error)]
pub enum FacadeError {
    /// The driver rejected a record lifecycle operation
    #[error("{operation} rejected for {type_name}: {message}")]
    Rejected {
        operation: &'static str,
        type_name: String,
        message: String,
    },

    /// The underlying driver session is gone
    #[error("driver session lost: {0}")]
    SessionLost(String),
}

/// Record lifecycle operations a data object drives.
///
/// `type_name` is the data object's declared type name; `snapshot` is the
/// JSON-safe projection of its filled fields. Implementations typically
/// translate these into page interactions against the system under test.
pub trait PageFacade: Send + Sync {
    fn create_record(&self, type_name: &str, snapshot: &Value) -> FacadeResult<()>;

    fn update_record(&self, type_name: &str, snapshot: &Value) -> FacadeResult<()>;

    fn delete_record(&self, type_name: &str, snapshot: &Value) -> FacadeResult<()>;
}

/// Shared handle to the page facade.
///
/// Data objects and collections hold one each; copies share the same
/// driver. The single-logical-test-flow assumption means no locking beyond
/// what an implementation needs internally.
pub type FacadeHandle = Arc<dyn PageFacade>;
