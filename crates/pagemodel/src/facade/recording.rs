// In-memory facade for tests
//
// Records every record lifecycle call and can be armed to reject the next
// call of a given operation, for exercising create-failure paths.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;

use crate::facade::{FacadeError, FacadeResult, PageFacade};

/// One recorded facade call. Serializable, so suites can snapshot a whole
/// call log.
#[derive(Debug, Clone, Serialize)]
pub struct FacadeCall {
    pub operation: &'static str,
    pub type_name: String,
    pub snapshot: Value,
}

/// Records record lifecycles instead of driving a browser.
///
/// The `Arc` returned by [`shared`](Self::shared) coerces to a
/// [`FacadeHandle`](crate::facade::FacadeHandle) wherever one is expected,
/// so the test keeps the concrete type for inspection while data objects
/// hold the opaque handle.
///
/// # Example
///
/// ```ignore
/// use pagemodel_rs::RecordingFacade;
///
/// let facade = RecordingFacade::shared();
/// // ... drive data objects through `facade.clone()` ...
/// assert_eq!(facade.calls_for("create").len(), 2);
/// ```
#[derive(Default)]
pub struct RecordingFacade {
    calls: Mutex<Vec<FacadeCall>>,
    rejections: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingFacade {
    /// Fresh facade the caller keeps hold of for inspection.
    pub fn shared() -> Arc<RecordingFacade> {
        Arc::new(Self::default())
    }

    /// Arms the facade to reject the next call of `operation`.
    pub fn reject_next(&self, operation: &'static str, message: impl Into<String>) {
        self.rejections.lock().push((operation, message.into()));
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<FacadeCall> {
        self.calls.lock().clone()
    }

    /// Recorded calls for one operation, in order.
    pub fn calls_for(&self, operation: &'static str) -> Vec<FacadeCall> {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.operation == operation)
            .cloned()
            .collect()
    }

    fn record(&self, operation: &'static str, type_name: &str, snapshot: &Value) -> FacadeResult<()> {
        let armed = {
            let mut rejections = self.rejections.lock();
            rejections
                .iter()
                .position(|(op, _)| *op == operation)
                .map(|index| rejections.remove(index))
        };
        if let Some((_, message)) = armed {
            return Err(FacadeError::Rejected {
                operation,
                type_name: type_name.to_string(),
                message,
            });
        }
        tracing::debug!(operation, type_name, "recording facade call");
        self.calls.lock().push(FacadeCall {
            operation,
            type_name: type_name.to_string(),
            snapshot: snapshot.clone(),
        });
        Ok(())
    }
}

impl PageFacade for RecordingFacade {
    fn create_record(&self, type_name: &str, snapshot: &Value) -> FacadeResult<()> {
        self.record("create", type_name, snapshot)
    }

    fn update_record(&self, type_name: &str, snapshot: &Value) -> FacadeResult<()> {
        self.record("update", type_name, snapshot)
    }

    fn delete_record(&self, type_name: &str, snapshot: &Value) -> FacadeResult<()> {
        self.record("delete", type_name, snapshot)
    }
}
