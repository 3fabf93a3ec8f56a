// Error types for pagemodel-rs

use thiserror::Error;

use crate::facade::FacadeError;
use crate::model::FieldKind;

/// Result type alias for pagemodel-rs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or copying test data
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was null or absent after construction
    ///
    /// Required fields are checked once, at the end of the constructor path.
    /// Supply a non-null value for the named field when building the object.
    #[error("{type_name} requires field '{field}' to be set")]
    MissingRequiredField {
        type_name: &'static str,
        field: String,
    },

    /// A plain-container field held a value that cannot be reconstructed
    ///
    /// Plain sequence and mapping fields must hold serializable data only.
    /// External handles cannot be serialized and reconstructed, so the deep
    /// copy fails rather than producing a copy that silently shares state.
    #[error(
        "cannot deep-copy field '{field}': {value} of kind '{kind}' is not serializable.\n\
        Plain sequence and mapping fields must hold copy-safe data only.\n\
        If this value is a data object or owns live driver state, declare the\n\
        field as a collection or handle instead of a plain container."
    )]
    UnsupportedCopyValue {
        field: String,
        value: String,
        kind: &'static str,
    },

    /// A parent update reached a data object that does not accept them
    ///
    /// Types that participate in parent-driven updates must override the
    /// update hook and advertise the capability on their element type.
    #[error("{type_name} does not implement the parent update hook")]
    UnimplementedParentUpdateHook { type_name: &'static str },

    /// The create lifecycle call failed while adding a collection element
    ///
    /// The element is not appended when creation fails.
    #[error("failed to create {element_type} element")]
    ElementCreationFailure {
        element_type: &'static str,
        #[source]
        source: FacadeError,
    },

    /// A field value did not match the kind declared for its slot
    #[error("{type_name}.{field} is declared {declared:?} but was given a {actual:?} value")]
    KindMismatch {
        type_name: &'static str,
        field: String,
        declared: FieldKind,
        actual: FieldKind,
    },

    /// A value was supplied for a field the schema does not declare
    #[error("{type_name} does not declare a field named '{field}'")]
    UnknownField {
        type_name: &'static str,
        field: String,
    },

    /// A notifying collection was configured over a non-updatable element type
    #[error(
        "collection of {element_type} cannot broadcast parent updates: \
        the element type does not advertise the capability"
    )]
    NotNotifiable { element_type: &'static str },

    /// Driver-level failure surfaced through the page facade
    #[error("driver error: {0}")]
    Facade(#[from] FacadeError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}
