//! Error types for exml
//!
//! Rule violations found while validating a widget tree are never errors:
//! they are reported as [`ValidationIssue`](crate::validators::ValidationIssue)
//! values. The types here cover programmer errors only, such as building a
//! validator without a schema registry or misusing the tree builder protocol.

use thiserror::Error;

/// Result type alias using exml Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for exml operations
#[derive(Error, Debug)]
pub enum Error {
    /// A validator was requested before a schema registry was bound
    #[error("schema registry not configured")]
    RegistryNotConfigured,

    /// A widget id does not belong to the tree it was used with
    #[error("unknown widget id: {0}")]
    UnknownWidget(usize),

    /// An attribute or close event arrived with no widget open
    #[error("no widget is open")]
    NoOpenWidget,

    /// A second root widget was opened after the first one closed
    #[error("tree already has a root widget '{0}'")]
    MultipleRoots(String),

    /// The builder was finished with widgets still open
    #[error("{0} widget(s) still open")]
    UnclosedWidgets(usize),

    /// Value error (text not representable in a declared type)
    #[error("value error: {0}")]
    Value(String),

    /// API model could not be deserialized
    #[error("API model error: {0}")]
    Api(#[from] serde_json::Error),
}
