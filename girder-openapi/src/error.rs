// Error types for document assembly

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssembleError {
    /// A `$ref` that points outside `#/components/schemas/` or at a schema
    /// name the components table does not contain.
    #[error("Unresolved reference: {reference}")]
    UnresolvedReference { reference: String },

    /// Two fragments (or a fragment and a pre-existing root path) claim the
    /// same path key.
    #[error("Duplicate path key: {path}")]
    DuplicatePath { path: String },

    /// A component schema is reachable from itself; inlining would not
    /// terminate.
    #[error("Circular component reference: {name}")]
    CircularReference { name: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, AssembleError>;

impl From<AssembleError> for girder_http::Error {
    fn from(err: AssembleError) -> Self {
        girder_http::Error::Internal(err.to_string())
    }
}
