// Error types shared by Girder HTTP surfaces

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Status code a response built from this error should carry.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Http(_) => 400,
            Error::NotFound(_) => 404,
            Error::Serialization(_) | Error::Internal(_) | Error::Io(_) => 500,
        }
    }
}
