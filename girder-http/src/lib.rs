// HTTP value types and handler seam shared by Girder crates.
// The hosting server owns sockets and parsing; this crate owns the shapes
// that cross the boundary between it and application components.

pub mod error;
pub mod handler;
pub mod http;

// Re-export commonly used types
pub use error::*;
pub use handler::*;
pub use http::*;
