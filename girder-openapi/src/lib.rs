//! OpenAPI 3.0 document assembly and interactive API documentation for
//! Girder services.
//!
//! The crate does one job: take a root document, merge per-endpoint path
//! fragments into it, inline every `$ref` placeholder from the components
//! table, and hand the resolved result to an external renderer (Swagger UI
//! or ReDoc) via a small HTTP handler.
//!
//! ## Features
//!
//! - 📝 **Programmatic API** - Build documents with fluent builders
//! - 🧩 **Fragment assembly** - One fragment per endpoint, merged at startup
//! - 🔗 **Reference inlining** - `$ref` placeholders resolved, fail-fast on
//!   dangling or circular references
//! - 📊 **Swagger UI / ReDoc** - Interactive documentation pages
//! - 📤 **JSON/YAML Export** - Spec endpoints in both formats
//!
//! ## Quick Start
//!
//! ```
//! use girder_openapi::{Assembler, DocumentBuilder};
//!
//! let base = DocumentBuilder::new("My API", "1.0.0")
//!     .description("A wonderful API")
//!     .server("http://localhost:3000", None)
//!     .build();
//!
//! let doc = Assembler::new(base).assemble().unwrap();
//! assert_eq!(doc.openapi, "3.0.0");
//! assert_eq!(doc.info.title, "My API");
//! ```
//!
//! ## Fragments and Reference Resolution
//!
//! ```
//! use girder_openapi::{
//!     object_schema, schema_ref, string_schema, Assembler, DocumentBuilder,
//!     OperationBuilder, PathFragment, PathItemBuilder, Response,
//! };
//! use std::collections::BTreeMap;
//!
//! let mut props = BTreeMap::new();
//! props.insert("name".to_string(), string_schema());
//!
//! let base = DocumentBuilder::new("User API", "1.0.0")
//!     .schema("User", object_schema(props, vec!["name".to_string()]))
//!     .build();
//!
//! let users = PathFragment::new(
//!     "/users",
//!     PathItemBuilder::new()
//!         .get(
//!             OperationBuilder::new()
//!                 .summary("List users")
//!                 .response("200", Response::json("Users", schema_ref("User")))
//!                 .build(),
//!         )
//!         .build(),
//! );
//!
//! let doc = Assembler::new(base)
//!     .fragment(users)
//!     .manifest_version(env!("CARGO_PKG_VERSION"))
//!     .assemble()
//!     .unwrap();
//!
//! // the placeholder is gone; the component definition is inlined
//! let schema = doc.paths["/users"].get.as_ref().unwrap().responses["200"]
//!     .content.as_ref().unwrap()["application/json"]
//!     .schema.as_ref().unwrap();
//! assert!(schema.reference.is_none());
//! ```
//!
//! ## Serving the Documentation
//!
//! ```no_run
//! use girder_http::{Handler, HttpRequest};
//! use girder_openapi::{DocsHandler, DocumentBuilder};
//!
//! #[tokio::main]
//! async fn main() {
//!     let doc = DocumentBuilder::new("My API", "1.0.0").build();
//!     let handler = DocsHandler::new(doc);
//!
//!     let page = handler
//!         .handle(HttpRequest::new("GET", "/docs"))
//!         .await
//!         .unwrap();
//!     assert_eq!(page.status, 200);
//! }
//! ```

pub mod assembler;
pub mod builder;
pub mod config;
pub mod docs;
pub mod error;
pub mod fragment;
pub mod redoc;
pub mod spec;
pub mod swagger;

// Re-export commonly used types
pub use assembler::*;
pub use builder::*;
pub use config::*;
pub use docs::*;
pub use error::*;
pub use fragment::*;
pub use redoc::*;
pub use spec::*;
pub use swagger::*;
