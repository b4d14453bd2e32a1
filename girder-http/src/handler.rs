//! Async handler seam.
//!
//! Components that answer HTTP requests implement [`Handler`]; the hosting
//! server routes a request to one handler and awaits its response. Handlers
//! are expected to hold immutable state and be shareable behind an `Arc`.

use crate::{Error, HttpRequest, HttpResponse};
use async_trait::async_trait;

#[async_trait]
pub trait Handler: Send + Sync {
    /// Handle one request.
    async fn handle(&self, req: HttpRequest) -> Result<HttpResponse, Error>;
}
