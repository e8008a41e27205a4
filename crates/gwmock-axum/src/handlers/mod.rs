//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for a specific API area.
//! Handlers are thin wrappers that delegate to `AppCore`.

pub mod associations;
pub mod auth;
pub mod resources;

use crate::error::HttpError;

/// Fallback for unsupported methods on a known path.
pub async fn method_not_allowed() -> HttpError {
    HttpError::MethodNotAllowed
}
