//! # gwmock-axum
//!
//! HTTP adapter for the gwmock resource server. Builds the axum router over
//! an `AppCore`, maps core errors to the emulated API's status codes and
//! bodies, and runs the listener.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; used by tests/
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod rate_limit;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    AxumContext, CorsConfig, DEFAULT_HOST, DEFAULT_PORT, ServerConfig, bootstrap, start_server,
};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
