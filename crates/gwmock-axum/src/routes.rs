//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `AppCore` facade.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use gwmock_core::{AppCore, Entity, Gateway, ResourceRegistry, Server};

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers::{associations, auth, method_not_allowed, resources};
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// CRUD and toggle routes for one resource kind under `/{collection}`.
///
/// Registering a new kind is one call to this function.
pub(crate) fn resource_routes<E>(collection: &str) -> Router<AppState>
where
    E: Entity,
    AppCore: ResourceRegistry<E>,
{
    Router::new()
        .route(
            &format!("/{collection}"),
            get(resources::list::<E>)
                .post(resources::create::<E>)
                .fallback(method_not_allowed),
        )
        .route(
            &format!("/{collection}/{{id}}"),
            get(resources::get::<E>)
                .put(resources::update::<E>)
                .delete(resources::remove::<E>)
                .fallback(method_not_allowed),
        )
        .route(
            &format!("/{collection}/{{id}}/toggle"),
            post(resources::toggle::<E>).fallback(method_not_allowed),
        )
}

/// Build all API routes.
///
/// Returns a router typed as `Router<AppState>` WITHOUT `.with_state()`
/// applied; the caller provides state.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Gateways API
        .merge(resource_routes::<Gateway>("gateways"))
        // Servers API
        .merge(resource_routes::<Server>("servers"))
        .route(
            "/servers/{id}/tools",
            get(associations::tools).fallback(method_not_allowed),
        )
        .route(
            "/servers/{id}/resources",
            get(associations::resources).fallback(method_not_allowed),
        )
        .route(
            "/servers/{id}/prompts",
            get(associations::prompts).fallback(method_not_allowed),
        )
        // Auth API
        .route(
            "/auth/login",
            post(auth::login).fallback(method_not_allowed),
        )
}

/// Create the main Axum router with all API routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes().with_state(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
