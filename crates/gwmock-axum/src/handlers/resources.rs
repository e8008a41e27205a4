//! Resource handlers - CRUD and toggle for every resource kind.
//!
//! Handlers are generic over the entity; kind-specific behaviour (create
//! envelope, toggle response shape, list scoping) comes from the kind's
//! `ResponsePolicy`.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;

use gwmock_core::{
    AppCore, Entity, ListFilter, RateLimitSnapshot, RequestEnvelope, ResourceRegistry,
    ResourceService,
};

use crate::error::HttpError;
use crate::rate_limit::RateLimitHeaders;
use crate::state::AppState;

/// Query string of a toggle request.
#[derive(Debug, Deserialize)]
pub struct ToggleQuery {
    /// Target state; the action sets, it does not flip.
    pub activate: bool,
}

fn service<E>(state: &AppState) -> &ResourceService<E>
where
    E: Entity,
    AppCore: ResourceRegistry<E>,
{
    ResourceRegistry::<E>::service(state.core.as_ref())
}

/// Create an entity. Responds with the stored entity and rate-limit headers.
pub async fn create<E>(State(state): State<AppState>, body: Bytes) -> Result<Response, HttpError>
where
    E: Entity,
    AppCore: ResourceRegistry<E>,
{
    let payload: E::Create = E::KIND.policy().create_body.decode(&body)?;
    let created = service::<E>(&state).create(payload).await?;
    let limits = RateLimitSnapshot::at(&state.settings, Utc::now());

    Ok((RateLimitHeaders(limits), Json(created)).into_response())
}

/// List entities matching the query filters.
pub async fn list<E>(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Result<Json<Vec<E>>, HttpError>
where
    E: Entity,
    AppCore: ResourceRegistry<E>,
{
    Ok(Json(service::<E>(&state).list(&filter).await?))
}

/// Get one entity.
pub async fn get<E>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<E>, HttpError>
where
    E: Entity,
    AppCore: ResourceRegistry<E>,
{
    Ok(Json(service::<E>(&state).get(&id).await?))
}

/// Apply a partial update. The body is never wrapped, for any kind.
pub async fn update<E>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<E>, HttpError>
where
    E: Entity,
    AppCore: ResourceRegistry<E>,
{
    let patch: E::Update = RequestEnvelope::Bare.decode(&body)?;
    Ok(Json(service::<E>(&state).update(&id, patch).await?))
}

/// Delete an entity.
pub async fn remove<E>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError>
where
    E: Entity,
    AppCore: ResourceRegistry<E>,
{
    service::<E>(&state).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Set the enabled state and shape the response per the kind's policy.
pub async fn toggle<E>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ToggleQuery>,
) -> Result<Json<Value>, HttpError>
where
    E: Entity,
    AppCore: ResourceRegistry<E>,
{
    let toggled = service::<E>(&state).toggle(&id, query.activate).await?;

    let verb = if query.activate {
        "activated"
    } else {
        "deactivated"
    };
    let message = format!("{} {} {verb}", E::KIND, toggled.id());
    let body = serde_json::to_value(&toggled)?;

    Ok(Json(E::KIND.policy().toggle_response.wrap(body, message)))
}
