//! Association handlers - tools, resources and prompts of a server.

use axum::Json;
use axum::extract::{Path, State};

use crate::error::HttpError;
use crate::state::AppState;
use gwmock_core::{Prompt, Resource, Tool};

/// List tools of a server.
pub async fn tools(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Tool>>, HttpError> {
    let core = &state.core;
    Ok(Json(core.associations().tools(core.servers(), &id).await?))
}

/// List resources of a server.
pub async fn resources(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Resource>>, HttpError> {
    let core = &state.core;
    Ok(Json(core.associations().resources(core.servers(), &id).await?))
}

/// List prompts of a server.
pub async fn prompts(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Prompt>>, HttpError> {
    let core = &state.core;
    Ok(Json(core.associations().prompts(core.servers(), &id).await?))
}
