//! Server domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::kind::ResourceKind;

/// A stored server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub tags: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub team_id: Option<String>,
    pub visibility: Option<String>,
}

/// Payload for creating a server. Sent wrapped as `{"server": {...}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
}

impl ServerCreate {
    /// Minimal server payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set team scoping.
    #[must_use]
    pub fn with_team(mut self, team_id: impl Into<String>, visibility: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self.visibility = Some(visibility.into());
        self
    }
}

/// Partial server update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

impl Entity for Server {
    type Create = ServerCreate;
    type Update = ServerUpdate;

    const KIND: ResourceKind = ResourceKind::Server;

    fn from_create(id: String, payload: ServerCreate, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
            icon: payload.icon,
            tags: payload.tags,
            is_active: true,
            created_at: now,
            updated_at: now,
            team_id: payload.team_id,
            visibility: payload.visibility,
        }
    }

    fn apply_update(&mut self, patch: ServerUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if patch.description.is_some() {
            self.description = patch.description;
        }
        if patch.icon.is_some() {
            self.icon = patch.icon;
        }
        if patch.team_id.is_some() {
            self.team_id = patch.team_id;
        }
        if patch.visibility.is_some() {
            self.visibility = patch.visibility;
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn is_enabled(&self) -> bool {
        self.is_active
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.is_active = enabled;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    fn team_id(&self) -> Option<&str> {
        self.team_id.as_deref()
    }

    fn visibility(&self) -> Option<&str> {
        self.visibility.as_deref()
    }
}
