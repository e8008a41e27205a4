//! Gateway domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::Entity;
use super::kind::ResourceKind;

/// Authentication scheme a gateway uses toward its upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
    None,
    Basic,
    Bearer,
    ApiKey,
    Oauth,
}

/// A single header sent upstream (used by `api_key` auth).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthHeader {
    pub key: String,
    pub value: String,
}

impl AuthHeader {
    /// Create a header entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A stored gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gateway {
    /// Store-assigned identifier.
    pub id: String,
    pub name: String,
    /// Upstream endpoint.
    pub url: String,
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<AuthType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_headers: Option<Vec<AuthHeader>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_config: Option<Map<String, Value>>,

    pub tags: Vec<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub team_id: Option<String>,
    pub visibility: Option<String>,
}

/// Payload for creating a gateway.
///
/// Identifier, timestamps and the enabled flag are never taken from the
/// caller; unknown fields such as `id` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayCreate {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub auth_type: Option<AuthType>,
    #[serde(default)]
    pub auth_username: Option<String>,
    #[serde(default)]
    pub auth_password: Option<String>,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub auth_headers: Option<Vec<AuthHeader>>,
    #[serde(default)]
    pub oauth_config: Option<Map<String, Value>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
}

impl GatewayCreate {
    /// Minimal gateway with no authentication.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Set the auth type.
    #[must_use]
    pub const fn with_auth(mut self, auth_type: AuthType) -> Self {
        self.auth_type = Some(auth_type);
        self
    }

    /// Set tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Partial gateway update.
///
/// All fields are optional - only provided (non-null) fields are updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<AuthType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_headers: Option<Vec<AuthHeader>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_config: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

/// Overwrite `target` when `value` is present.
fn overwrite<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

impl Entity for Gateway {
    type Create = GatewayCreate;
    type Update = GatewayUpdate;

    const KIND: ResourceKind = ResourceKind::Gateway;

    fn from_create(id: String, payload: GatewayCreate, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: payload.name,
            url: payload.url,
            description: payload.description,
            auth_type: payload.auth_type,
            auth_username: payload.auth_username,
            auth_password: payload.auth_password,
            auth_token: payload.auth_token,
            auth_headers: payload.auth_headers,
            oauth_config: payload.oauth_config,
            tags: payload.tags,
            enabled: true,
            created_at: now,
            updated_at: now,
            team_id: payload.team_id,
            visibility: payload.visibility,
        }
    }

    fn apply_update(&mut self, patch: GatewayUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        overwrite(&mut self.description, patch.description);
        overwrite(&mut self.auth_type, patch.auth_type);
        overwrite(&mut self.auth_username, patch.auth_username);
        overwrite(&mut self.auth_password, patch.auth_password);
        overwrite(&mut self.auth_token, patch.auth_token);
        overwrite(&mut self.auth_headers, patch.auth_headers);
        overwrite(&mut self.oauth_config, patch.oauth_config);
        overwrite(&mut self.team_id, patch.team_id);
        overwrite(&mut self.visibility, patch.visibility);
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_type_wire_names() {
        let json = serde_json::to_string(&AuthType::ApiKey).unwrap();
        assert_eq!(json, "\"api_key\"");
        let parsed: AuthType = serde_json::from_str("\"oauth\"").unwrap();
        assert_eq!(parsed, AuthType::Oauth);
    }

    #[test]
    fn create_ignores_caller_identity_fields() {
        let payload: GatewayCreate = serde_json::from_str(
            r#"{"id":"spoofed","enabled":false,"created_at":"2000-01-01T00:00:00Z",
                "name":"gw","url":"http://upstream","auth_type":"bearer","auth_token":"tok"}"#,
        )
        .unwrap();
        let now = Utc::now();
        let gateway = Gateway::from_create("gateway-1".to_string(), payload, now);

        assert_eq!(gateway.id, "gateway-1");
        assert!(gateway.enabled);
        assert_eq!(gateway.created_at, now);
        assert_eq!(gateway.auth_type, Some(AuthType::Bearer));
        assert_eq!(gateway.auth_token.as_deref(), Some("tok"));
        assert!(gateway.tags.is_empty());
    }

    #[test]
    fn update_overwrites_only_present_fields() {
        let mut gateway = Gateway::from_create(
            "gateway-1".to_string(),
            GatewayCreate::new("gw", "http://a").with_tags(vec!["prod".to_string()]),
            Utc::now(),
        );
        let patch: GatewayUpdate =
            serde_json::from_str(r#"{"description":"edge","url":null}"#).unwrap();
        gateway.apply_update(patch);

        assert_eq!(gateway.description.as_deref(), Some("edge"));
        assert_eq!(gateway.url, "http://a");
        assert_eq!(gateway.tags, vec!["prod".to_string()]);
        assert_eq!(gateway.name, "gw");
    }

    #[test]
    fn absent_credentials_are_not_serialized() {
        let gateway =
            Gateway::from_create("gateway-1".to_string(), GatewayCreate::new("gw", "http://a"), Utc::now());
        let json = serde_json::to_value(&gateway).unwrap();
        assert!(json.get("auth_password").is_none());
        assert!(json.get("description").is_some());
    }
}
