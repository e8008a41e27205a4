//! The behaviour shared by every stored resource kind.

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::kind::ResourceKind;

/// A resource kind held in the store.
///
/// Implementors describe how a create payload becomes an entity, how a
/// partial update is applied, and expose the fields the generic service
/// needs (identifier, enabled flag, timestamps, scoping).
pub trait Entity: Clone + Serialize + Send + Sync + 'static {
    /// Create payload accepted from callers.
    type Create: DeserializeOwned + Send + 'static;
    /// Partial update payload; absent fields leave the entity untouched.
    type Update: DeserializeOwned + Send + 'static;

    /// Which kind this is.
    const KIND: ResourceKind;

    /// Build a freshly created entity. The entity starts enabled.
    fn from_create(id: String, payload: Self::Create, now: DateTime<Utc>) -> Self;

    /// Overwrite only the fields present in `patch`.
    fn apply_update(&mut self, patch: Self::Update);

    fn id(&self) -> &str;
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
    fn set_updated_at(&mut self, at: DateTime<Utc>);
    fn team_id(&self) -> Option<&str>;
    fn visibility(&self) -> Option<&str>;

    /// Refresh the update timestamp.
    fn touch(&mut self) {
        let next = advance_timestamp(self.updated_at());
        self.set_updated_at(next);
    }
}

/// The current time, or one microsecond past `previous` if the clock has
/// not moved beyond it. Keeps `updated_at` strictly increasing.
pub fn advance_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

/// Query filters accepted by list operations.
///
/// Pagination parameters sent by clients are accepted and ignored; the mock
/// always returns the full filtered set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    /// Include disabled / inactive entities.
    #[serde(default)]
    pub include_inactive: bool,

    /// Exact-match team filter (scoped kinds only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,

    /// Exact-match visibility filter (scoped kinds only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

impl ListFilter {
    /// Filter that returns every entity.
    #[must_use]
    pub fn all() -> Self {
        Self {
            include_inactive: true,
            ..Self::default()
        }
    }

    /// Whether `entity` passes this filter.
    pub fn admits<E: Entity>(&self, entity: &E) -> bool {
        if !self.include_inactive && !entity.is_enabled() {
            return false;
        }
        if !E::KIND.policy().scoped_listing {
            return true;
        }
        let team_ok = self
            .team_id
            .as_deref()
            .is_none_or(|team| entity.team_id() == Some(team));
        let visibility_ok = self
            .visibility
            .as_deref()
            .is_none_or(|vis| entity.visibility() == Some(vis));
        team_ok && visibility_ok
    }
}
