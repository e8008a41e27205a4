//! Resource kinds served by the mock.

use std::fmt;

use super::policy::{RequestEnvelope, ResponsePolicy, ToggleShape};

/// The resource kinds the mock manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Proxied upstream endpoint configuration.
    Gateway,
    /// Named aggregate of tools, resources and prompts.
    Server,
}

impl ResourceKind {
    /// Prefix used for generated identifiers (`gateway-1`, `server-1`).
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Gateway => "gateway",
            Self::Server => "server",
        }
    }

    /// Human-readable label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gateway => "Gateway",
            Self::Server => "Server",
        }
    }

    /// Response-shaping rules for this kind.
    #[must_use]
    pub const fn policy(self) -> ResponsePolicy {
        match self {
            Self::Gateway => ResponsePolicy {
                create_body: RequestEnvelope::Bare,
                toggle_response: ToggleShape::StatusEnvelope { field: "gateway" },
                scoped_listing: false,
            },
            Self::Server => ResponsePolicy {
                create_body: RequestEnvelope::Field("server"),
                toggle_response: ToggleShape::Entity,
                scoped_listing: true,
            },
        }
    }

    /// Format the identifier for the `n`th entity of this kind.
    #[must_use]
    pub fn format_id(self, n: u64) -> String {
        format!("{}-{n}", self.id_prefix())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
