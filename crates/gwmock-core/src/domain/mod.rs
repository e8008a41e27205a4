//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (HTTP, storage).
//!
//! # Structure
//!
//! - `kind` - Resource kinds (`ResourceKind`)
//! - `policy` - Per-kind request/response shaping (`ResponsePolicy`)
//! - `entity` - The `Entity` trait and list filtering
//! - `gateway` - Gateway types (`Gateway`, `GatewayCreate`, `GatewayUpdate`)
//! - `server` - Server types (`Server`, `ServerCreate`, `ServerUpdate`)
//! - `associations` - Tools, resources and prompts reported for servers
//! - `rate_limit` - Synthetic rate-limit snapshots

pub mod associations;
pub mod entity;
pub mod gateway;
pub mod kind;
pub mod policy;
pub mod rate_limit;
pub mod server;

pub use associations::{Associations, Prompt, PromptArgument, Resource, Tool};
pub use entity::{Entity, ListFilter, advance_timestamp};
pub use gateway::{AuthHeader, AuthType, Gateway, GatewayCreate, GatewayUpdate};
pub use kind::ResourceKind;
pub use policy::{RequestEnvelope, ResponsePolicy, ToggleShape};
pub use rate_limit::RateLimitSnapshot;
pub use server::{Server, ServerCreate, ServerUpdate};
