//! # gwmock-core
//!
//! Domain types, ports and services for the gwmock resource server: an
//! in-memory stand-in for a gateway-management REST API used to exercise
//! client SDKs.
//!
//! - [`domain`] - Gateway / Server entities, the per-kind response policy,
//!   association reference data
//! - [`ports`] - the `EntityStore` trait and the core error taxonomy
//! - [`store`] - the in-memory store
//! - [`services`] - `ResourceService`, `AssociationService`, `AppCore`
//! - [`settings`] - rate-limit and login settings

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;
pub mod store;

// Re-export commonly used types for convenience
pub use domain::{
    Associations, AuthHeader, AuthType, Entity, Gateway, GatewayCreate, GatewayUpdate,
    ListFilter, Prompt, PromptArgument, RateLimitSnapshot, RequestEnvelope, Resource,
    ResourceKind, ResponsePolicy, Server, ServerCreate, ServerUpdate, ToggleShape, Tool,
};
pub use ports::{CoreError, EntityStore, StoreError};
pub use services::{AppCore, AssociationService, ResourceRegistry, ResourceService};
pub use settings::{
    DEFAULT_ACCESS_TOKEN, DEFAULT_RATE_LIMIT, DEFAULT_RATE_LIMIT_WINDOW_SECS, Settings,
    SettingsError, validate_settings,
};
pub use store::InMemoryStore;
