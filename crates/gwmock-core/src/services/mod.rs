//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete store implementations, except `AppCore`
//! which offers an in-memory convenience constructor.

mod app_core;
mod association_service;
mod resource_service;

pub use app_core::{AppCore, ResourceRegistry};
pub use association_service::AssociationService;
pub use resource_service::ResourceService;
