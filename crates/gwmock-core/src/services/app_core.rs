//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters receive an
//! `AppCore` instance and use it to access all functionality.

use std::sync::Arc;

use crate::domain::{Entity, Gateway, Server};
use crate::ports::EntityStore;
use crate::store::InMemoryStore;

use super::{AssociationService, ResourceService};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let core = AppCore::in_memory();
/// let gw = core.gateways().create(GatewayCreate::new("gw", "http://up")).await?;
/// let tools = core.associations().tools(core.servers(), "server-1").await?;
/// ```
pub struct AppCore {
    gateways: ResourceService<Gateway>,
    servers: ResourceService<Server>,
    associations: AssociationService,
}

impl AppCore {
    /// Create an `AppCore` over the given stores.
    pub fn new(
        gateways: Arc<dyn EntityStore<Gateway>>,
        servers: Arc<dyn EntityStore<Server>>,
        associations: AssociationService,
    ) -> Self {
        Self {
            gateways: ResourceService::new(gateways),
            servers: ResourceService::new(servers),
            associations,
        }
    }

    /// `AppCore` backed by fresh in-memory stores and reference associations.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryStore::<Gateway>::new()),
            Arc::new(InMemoryStore::<Server>::new()),
            AssociationService::default(),
        )
    }

    /// Access the gateway service.
    pub const fn gateways(&self) -> &ResourceService<Gateway> {
        &self.gateways
    }

    /// Access the server service.
    pub const fn servers(&self) -> &ResourceService<Server> {
        &self.servers
    }

    /// Access the association service.
    pub const fn associations(&self) -> &AssociationService {
        &self.associations
    }
}

/// Resolves the service for one resource kind.
///
/// Generic adapters (HTTP handlers) are written against this trait, so a
/// new kind needs an `Entity` impl and a binding here rather than new
/// handler code.
pub trait ResourceRegistry<E: Entity> {
    fn service(&self) -> &ResourceService<E>;
}

impl ResourceRegistry<Gateway> for AppCore {
    fn service(&self) -> &ResourceService<Gateway> {
        &self.gateways
    }
}

impl ResourceRegistry<Server> for AppCore {
    fn service(&self) -> &ResourceService<Server> {
        &self.servers
    }
}
