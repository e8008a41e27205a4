//! Association service - tools, resources and prompts reported for servers.

use crate::domain::{Associations, Prompt, Resource, Server, Tool};
use crate::ports::CoreError;

use super::ResourceService;

/// Read-only association listings for servers.
///
/// Any existing server reports the same reference collections; unknown
/// servers are `NotFound`.
pub struct AssociationService {
    reference: Associations,
}

impl AssociationService {
    /// Create a service serving `reference` for every server.
    pub const fn new(reference: Associations) -> Self {
        Self { reference }
    }

    /// Tools attached to `server_id`.
    pub async fn tools(
        &self,
        servers: &ResourceService<Server>,
        server_id: &str,
    ) -> Result<Vec<Tool>, CoreError> {
        servers.ensure_exists(server_id).await?;
        Ok(self.reference.tools.clone())
    }

    /// Resources attached to `server_id`.
    pub async fn resources(
        &self,
        servers: &ResourceService<Server>,
        server_id: &str,
    ) -> Result<Vec<Resource>, CoreError> {
        servers.ensure_exists(server_id).await?;
        Ok(self.reference.resources.clone())
    }

    /// Prompts attached to `server_id`.
    pub async fn prompts(
        &self,
        servers: &ResourceService<Server>,
        server_id: &str,
    ) -> Result<Vec<Prompt>, CoreError> {
        servers.ensure_exists(server_id).await?;
        Ok(self.reference.prompts.clone())
    }
}

impl Default for AssociationService {
    fn default() -> Self {
        Self::new(Associations::reference())
    }
}
