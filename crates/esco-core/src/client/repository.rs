//! Client repository trait.

use super::model::Client;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for CRM client records.
///
/// All operations return owned snapshots; no shared mutable state escapes
/// the repository.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Finds a client by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Client))`: Client found
    /// - `Ok(None)`: Client not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, client_id: &str) -> Result<Option<Client>>;

    /// Saves a client, inserting or replacing by id. New clients are
    /// prepended so they list first.
    async fn save(&self, client: &Client) -> Result<()>;

    /// Lists all clients in display order.
    async fn list_all(&self) -> Result<Vec<Client>>;

    /// Allocates the next `client-{n}` id above the current maximum.
    async fn next_client_id(&self) -> Result<String>;
}
