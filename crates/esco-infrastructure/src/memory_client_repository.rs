//! In-memory client repository.

use esco_core::client::{Client, ClientRepository};
use esco_core::error::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A [`ClientRepository`] over an in-memory list.
///
/// In-memory is this system's production storage for the CRM data; there
/// is no file or database backend behind it.
#[derive(Clone)]
pub struct MemoryClientRepository {
    clients: Arc<RwLock<Vec<Client>>>,
}

impl MemoryClientRepository {
    pub fn new(initial: Vec<Client>) -> Self {
        Self {
            clients: Arc::new(RwLock::new(initial)),
        }
    }

    /// Repository seeded with the demo CRM dataset.
    pub fn with_seed() -> Self {
        Self::new(crate::seed::seed_clients())
    }
}

#[async_trait::async_trait]
impl ClientRepository for MemoryClientRepository {
    async fn find_by_id(&self, client_id: &str) -> Result<Option<Client>> {
        let clients = self.clients.read().await;
        Ok(clients.iter().find(|c| c.id == client_id).cloned())
    }

    async fn save(&self, client: &Client) -> Result<()> {
        let mut clients = self.clients.write().await;
        if let Some(existing) = clients.iter_mut().find(|c| c.id == client.id) {
            *existing = client.clone();
        } else {
            // New clients list first.
            clients.insert(0, client.clone());
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Client>> {
        Ok(self.clients.read().await.clone())
    }

    async fn next_client_id(&self) -> Result<String> {
        let clients = self.clients.read().await;
        let max = clients
            .iter()
            .filter_map(|c| c.id.strip_prefix("client-"))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        Ok(format!("client-{}", max + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_next_id_over_seed() {
        let repository = MemoryClientRepository::with_seed();
        assert_eq!(repository.next_client_id().await.unwrap(), "client-5");
    }

    #[tokio::test]
    async fn test_new_clients_list_first() {
        let repository = MemoryClientRepository::with_seed();
        let mut client = repository.find_by_id("client-2").await.unwrap().unwrap();
        client.id = repository.next_client_id().await.unwrap();

        repository.save(&client).await.unwrap();

        let all = repository.list_all().await.unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].id, "client-5");
    }

    #[tokio::test]
    async fn test_save_replaces_existing() {
        let repository = MemoryClientRepository::with_seed();
        let mut client = repository.find_by_id("client-1").await.unwrap().unwrap();
        client.phone = "(915) 555-9999".to_string();

        repository.save(&client).await.unwrap();

        let all = repository.list_all().await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(
            repository
                .find_by_id("client-1")
                .await
                .unwrap()
                .unwrap()
                .phone,
            "(915) 555-9999"
        );
    }
}
