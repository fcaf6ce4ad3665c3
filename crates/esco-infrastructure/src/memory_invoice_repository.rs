//! In-memory invoice repository.

use esco_core::error::Result;
use esco_core::invoice::{Invoice, InvoiceRepository, InvoiceStatus};
use std::sync::Arc;
use tokio::sync::RwLock;

/// An [`InvoiceRepository`] over an in-memory list. Read-only: the portal
/// has no invoice write path.
#[derive(Clone)]
pub struct MemoryInvoiceRepository {
    invoices: Arc<RwLock<Vec<Invoice>>>,
}

impl MemoryInvoiceRepository {
    pub fn new(initial: Vec<Invoice>) -> Self {
        Self {
            invoices: Arc::new(RwLock::new(initial)),
        }
    }

    /// Repository seeded with the demo invoices.
    pub fn with_seed() -> Self {
        Self::new(crate::seed::seed_invoices())
    }
}

#[async_trait::async_trait]
impl InvoiceRepository for MemoryInvoiceRepository {
    async fn list_all(&self) -> Result<Vec<Invoice>> {
        Ok(self.invoices.read().await.clone())
    }

    async fn list_outstanding_for(&self, client: &str) -> Result<Vec<Invoice>> {
        let invoices = self.invoices.read().await;
        Ok(invoices
            .iter()
            .filter(|i| i.status == InvoiceStatus::Outstanding && i.client == client)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_outstanding_filter() {
        let repository = MemoryInvoiceRepository::with_seed();

        let outstanding = repository
            .list_outstanding_for("Acme Solutions Inc.")
            .await
            .unwrap();

        // inv-001 is outstanding; inv-004 is paid.
        assert_eq!(outstanding.len(), 1);
        assert_eq!(outstanding[0].id, "inv-001");
    }
}
