//! Invoice repository trait.

use super::model::Invoice;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for billed invoices.
///
/// Invoices are read-only mock data in the portal; there is no write path.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Lists all invoices.
    async fn list_all(&self) -> Result<Vec<Invoice>>;

    /// Lists the outstanding invoices billed to one client, by display name.
    async fn list_outstanding_for(&self, client: &str) -> Result<Vec<Invoice>>;
}
