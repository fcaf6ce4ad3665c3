//! Invoice domain model.

use serde::{Deserialize, Serialize};

/// Payment status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Outstanding,
    Paid,
}

/// A billed invoice as shown on the dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Identifier in the form `inv-{nnn}`.
    pub id: String,
    /// Display name of the billed client.
    pub client: String,
    /// Display date, e.g. `10/20/2024`.
    pub date: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}
