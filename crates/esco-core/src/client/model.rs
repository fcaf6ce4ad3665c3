//! Client (CRM) domain model.

use serde::{Deserialize, Serialize};

/// Engagement status of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Inactive,
}

/// A firm client as tracked in the CRM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// CRM identifier in the form `client-{n}`.
    pub id: String,
    pub contact_person: String,
    /// Company name, or a marker like `N/A (Individual)` for individuals.
    pub company_name: String,
    pub status: ClientStatus,
    pub email: String,
    pub phone: String,
    pub personal_address: String,
    pub company_address: String,
    /// Staff member id this client is assigned to, if any.
    pub assigned_to: Option<String>,
}

/// Fields supplied when creating a client; id and status are assigned by
/// the repository layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub contact_person: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub personal_address: String,
    pub company_address: String,
    pub assigned_to: Option<String>,
}
