//! Staff domain model.

use serde::{Deserialize, Serialize};

/// Whether a staff member is currently active at the firm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffStatus {
    Active,
    Inactive,
}

impl StaffStatus {
    /// The other status; used by the admin toggle.
    pub fn toggled(&self) -> Self {
        match self {
            StaffStatus::Active => StaffStatus::Inactive,
            StaffStatus::Inactive => StaffStatus::Active,
        }
    }
}

/// A firm staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    /// Free-text title, e.g. `Power User` or `Staff (Tax)`.
    pub title: String,
    pub email: String,
    pub status: StaffStatus,
}
