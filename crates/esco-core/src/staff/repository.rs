//! Staff repository trait.

use super::model::StaffMember;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for firm staff records.
#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// Finds a staff member by its ID.
    async fn find_by_id(&self, staff_id: &str) -> Result<Option<StaffMember>>;

    /// Saves a staff member, inserting or replacing by id.
    async fn save(&self, member: &StaffMember) -> Result<()>;

    /// Lists all staff members.
    async fn list_all(&self) -> Result<Vec<StaffMember>>;
}
