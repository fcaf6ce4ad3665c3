//! In-memory staff repository.

use esco_core::error::Result;
use esco_core::staff::{StaffMember, StaffRepository};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A [`StaffRepository`] over an in-memory list.
#[derive(Clone)]
pub struct MemoryStaffRepository {
    staff: Arc<RwLock<Vec<StaffMember>>>,
}

impl MemoryStaffRepository {
    pub fn new(initial: Vec<StaffMember>) -> Self {
        Self {
            staff: Arc::new(RwLock::new(initial)),
        }
    }

    /// Repository seeded with the firm's staff roster.
    pub fn with_seed() -> Self {
        Self::new(crate::seed::seed_staff())
    }
}

#[async_trait::async_trait]
impl StaffRepository for MemoryStaffRepository {
    async fn find_by_id(&self, staff_id: &str) -> Result<Option<StaffMember>> {
        let staff = self.staff.read().await;
        Ok(staff.iter().find(|m| m.id == staff_id).cloned())
    }

    async fn save(&self, member: &StaffMember) -> Result<()> {
        let mut staff = self.staff.write().await;
        if let Some(existing) = staff.iter_mut().find(|m| m.id == member.id) {
            *existing = member.clone();
        } else {
            staff.push(member.clone());
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<StaffMember>> {
        Ok(self.staff.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esco_core::staff::StaffStatus;

    #[tokio::test]
    async fn test_seeded_roster() {
        let repository = MemoryStaffRepository::with_seed();
        let all = repository.list_all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|m| m.status == StaffStatus::Active));
    }

    #[tokio::test]
    async fn test_save_replaces_by_id() {
        let repository = MemoryStaffRepository::with_seed();
        let mut member = repository.find_by_id("cynthia").await.unwrap().unwrap();
        member.status = StaffStatus::Inactive;

        repository.save(&member).await.unwrap();

        let reloaded = repository.find_by_id("cynthia").await.unwrap().unwrap();
        assert_eq!(reloaded.status, StaffStatus::Inactive);
        assert_eq!(repository.list_all().await.unwrap().len(), 3);
    }
}
