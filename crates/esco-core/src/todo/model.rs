//! To-do domain model.
//!
//! Firm-internal work items, optionally linked to a CRM client and assigned
//! to a staff member.

use serde::{Deserialize, Serialize};

/// Work item priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Display color token the views render the item with.
    pub fn color(&self) -> &'static str {
        match self {
            Priority::High => "red-500",
            Priority::Medium => "yellow-500",
            Priority::Low => "blue-500",
        }
    }
}

/// A firm to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u32,
    /// CRM client this item relates to; `None` for internal work.
    pub client_id: Option<String>,
    pub task: String,
    pub priority: Priority,
    pub done: bool,
    /// Staff member id the item is assigned to, if any.
    pub assigned_to: Option<String>,
}
