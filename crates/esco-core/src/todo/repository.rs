//! To-do repository trait.

use super::model::TodoItem;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for firm to-do items.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Finds a to-do item by its ID.
    async fn find_by_id(&self, todo_id: u32) -> Result<Option<TodoItem>>;

    /// Saves an item, inserting or replacing by id. New items are
    /// prepended so they list first.
    async fn save(&self, item: &TodoItem) -> Result<()>;

    /// Lists all items in display order.
    async fn list_all(&self) -> Result<Vec<TodoItem>>;

    /// Allocates the next numeric id above the current maximum.
    async fn next_id(&self) -> Result<u32>;
}
