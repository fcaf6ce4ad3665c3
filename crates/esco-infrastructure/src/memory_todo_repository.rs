//! In-memory to-do repository.

use esco_core::error::Result;
use esco_core::todo::{TodoItem, TodoRepository};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A [`TodoRepository`] over an in-memory list.
#[derive(Clone)]
pub struct MemoryTodoRepository {
    todos: Arc<RwLock<Vec<TodoItem>>>,
}

impl MemoryTodoRepository {
    pub fn new(initial: Vec<TodoItem>) -> Self {
        Self {
            todos: Arc::new(RwLock::new(initial)),
        }
    }

    /// Repository seeded with the demo work items.
    pub fn with_seed() -> Self {
        Self::new(crate::seed::seed_todos())
    }
}

#[async_trait::async_trait]
impl TodoRepository for MemoryTodoRepository {
    async fn find_by_id(&self, todo_id: u32) -> Result<Option<TodoItem>> {
        let todos = self.todos.read().await;
        Ok(todos.iter().find(|t| t.id == todo_id).cloned())
    }

    async fn save(&self, item: &TodoItem) -> Result<()> {
        let mut todos = self.todos.write().await;
        if let Some(existing) = todos.iter_mut().find(|t| t.id == item.id) {
            *existing = item.clone();
        } else {
            // New items list first.
            todos.insert(0, item.clone());
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<TodoItem>> {
        Ok(self.todos.read().await.clone())
    }

    async fn next_id(&self) -> Result<u32> {
        let todos = self.todos.read().await;
        Ok(todos.iter().map(|t| t.id).max().unwrap_or(0) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esco_core::todo::Priority;

    #[tokio::test]
    async fn test_next_id_over_seed() {
        let repository = MemoryTodoRepository::with_seed();
        assert_eq!(repository.next_id().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_new_items_list_first() {
        let repository = MemoryTodoRepository::with_seed();
        let item = TodoItem {
            id: repository.next_id().await.unwrap(),
            client_id: None,
            task: "File extension paperwork".to_string(),
            priority: Priority::Medium,
            done: false,
            assigned_to: None,
        };

        repository.save(&item).await.unwrap();

        let all = repository.list_all().await.unwrap();
        assert_eq!(all[0].id, 5);
        assert_eq!(all.len(), 5);
    }
}
