//! In-memory ticket store.
//!
//! Stands in for the hosted document store: per-path append-only
//! collections with server-assigned ids and timestamps, and snapshot
//! listeners that receive a full re-sorted snapshot on every change.

use chrono::Utc;
use esco_core::error::{PortalError, Result};
use esco_core::subscription::SubscriptionGuard;
use esco_core::ticket::{
    SnapshotListener, SupportTicket, TicketDraft, TicketStatus, TicketStore, sort_snapshot,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

struct RegisteredListener {
    path: String,
    cancelled: Arc<AtomicBool>,
    listener: SnapshotListener,
}

/// An in-memory [`TicketStore`].
pub struct MemoryTicketStore {
    collections: Mutex<HashMap<String, Vec<SupportTicket>>>,
    listeners: Arc<Mutex<HashMap<u64, RegisteredListener>>>,
    next_listener_id: AtomicU64,
    fail_appends: AtomicBool,
}

impl MemoryTicketStore {
    pub fn new() -> Self {
        Self {
            collections: Mutex::new(HashMap::new()),
            listeners: Arc::new(Mutex::new(HashMap::new())),
            next_listener_id: AtomicU64::new(0),
            fail_appends: AtomicBool::new(false),
        }
    }

    /// Makes subsequent appends fail, for exercising the persistence error
    /// path.
    pub fn set_fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }

    /// The current sorted snapshot of one collection.
    pub fn snapshot(&self, path: &str) -> Vec<SupportTicket> {
        let collections = self.collections.lock().expect("collection lock poisoned");
        let mut snapshot = collections.get(path).cloned().unwrap_or_default();
        sort_snapshot(&mut snapshot);
        snapshot
    }

    fn notify(&self, path: &str) {
        let snapshot = self.snapshot(path);
        // Collect under the lock, invoke outside it.
        let callbacks: Vec<SnapshotListener> = {
            let mut listeners = self.listeners.lock().expect("listener lock poisoned");
            listeners.retain(|_, l| !l.cancelled.load(Ordering::SeqCst));
            listeners
                .values()
                .filter(|l| l.path == path)
                .map(|l| l.listener.clone())
                .collect()
        };
        for callback in callbacks {
            callback(snapshot.clone());
        }
    }
}

impl Default for MemoryTicketStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TicketStore for MemoryTicketStore {
    fn subscribe(&self, path: &str, listener: SnapshotListener) -> SubscriptionGuard {
        let id = self.next_listener_id.fetch_add(1, Ordering::SeqCst);
        let cancelled = Arc::new(AtomicBool::new(false));
        self.listeners
            .lock()
            .expect("listener lock poisoned")
            .insert(
                id,
                RegisteredListener {
                    path: path.to_string(),
                    cancelled: cancelled.clone(),
                    listener: listener.clone(),
                },
            );

        // Initial full snapshot so subscribers never start empty-handed.
        listener(self.snapshot(path));

        let registry = Arc::clone(&self.listeners);
        SubscriptionGuard::new(cancelled, move || {
            registry.lock().expect("listener lock poisoned").remove(&id);
        })
    }

    async fn append(&self, path: &str, draft: TicketDraft) -> Result<String> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(PortalError::persistence("ticket store rejected the write"));
        }

        let ticket = SupportTicket {
            id: format!("tkt-{}", Uuid::new_v4()),
            subject: draft.subject,
            description: draft.description,
            status: TicketStatus::New,
            created_at: Some(Utc::now()),
        };
        let ticket_id = ticket.id.clone();

        {
            let mut collections = self.collections.lock().expect("collection lock poisoned");
            collections.entry(path.to_string()).or_default().push(ticket);
        }
        tracing::debug!("[MemoryTicketStore] Appended {} to {}", ticket_id, path);
        self.notify(path);

        Ok(ticket_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collecting_listener() -> (SnapshotListener, Arc<Mutex<Vec<Vec<SupportTicket>>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let listener: SnapshotListener = Arc::new(move |snapshot| {
            sink.lock().unwrap().push(snapshot);
        });
        (listener, seen)
    }

    #[tokio::test]
    async fn test_append_assigns_id_status_and_timestamp() {
        let store = MemoryTicketStore::new();

        let id = store
            .append("users/u1/tickets", TicketDraft::new("subject", "description"))
            .await
            .unwrap();

        let snapshot = store.snapshot("users/u1/tickets");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, id);
        assert_eq!(snapshot[0].status, TicketStatus::New);
        assert!(snapshot[0].created_at.is_some());
    }

    #[tokio::test]
    async fn test_subscribe_delivers_initial_and_subsequent_snapshots() {
        let store = MemoryTicketStore::new();
        let (listener, seen) = collecting_listener();
        let _guard = store.subscribe("users/u1/tickets", listener);

        store
            .append("users/u1/tickets", TicketDraft::new("a", "b"))
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].is_empty());
        assert_eq!(seen[1].len(), 1);
    }

    #[tokio::test]
    async fn test_collections_are_isolated_per_path() {
        let store = MemoryTicketStore::new();
        let (listener, seen) = collecting_listener();
        let _guard = store.subscribe("users/u1/tickets", listener);

        store
            .append("users/u2/tickets", TicketDraft::new("a", "b"))
            .await
            .unwrap();

        // Only the initial (empty) snapshot; u2's write is invisible here.
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert!(store.snapshot("users/u1/tickets").is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_listener_receives_nothing_further() {
        let store = MemoryTicketStore::new();
        let (listener, seen) = collecting_listener();
        let guard = store.subscribe("users/u1/tickets", listener);
        guard.cancel();

        store
            .append("users/u1/tickets", TicketDraft::new("a", "b"))
            .await
            .unwrap();

        assert_eq!(seen.lock().unwrap().len(), 1); // initial only
    }

    #[tokio::test]
    async fn test_fail_appends_surfaces_persistence_error() {
        let store = MemoryTicketStore::new();
        store.set_fail_appends(true);

        let err = store
            .append("users/u1/tickets", TicketDraft::new("a", "b"))
            .await
            .unwrap_err();

        assert!(err.is_persistence());
        assert!(store.snapshot("users/u1/tickets").is_empty());
    }
}
