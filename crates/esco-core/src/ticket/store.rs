//! Ticket store trait.
//!
//! Defines the interface to the per-identity ticket collections. The store
//! is the one durable collection in the portal; everything else lives in
//! mock in-memory repositories.

use super::model::{SupportTicket, TicketDraft};
use crate::error::Result;
use crate::subscription::SubscriptionGuard;
use async_trait::async_trait;
use std::sync::Arc;

/// Callback invoked with a full, consistent snapshot of one collection.
///
/// Emissions are complete replacements; consumers must not assume deltas.
pub type SnapshotListener = Arc<dyn Fn(Vec<SupportTicket>) + Send + Sync>;

/// An abstract store of per-identity ticket collections.
///
/// Paths come from [`crate::PortalConfig::ticket_collection_path`] so one
/// identity can never address another's collection.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Registers a snapshot listener on a collection.
    ///
    /// The listener receives the current snapshot immediately and a fresh
    /// full snapshot on every subsequent change. The returned guard owns
    /// the registration; after cancellation a late delivery is a silent
    /// no-op.
    fn subscribe(&self, path: &str, listener: SnapshotListener) -> SubscriptionGuard;

    /// Appends a new ticket to a collection.
    ///
    /// The store assigns the id and the creation timestamp; the draft never
    /// carries either.
    ///
    /// # Returns
    ///
    /// The assigned document id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PortalError::Persistence`] when the write fails.
    async fn append(&self, path: &str, draft: TicketDraft) -> Result<String>;
}
