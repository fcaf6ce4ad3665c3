//! The support ticket channel.
//!
//! `TicketUseCase` mirrors the caller's private ticket collection into local
//! state: a live, push-based subscription that is only active while the
//! resolved role is `Client`, plus the append-only submit path with its
//! typed rejection taxonomy. Every emission is a complete, freshly sorted
//! replacement of the previous snapshot.

use esco_core::PortalConfig;
use esco_core::auth::{AuthContext, Role};
use esco_core::subscription::SubscriptionGuard;
use esco_core::ticket::{
    SnapshotListener, SupportTicket, TicketDraft, TicketError, TicketStore, sort_snapshot,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// The live store registration for one client identity.
struct ActiveSubscription {
    identity_id: String,
    guard: SubscriptionGuard,
    /// Checked by the snapshot listener itself, so a delivery that races
    /// the cancellation is a no-op even if the store misbehaves.
    closed: Arc<AtomicBool>,
}

impl ActiveSubscription {
    fn cancel(self) {
        self.closed.store(true, Ordering::SeqCst);
        self.guard.cancel();
    }
}

/// Use case for the per-client support ticket channel.
pub struct TicketUseCase {
    /// Backing per-identity ticket collections
    store: Arc<dyn TicketStore>,
    /// Supplies the private collection path per identity
    config: PortalConfig,
    /// Latest full snapshot, replaced wholesale on every emission
    tickets_tx: watch::Sender<Vec<SupportTicket>>,
    active: Mutex<Option<ActiveSubscription>>,
}

impl TicketUseCase {
    /// Creates a new `TicketUseCase` over a ticket store.
    pub fn new(store: Arc<dyn TicketStore>, config: PortalConfig) -> Self {
        let (tickets_tx, _) = watch::channel(Vec::new());
        Self {
            store,
            config,
            tickets_tx,
            active: Mutex::new(None),
        }
    }

    /// Reconciles the subscription with an auth context change.
    ///
    /// The embedder calls this on every [`AuthContext`] replacement. A
    /// context with role `Client` and a session starts (or keeps) the
    /// subscription for that identity; any other context cancels it and
    /// clears the local snapshot. Switching identities resubscribes.
    pub fn apply_auth_context(&self, context: &AuthContext) {
        let client_session = match (&context.session, context.role) {
            (Some(session), Role::Client) => Some(session.clone()),
            _ => None,
        };

        let mut active = self.active.lock().expect("subscription lock poisoned");
        match client_session {
            Some(session) => {
                if active
                    .as_ref()
                    .is_some_and(|a| a.identity_id == session.identity_id)
                {
                    return;
                }
                if let Some(previous) = active.take() {
                    previous.cancel();
                }

                let path = self.config.ticket_collection_path(&session.identity_id);
                let closed = Arc::new(AtomicBool::new(false));
                let closed_in_listener = Arc::clone(&closed);
                let tickets_tx = self.tickets_tx.clone();
                let listener: SnapshotListener = Arc::new(move |mut snapshot| {
                    if closed_in_listener.load(Ordering::SeqCst) {
                        return;
                    }
                    sort_snapshot(&mut snapshot);
                    tickets_tx.send_replace(snapshot);
                });

                tracing::debug!("[TicketUseCase] Subscribing to {}", path);
                let guard = self.store.subscribe(&path, listener);
                *active = Some(ActiveSubscription {
                    identity_id: session.identity_id,
                    guard,
                    closed,
                });
            }
            None => {
                if let Some(previous) = active.take() {
                    tracing::debug!("[TicketUseCase] Cancelling ticket subscription");
                    previous.cancel();
                    self.tickets_tx.send_replace(Vec::new());
                }
            }
        }
    }

    /// Submits a new support ticket for the context's identity.
    ///
    /// The ticket is appended with status `New`; the store assigns the id
    /// and the creation timestamp. There is no retry policy - a failed
    /// submit requires explicit re-submission by the user.
    ///
    /// # Errors
    ///
    /// - [`TicketError::AuthRequired`] when no session exists
    /// - [`TicketError::AnonymousNotAllowed`] for anonymous sessions
    /// - [`TicketError::Persistence`] when the store write fails; the
    ///   failure is logged here and never propagates as a panic
    ///
    /// No write is performed on any of the failure paths.
    pub async fn submit(
        &self,
        context: &AuthContext,
        subject: &str,
        description: &str,
    ) -> std::result::Result<(), TicketError> {
        let Some(session) = &context.session else {
            return Err(TicketError::AuthRequired);
        };
        if session.is_anonymous {
            return Err(TicketError::AnonymousNotAllowed);
        }

        let path = self.config.ticket_collection_path(&session.identity_id);
        match self
            .store
            .append(&path, TicketDraft::new(subject, description))
            .await
        {
            Ok(ticket_id) => {
                tracing::info!("[TicketUseCase] Submitted ticket {}", ticket_id);
                Ok(())
            }
            Err(err) => {
                tracing::error!("[TicketUseCase] Error submitting ticket: {}", err);
                Err(TicketError::Persistence(err.to_string()))
            }
        }
    }

    /// Cancels any live subscription and clears the snapshot.
    ///
    /// Idempotent; called when the owning view unmounts.
    pub fn teardown(&self) {
        if let Some(previous) = self
            .active
            .lock()
            .expect("subscription lock poisoned")
            .take()
        {
            previous.cancel();
            self.tickets_tx.send_replace(Vec::new());
        }
    }

    /// True while a store subscription is live.
    pub fn is_subscribed(&self) -> bool {
        self.active
            .lock()
            .expect("subscription lock poisoned")
            .is_some()
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Vec<SupportTicket> {
        self.tickets_tx.borrow().clone()
    }

    /// Watches snapshot replacements.
    pub fn watch_tickets(&self) -> watch::Receiver<Vec<SupportTicket>> {
        self.tickets_tx.subscribe()
    }
}

impl Drop for TicketUseCase {
    fn drop(&mut self) {
        self.teardown();
    }
}
