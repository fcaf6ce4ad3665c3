//! Cancellable listener registrations.
//!
//! Both long-lived subscriptions in the portal (identity changes and ticket
//! snapshots) hand the caller a [`SubscriptionGuard`]. Cancelling the guard,
//! or dropping it, unregisters the listener; a callback that was already in
//! flight observes the cancelled flag and becomes a silent no-op. This
//! replaces ad hoc mounted-flag bookkeeping with an explicit lifecycle.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Guard for a registered listener.
///
/// The guard owns the registration: `cancel` runs the unregister action
/// exactly once, and dropping the guard cancels implicitly. Cancellation is
/// idempotent and safe to race with a delivery in flight.
pub struct SubscriptionGuard {
    cancelled: Arc<AtomicBool>,
    unregister: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl SubscriptionGuard {
    /// Creates a guard around a shared cancelled flag and an unregister action.
    ///
    /// The flag is shared with the listener registry so deliveries can check
    /// it before touching any state.
    pub fn new(cancelled: Arc<AtomicBool>, unregister: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancelled,
            unregister: Mutex::new(Some(Box::new(unregister))),
        }
    }

    /// Cancels the registration. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        let action = self.unregister.lock().expect("guard lock poisoned").take();
        if let Some(action) = action {
            action();
        }
    }

    /// Returns true once the guard has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for SubscriptionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionGuard")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
