//! In-memory identity provider.
//!
//! Stands in for the hosted auth backend: anonymous sessions, exchange of
//! pre-provisioned tokens registered at construction, sign-out, and
//! synchronous identity-change notifications delivered on the caller's
//! event loop.

use esco_core::auth::{IdentityListener, IdentityProvider, Session};
use esco_core::error::{PortalError, Result};
use esco_core::subscription::SubscriptionGuard;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

struct RegisteredListener {
    cancelled: Arc<AtomicBool>,
    listener: IdentityListener,
}

/// An in-memory [`IdentityProvider`].
///
/// Holds the current identity and a listener registry. Listeners receive
/// the current identity immediately at subscribe time and on every
/// sign-in/sign-out afterwards; a cancelled registration is pruned on the
/// next notification and never invoked again.
pub struct MemoryIdentityProvider {
    current: Mutex<Option<Session>>,
    listeners: Arc<Mutex<HashMap<u64, RegisteredListener>>>,
    next_listener_id: AtomicU64,
    /// Pre-provisioned tokens accepted by `exchange_token`, token → email.
    tokens: HashMap<String, String>,
    /// Simulates a misconfigured/unreachable backend.
    unreachable: bool,
}

impl MemoryIdentityProvider {
    /// Creates a provider with no registered tokens.
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
            listeners: Arc::new(Mutex::new(HashMap::new())),
            next_listener_id: AtomicU64::new(0),
            tokens: HashMap::new(),
            unreachable: false,
        }
    }

    /// Creates a provider that rejects every request, for exercising the
    /// degraded (logged-out) startup path.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::new()
        }
    }

    /// Registers a token accepted by [`exchange_token`](IdentityProvider::exchange_token).
    pub fn with_token(mut self, token: impl Into<String>, email: impl Into<String>) -> Self {
        self.tokens.insert(token.into(), email.into());
        self
    }

    /// The identity the provider currently holds.
    pub fn current_identity(&self) -> Option<Session> {
        self.current.lock().expect("identity lock poisoned").clone()
    }

    fn install(&self, session: Session) -> Session {
        *self.current.lock().expect("identity lock poisoned") = Some(session.clone());
        self.notify(Some(session.clone()));
        session
    }

    fn notify(&self, identity: Option<Session>) {
        // Collect under the lock, invoke outside it.
        let callbacks: Vec<IdentityListener> = {
            let mut listeners = self.listeners.lock().expect("listener lock poisoned");
            listeners.retain(|_, l| !l.cancelled.load(Ordering::SeqCst));
            listeners.values().map(|l| l.listener.clone()).collect()
        };
        for callback in callbacks {
            callback(identity.clone());
        }
    }
}

impl Default for MemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn exchange_token(&self, token: &str) -> Result<Session> {
        if self.unreachable {
            return Err(PortalError::initialization("identity provider unreachable"));
        }
        let email = self
            .tokens
            .get(token)
            .ok_or_else(|| PortalError::auth("token not recognized"))?;

        let session = Session::registered(format!("user-{}", Uuid::new_v4()), email);
        tracing::debug!(
            "[MemoryIdentityProvider] Token exchanged for {}",
            session.identity_id
        );
        Ok(self.install(session))
    }

    async fn sign_in_anonymously(&self) -> Result<Session> {
        if self.unreachable {
            return Err(PortalError::initialization("identity provider unreachable"));
        }
        let session = Session::anonymous(format!("anon-{}", Uuid::new_v4()));
        tracing::debug!(
            "[MemoryIdentityProvider] Anonymous sign-in as {}",
            session.identity_id
        );
        Ok(self.install(session))
    }

    async fn sign_out(&self) -> Result<()> {
        if self.unreachable {
            return Err(PortalError::sign_out("identity provider unreachable"));
        }
        *self.current.lock().expect("identity lock poisoned") = None;
        self.notify(None);
        Ok(())
    }

    fn subscribe_identity_changes(&self, listener: IdentityListener) -> SubscriptionGuard {
        let id = self.next_listener_id.fetch_add(1, Ordering::SeqCst);
        let cancelled = Arc::new(AtomicBool::new(false));
        self.listeners
            .lock()
            .expect("listener lock poisoned")
            .insert(
                id,
                RegisteredListener {
                    cancelled: cancelled.clone(),
                    listener: listener.clone(),
                },
            );

        // Late subscribers converge on the current identity immediately.
        listener(self.current_identity());

        let registry = Arc::clone(&self.listeners);
        SubscriptionGuard::new(cancelled, move || {
            registry.lock().expect("listener lock poisoned").remove(&id);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_listener() -> (IdentityListener, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let listener: IdentityListener = Arc::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (listener, count)
    }

    #[tokio::test]
    async fn test_anonymous_sign_in_notifies() {
        let provider = MemoryIdentityProvider::new();
        let (listener, count) = counting_listener();
        let _guard = provider.subscribe_identity_changes(listener);
        assert_eq!(count.load(Ordering::SeqCst), 1); // initial delivery

        let session = provider.sign_in_anonymously().await.unwrap();

        assert!(session.is_anonymous);
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(provider.current_identity(), Some(session));
    }

    #[tokio::test]
    async fn test_token_exchange() {
        let provider =
            MemoryIdentityProvider::new().with_token("prov-token", "alice@acmesolutions.com");

        let session = provider.exchange_token("prov-token").await.unwrap();
        assert!(!session.is_anonymous);
        assert_eq!(
            session.display_email.as_deref(),
            Some("alice@acmesolutions.com")
        );

        let err = provider.exchange_token("bogus").await.unwrap_err();
        assert!(matches!(err, PortalError::Auth(_)));
    }

    #[tokio::test]
    async fn test_sign_out_clears_and_notifies_none() {
        let provider = MemoryIdentityProvider::new();
        provider.sign_in_anonymously().await.unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _guard = provider.subscribe_identity_changes(Arc::new(move |identity| {
            sink.lock().unwrap().push(identity.is_some());
        }));

        provider.sign_out().await.unwrap();

        assert_eq!(provider.current_identity(), None);
        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_cancelled_listener_not_invoked() {
        let provider = MemoryIdentityProvider::new();
        let (listener, count) = counting_listener();
        let guard = provider.subscribe_identity_changes(listener);
        guard.cancel();

        provider.sign_in_anonymously().await.unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 1); // only the initial delivery
    }

    #[tokio::test]
    async fn test_unreachable_provider_rejects_everything() {
        let provider = MemoryIdentityProvider::unreachable();
        assert!(provider.sign_in_anonymously().await.unwrap_err().is_initialization());
        assert!(provider.exchange_token("t").await.unwrap_err().is_initialization());
        assert!(matches!(
            provider.sign_out().await.unwrap_err(),
            PortalError::SignOut(_)
        ));
    }
}
