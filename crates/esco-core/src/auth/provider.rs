//! Identity provider trait.
//!
//! Defines the interface to the backend auth service. The portal core treats
//! the provider as a black box: it can exchange a pre-provisioned token,
//! create anonymous sessions, sign out, and push identity-change
//! notifications to registered listeners.

use super::session::Session;
use crate::error::Result;
use crate::subscription::SubscriptionGuard;
use async_trait::async_trait;
use std::sync::Arc;

/// Callback invoked on every identity change.
///
/// `Some(session)` is the new identity; `None` means signed out. Deliveries
/// run on the caller's event loop, never on a background thread.
pub type IdentityListener = Arc<dyn Fn(Option<Session>) + Send + Sync>;

/// An abstract backend auth service.
///
/// Implementations should notify subscribed listeners on every successful
/// sign-in and sign-out, including an immediate delivery of the current
/// identity at subscribe time so late subscribers converge.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchanges a pre-provisioned token for a registered session.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PortalError::Auth`] when the token is not
    /// recognized, or [`crate::PortalError::Initialization`] when the
    /// provider itself is unavailable.
    async fn exchange_token(&self, token: &str) -> Result<Session>;

    /// Creates an anonymous session.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PortalError::Initialization`] when the provider is
    /// unavailable.
    async fn sign_in_anonymously(&self) -> Result<Session>;

    /// Signs the current identity out.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PortalError::SignOut`] when the provider rejects
    /// the request; callers must leave local state untouched in that case.
    async fn sign_out(&self) -> Result<()>;

    /// Registers an identity-change listener.
    ///
    /// The returned guard owns the registration: cancelling (or dropping)
    /// it stops deliveries, and a delivery racing the cancellation is a
    /// silent no-op.
    fn subscribe_identity_changes(&self, listener: IdentityListener) -> SubscriptionGuard;
}
