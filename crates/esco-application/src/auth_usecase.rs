//! Session resolution and role routing.
//!
//! `AuthUseCase` owns the one authenticated identity for the process
//! lifetime: it performs exactly one authentication action at startup (token
//! exchange with a silent anonymous fallback), tracks identity-change
//! notifications from the provider, applies the mock credential logins, and
//! exposes the resulting [`AuthContext`] and routed [`View`] as watch
//! channels for the embedding UI and the ticket channel to observe.

use esco_core::PortalConfig;
use esco_core::auth::{AuthContext, IdentityListener, IdentityProvider, MockDirectory, Role, Session};
use esco_core::error::{PortalError, Result};
use esco_core::subscription::SubscriptionGuard;
use esco_core::view::View;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use uuid::Uuid;

/// Shared resolver state, referenced from the identity-change listener.
struct AuthShared {
    context_tx: watch::Sender<AuthContext>,
    view_tx: watch::Sender<View>,
    ready: AtomicBool,
}

impl AuthShared {
    /// Replaces the context wholesale from an identity notification.
    ///
    /// Any sticky role from a previous credential login ends here: the new
    /// session alone decides the role.
    fn apply_identity(&self, identity: Option<Session>) {
        let context = AuthContext::from_identity(identity);
        tracing::debug!(
            "[AuthUseCase] Identity change: session={}, role={}",
            context.has_session(),
            context.role
        );
        self.context_tx.send_replace(context);
        self.ready.store(true, Ordering::SeqCst);
    }

    fn mark_ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
    }
}

/// Use case for session resolution and role-gated view routing.
///
/// # Thread Safety
///
/// All state is published through `watch` channels and replaced atomically;
/// the resolver itself is driven from the embedder's event loop.
pub struct AuthUseCase {
    /// Backend auth service
    provider: Arc<dyn IdentityProvider>,
    /// Demo credential directory for the mock portal logins
    directory: MockDirectory,
    /// Build/deploy-time configuration (pre-provisioned token)
    config: PortalConfig,
    shared: Arc<AuthShared>,
    /// Identity-change registration; present between initialize and teardown
    identity_guard: Mutex<Option<SubscriptionGuard>>,
}

impl AuthUseCase {
    /// Creates a new `AuthUseCase` over an identity provider.
    pub fn new(provider: Arc<dyn IdentityProvider>, config: PortalConfig) -> Self {
        let (context_tx, _) = watch::channel(AuthContext::signed_out());
        let (view_tx, _) = watch::channel(View::default());
        Self {
            provider,
            directory: MockDirectory::new(),
            config,
            shared: Arc::new(AuthShared {
                context_tx,
                view_tx,
                ready: AtomicBool::new(false),
            }),
            identity_guard: Mutex::new(None),
        }
    }

    /// Establishes the startup identity.
    ///
    /// Subscribes to identity changes, then performs exactly one
    /// authentication action: exchange the pre-provisioned token when one
    /// is configured, falling back to an anonymous session when the
    /// exchange fails or no token exists. The fallback is a silent,
    /// expected path and never surfaces an error.
    ///
    /// Provider failures are logged and leave the resolver in a usable
    /// logged-out state; `is_auth_ready` becomes true regardless, so
    /// dependent UI renders instead of hanging. No timeout is applied to
    /// the sign-in call itself.
    pub async fn initialize(&self) {
        let shared = Arc::clone(&self.shared);
        let listener: IdentityListener = Arc::new(move |identity| shared.apply_identity(identity));
        let guard = self.provider.subscribe_identity_changes(listener);
        *self.identity_guard.lock().expect("identity guard lock poisoned") = Some(guard);

        let outcome = match self.config.initial_auth_token.as_deref() {
            Some(token) => match self.provider.exchange_token(token).await {
                Ok(session) => Ok(session),
                Err(err) => {
                    tracing::warn!(
                        "[AuthUseCase] Token sign-in failed, falling back to anonymous: {}",
                        err
                    );
                    self.provider.sign_in_anonymously().await
                }
            },
            None => self.provider.sign_in_anonymously().await,
        };

        if let Err(err) = outcome {
            tracing::error!("[AuthUseCase] Identity provider initialization failed: {}", err);
        }
        self.shared.mark_ready();
    }

    /// Applies a mock credential login.
    ///
    /// All three of email, password, and requested role must match the
    /// portal directory. Success installs a registered session with the
    /// requested role (sticky until the next identity change or sign-out)
    /// and routes to that role's landing view. Failure returns
    /// [`PortalError::InvalidCredentials`] and changes nothing.
    ///
    /// The login is local: the provider's backing identity (usually the
    /// anonymous startup session) is left in place, exactly as the hosted
    /// demo behaves.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::InvalidCredentials`] for any non-matching
    /// pair, including `Role::Anonymous` requests.
    pub fn login_with_credentials(
        &self,
        email: &str,
        password: &str,
        requested_role: Role,
    ) -> Result<()> {
        if requested_role == Role::Anonymous
            || !self.directory.verify(email, password, requested_role)
        {
            tracing::warn!("[AuthUseCase] Rejected credential login for {}", email);
            return Err(PortalError::InvalidCredentials);
        }

        let identity_id = format!("mock-{}-{}", requested_role.slug(), Uuid::new_v4());
        let session = Session::registered(identity_id, email);
        tracing::info!(
            "[AuthUseCase] Credential login: {} as {}",
            email,
            requested_role
        );
        self.shared
            .context_tx
            .send_replace(AuthContext::with_explicit_role(session, requested_role));
        self.shared
            .view_tx
            .send_replace(View::landing_for(requested_role));
        Ok(())
    }

    /// Signs the current identity out.
    ///
    /// A sign-out with no session is a no-op. On provider success the
    /// session is cleared, the role resets to `Anonymous`, and the view
    /// returns to `Home`. On provider failure the error is logged and
    /// returned, and local state is left untouched - there is no partial
    /// sign-out.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::SignOut`] when the provider rejects the
    /// request.
    pub async fn sign_out(&self) -> Result<()> {
        if !self.context().has_session() {
            return Ok(());
        }

        match self.provider.sign_out().await {
            Ok(()) => {
                self.shared.context_tx.send_replace(AuthContext::signed_out());
                self.shared.view_tx.send_replace(View::Home);
                tracing::info!("[AuthUseCase] Signed out");
                Ok(())
            }
            Err(err) => {
                tracing::error!("[AuthUseCase] Logout failed: {}", err);
                Err(err)
            }
        }
    }

    /// Cancels the identity-change subscription.
    ///
    /// Idempotent: safe to call repeatedly and safe to call before
    /// [`initialize`](Self::initialize) has completed. A notification
    /// racing the teardown is a silent no-op.
    pub fn teardown(&self) {
        if let Some(guard) = self
            .identity_guard
            .lock()
            .expect("identity guard lock poisoned")
            .take()
        {
            guard.cancel();
        }
    }

    /// Navigates to a view. Access gating stays with
    /// [`View::can_access`]; navigation itself is unrestricted, and a
    /// denied view renders as an access placeholder.
    pub fn navigate(&self, view: View) {
        self.shared.view_tx.send_replace(view);
    }

    /// The current context snapshot.
    pub fn context(&self) -> AuthContext {
        self.shared.context_tx.borrow().clone()
    }

    /// Watches context replacements.
    pub fn watch_context(&self) -> watch::Receiver<AuthContext> {
        self.shared.context_tx.subscribe()
    }

    /// The current view.
    pub fn current_view(&self) -> View {
        *self.shared.view_tx.borrow()
    }

    /// Watches view changes.
    pub fn watch_view(&self) -> watch::Receiver<View> {
        self.shared.view_tx.subscribe()
    }

    /// True once the startup authentication action has completed, in
    /// success or failure.
    pub fn is_auth_ready(&self) -> bool {
        self.shared.ready.load(Ordering::SeqCst)
    }
}

impl Drop for AuthUseCase {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::AtomicUsize;

    /// Provider that fails every call, for the degraded-startup path.
    struct FailingProvider;

    #[async_trait::async_trait]
    impl IdentityProvider for FailingProvider {
        async fn exchange_token(&self, _token: &str) -> Result<Session> {
            Err(PortalError::initialization("provider unreachable"))
        }

        async fn sign_in_anonymously(&self) -> Result<Session> {
            Err(PortalError::initialization("provider unreachable"))
        }

        async fn sign_out(&self) -> Result<()> {
            Err(PortalError::sign_out("provider unreachable"))
        }

        fn subscribe_identity_changes(&self, _listener: IdentityListener) -> SubscriptionGuard {
            SubscriptionGuard::new(Arc::new(AtomicBool::new(false)), || {})
        }
    }

    /// Provider recording sign-out calls; identity changes are pushed by
    /// the test through the captured listener.
    #[derive(Default)]
    struct RecordingProvider {
        listener: StdMutex<Option<IdentityListener>>,
        sign_outs: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl IdentityProvider for RecordingProvider {
        async fn exchange_token(&self, _token: &str) -> Result<Session> {
            Err(PortalError::auth("unknown token"))
        }

        async fn sign_in_anonymously(&self) -> Result<Session> {
            let session = Session::anonymous("anon-test");
            if let Some(listener) = self.listener.lock().unwrap().clone() {
                listener(Some(session.clone()));
            }
            Ok(session)
        }

        async fn sign_out(&self) -> Result<()> {
            self.sign_outs.fetch_add(1, Ordering::SeqCst);
            if let Some(listener) = self.listener.lock().unwrap().clone() {
                listener(None);
            }
            Ok(())
        }

        fn subscribe_identity_changes(&self, listener: IdentityListener) -> SubscriptionGuard {
            *self.listener.lock().unwrap() = Some(listener);
            SubscriptionGuard::new(Arc::new(AtomicBool::new(false)), || {})
        }
    }

    #[tokio::test]
    async fn test_startup_without_token_ends_anonymous() {
        let auth = AuthUseCase::new(
            Arc::new(RecordingProvider::default()),
            PortalConfig::default(),
        );

        auth.initialize().await;

        let context = auth.context();
        assert!(auth.is_auth_ready());
        assert_eq!(context.role, Role::Anonymous);
        assert!(context.session.unwrap().is_anonymous);
    }

    #[tokio::test]
    async fn test_ready_even_when_provider_fails() {
        let auth = AuthUseCase::new(Arc::new(FailingProvider), PortalConfig::default());

        auth.initialize().await;

        assert!(auth.is_auth_ready());
        assert!(auth.context().session.is_none());
        assert_eq!(auth.context().role, Role::Anonymous);
    }

    #[tokio::test]
    async fn test_token_failure_falls_back_to_anonymous() {
        let config = PortalConfig {
            initial_auth_token: Some("expired-token".to_string()),
            ..PortalConfig::default()
        };
        let auth = AuthUseCase::new(Arc::new(RecordingProvider::default()), config);

        auth.initialize().await;

        // The rejected token never surfaces; the session is anonymous.
        assert!(auth.is_auth_ready());
        assert_eq!(auth.context().role, Role::Anonymous);
        assert!(auth.context().has_session());
    }

    #[tokio::test]
    async fn test_admin_login_routes_to_admin_view() {
        let auth = AuthUseCase::new(
            Arc::new(RecordingProvider::default()),
            PortalConfig::default(),
        );
        auth.initialize().await;

        auth.login_with_credentials("admin@esco.cpa", "staffpass", Role::Admin)
            .unwrap();

        let context = auth.context();
        assert_eq!(context.role, Role::Admin);
        assert!(context.is_registered());
        assert_eq!(auth.current_view(), View::Admin);
    }

    #[tokio::test]
    async fn test_client_login_routes_to_portal_view() {
        let auth = AuthUseCase::new(
            Arc::new(RecordingProvider::default()),
            PortalConfig::default(),
        );
        auth.initialize().await;

        auth.login_with_credentials("client@esco.cpa", "password", Role::Client)
            .unwrap();

        assert_eq!(auth.context().role, Role::Client);
        assert_eq!(auth.current_view(), View::Portal);
    }

    #[tokio::test]
    async fn test_bad_credentials_leave_state_unchanged() {
        let auth = AuthUseCase::new(
            Arc::new(RecordingProvider::default()),
            PortalConfig::default(),
        );
        auth.initialize().await;
        let before = auth.context();

        let err = auth
            .login_with_credentials("admin@esco.cpa", "wrong", Role::Admin)
            .unwrap_err();

        assert!(err.is_invalid_credentials());
        assert_eq!(auth.context(), before);
        assert_eq!(auth.current_view(), View::Home);
    }

    #[tokio::test]
    async fn test_sign_out_without_session_is_noop() {
        let provider = Arc::new(RecordingProvider::default());
        let auth = AuthUseCase::new(provider.clone(), PortalConfig::default());

        auth.sign_out().await.unwrap();

        assert_eq!(provider.sign_outs.load(Ordering::SeqCst), 0);
        assert_eq!(auth.context(), AuthContext::signed_out());
    }

    #[tokio::test]
    async fn test_sign_out_resets_role_and_view() {
        let provider = Arc::new(RecordingProvider::default());
        let auth = AuthUseCase::new(provider.clone(), PortalConfig::default());
        auth.initialize().await;
        auth.login_with_credentials("client@esco.cpa", "password", Role::Client)
            .unwrap();

        auth.sign_out().await.unwrap();

        assert_eq!(provider.sign_outs.load(Ordering::SeqCst), 1);
        assert_eq!(auth.context(), AuthContext::signed_out());
        assert_eq!(auth.current_view(), View::Home);
    }

    #[tokio::test]
    async fn test_sign_out_failure_leaves_state_untouched() {
        // Failing provider, but with a session installed via mock login.
        let auth = AuthUseCase::new(Arc::new(FailingProvider), PortalConfig::default());
        auth.login_with_credentials("client@esco.cpa", "password", Role::Client)
            .unwrap();
        let before = auth.context();

        let err = auth.sign_out().await.unwrap_err();

        assert!(matches!(err, PortalError::SignOut(_)));
        assert_eq!(auth.context(), before);
        assert_eq!(auth.current_view(), View::Portal);
    }

    #[tokio::test]
    async fn test_teardown_is_idempotent_and_safe_before_init() {
        let auth = AuthUseCase::new(
            Arc::new(RecordingProvider::default()),
            PortalConfig::default(),
        );

        // Before initialization.
        auth.teardown();

        auth.initialize().await;
        auth.teardown();
        auth.teardown();
    }

    #[tokio::test]
    async fn test_identity_change_clears_sticky_role() {
        let provider = Arc::new(RecordingProvider::default());
        let auth = AuthUseCase::new(provider.clone(), PortalConfig::default());
        auth.initialize().await;
        auth.login_with_credentials("admin@esco.cpa", "staffpass", Role::Admin)
            .unwrap();
        assert_eq!(auth.context().role, Role::Admin);

        // A fresh identity notification supersedes the login-derived role.
        let listener = provider.listener.lock().unwrap().clone().unwrap();
        listener(Some(Session::registered("uid-9", "someone@esco.cpa")));

        assert_eq!(auth.context().role, Role::Client);
    }
}
