//! Portal configuration supplied by the embedder at startup.

use serde::{Deserialize, Serialize};

/// Build/deploy-time configuration for the portal core.
///
/// The embedding application resolves these values from its environment and
/// hands them over before [`initialize`](crate::auth::IdentityProvider) is
/// driven. The portal core never reads the environment itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Application identifier used to namespace per-user collections.
    pub app_id: String,
    /// Backend project identifier (opaque to the portal core).
    pub project_id: String,
    /// Pre-provisioned auth token to exchange at startup, if any.
    /// When absent or rejected, startup falls back to an anonymous session.
    #[serde(default)]
    pub initial_auth_token: Option<String>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            app_id: "default-app-id".to_string(),
            project_id: "esco-cpa".to_string(),
            initial_auth_token: None,
        }
    }
}

impl PortalConfig {
    /// Returns the private ticket collection path for an identity.
    ///
    /// Collections are namespaced per application and per user so one
    /// identity can never observe another's tickets.
    pub fn ticket_collection_path(&self, identity_id: &str) -> String {
        format!("artifacts/{}/users/{}/tickets", self.app_id, identity_id)
    }
}
