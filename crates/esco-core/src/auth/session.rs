//! Session domain model.
//!
//! A session is the resolved identity of the current user for this process
//! lifetime. It is created once at startup, replaced wholesale on sign-in
//! and sign-out, and never partially mutated.

use serde::{Deserialize, Serialize};

/// The resolved identity of the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identity identifier assigned by the identity provider.
    pub identity_id: String,
    /// Whether this identity was created through the anonymous fallback.
    pub is_anonymous: bool,
    /// Email shown in the UI for registered identities.
    pub display_email: Option<String>,
}

impl Session {
    /// Creates an anonymous session for the given identity id.
    pub fn anonymous(identity_id: impl Into<String>) -> Self {
        Self {
            identity_id: identity_id.into(),
            is_anonymous: true,
            display_email: None,
        }
    }

    /// Creates a registered (non-anonymous) session.
    pub fn registered(identity_id: impl Into<String>, display_email: impl Into<String>) -> Self {
        Self {
            identity_id: identity_id.into(),
            is_anonymous: false,
            display_email: Some(display_email.into()),
        }
    }
}
