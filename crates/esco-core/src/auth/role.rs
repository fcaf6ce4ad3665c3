//! Role derivation and the authenticated context.
//!
//! Role is never stored on its own: it is always a pure function of the
//! latest [`Session`] and the most recent explicit login action. The
//! [`AuthContext`] struct is the single place both live, with constructors
//! that encode the allowed transitions.

use super::session::Session;
use serde::{Deserialize, Serialize};

/// Access role governing which view and data a user may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// No identity, or an identity created through the anonymous fallback.
    Anonymous,
    /// A registered portal client.
    Client,
    /// Firm staff with access to the admin portal.
    Admin,
}

impl Role {
    /// Short slug used when minting mock identity ids.
    pub fn slug(&self) -> &'static str {
        match self {
            Role::Anonymous => "anonymous",
            Role::Client => "client",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Derives the role for a session and an optional sticky login role.
///
/// An explicit role from a successful credential login wins. Otherwise a
/// missing or anonymous session is `Anonymous`, and any authenticated,
/// unclassified identity defaults to `Client`.
///
/// The `Client` default mirrors the hosted portal's demo behavior and is a
/// placeholder, not an authorization model: a real deployment needs a
/// server-side role claim and persistence-layer enforcement.
pub fn resolve_role(session: Option<&Session>, explicit: Option<Role>) -> Role {
    if let Some(role) = explicit {
        return role;
    }
    match session {
        None => Role::Anonymous,
        Some(s) if s.is_anonymous => Role::Anonymous,
        Some(_) => Role::Client,
    }
}

/// The current session and its derived role, replaced atomically as a unit.
///
/// Keeping both in one value removes the ambiguity between "role from the
/// last login action" and "role from the session": every transition goes
/// through one of the constructors below, so the pair can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// The resolved identity, if any.
    pub session: Option<Session>,
    /// Role derived from the session and the last explicit login action.
    pub role: Role,
}

impl AuthContext {
    /// The signed-out state: no session, `Anonymous` role.
    pub fn signed_out() -> Self {
        Self {
            session: None,
            role: Role::Anonymous,
        }
    }

    /// Context for an identity-change notification, with no explicit role
    /// on record.
    pub fn from_identity(session: Option<Session>) -> Self {
        let role = resolve_role(session.as_ref(), None);
        Self { session, role }
    }

    /// Context for a successful credential login: the explicit role is
    /// sticky until the next identity change or sign-out.
    pub fn with_explicit_role(session: Session, role: Role) -> Self {
        Self {
            session: Some(session),
            role,
        }
    }

    /// True when a session exists, anonymous or not.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// True when a registered (non-anonymous) session exists.
    pub fn is_registered(&self) -> bool {
        self.session.as_ref().is_some_and(|s| !s.is_anonymous)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::signed_out()
    }
}
