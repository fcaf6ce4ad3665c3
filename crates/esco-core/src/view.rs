//! Application view routing.
//!
//! Maps `(is_authenticated, role)` to one of four mutually exclusive
//! top-level views. This gating decides what the UI renders, nothing more:
//! it runs entirely on an untrusted client, so a real deployment must
//! enforce equivalent checks server-side at the persistence layer.

use crate::auth::Role;
use serde::{Deserialize, Serialize};

/// Top-level application view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// The public marketing site. The default, and the sign-out target.
    Home,
    /// The portal access (login) page.
    Login,
    /// The client portal.
    Portal,
    /// The staff/admin portal.
    Admin,
}

impl View {
    /// Whether a role may see this view's content.
    ///
    /// A denied view renders an access placeholder with a link back to
    /// login; it is a UX convenience, not a security boundary.
    pub fn can_access(&self, role: Role) -> bool {
        match self {
            View::Home | View::Login => true,
            View::Portal => role == Role::Client,
            View::Admin => role == Role::Admin,
        }
    }

    /// The view a role lands on after a successful login.
    pub fn landing_for(role: Role) -> View {
        match role {
            Role::Anonymous => View::Home,
            Role::Client => View::Portal,
            Role::Admin => View::Admin,
        }
    }
}

impl Default for View {
    fn default() -> Self {
        View::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_views_open_to_all() {
        for role in [Role::Anonymous, Role::Client, Role::Admin] {
            assert!(View::Home.can_access(role));
            assert!(View::Login.can_access(role));
        }
    }

    #[test]
    fn test_portal_requires_client() {
        assert!(View::Portal.can_access(Role::Client));
        assert!(!View::Portal.can_access(Role::Anonymous));
        assert!(!View::Portal.can_access(Role::Admin));
    }

    #[test]
    fn test_admin_requires_admin() {
        assert!(View::Admin.can_access(Role::Admin));
        assert!(!View::Admin.can_access(Role::Client));
        assert!(!View::Admin.can_access(Role::Anonymous));
    }

    #[test]
    fn test_landing_views() {
        assert_eq!(View::landing_for(Role::Client), View::Portal);
        assert_eq!(View::landing_for(Role::Admin), View::Admin);
        assert_eq!(View::landing_for(Role::Anonymous), View::Home);
    }
}
