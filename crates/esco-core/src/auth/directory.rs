//! The portal's mock credential directory.
//!
//! The hosted portal ships with two demo credential pairs; any other pair is
//! rejected without touching session or role. A credential check is pure
//! data validation with no provider round trip.

use super::role::Role;

/// One credential pair and the role it unlocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalCredential {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

/// The built-in demo credentials.
pub const PORTAL_CREDENTIALS: &[PortalCredential] = &[
    PortalCredential {
        email: "client@esco.cpa",
        password: "password",
        role: Role::Client,
    },
    PortalCredential {
        email: "admin@esco.cpa",
        password: "staffpass",
        role: Role::Admin,
    },
];

/// Static directory of portal credentials.
#[derive(Debug, Clone, Default)]
pub struct MockDirectory;

impl MockDirectory {
    pub fn new() -> Self {
        Self
    }

    /// Verifies a credential pair for the requested role.
    ///
    /// All three of email, password, and requested role must match a
    /// directory entry. `Role::Anonymous` never matches: there is nothing
    /// to log in to.
    pub fn verify(&self, email: &str, password: &str, requested_role: Role) -> bool {
        PORTAL_CREDENTIALS.iter().any(|c| {
            c.role == requested_role && c.email == email && c.password == password
        })
    }
}
