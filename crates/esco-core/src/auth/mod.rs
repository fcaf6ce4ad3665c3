//! Authentication domain module.
//!
//! This module contains the session model, role derivation, the identity
//! provider interface, and the portal's mock credential directory.
//!
//! # Module Structure
//!
//! - `session`: the resolved identity (`Session`)
//! - `role`: role derivation and the atomic session+role pair (`AuthContext`)
//! - `provider`: backend auth service interface (`IdentityProvider`)
//! - `directory`: the demo credential directory (`MockDirectory`)

mod directory;
mod provider;
mod role;
mod session;

// Re-export public API
pub use directory::{MockDirectory, PORTAL_CREDENTIALS, PortalCredential};
pub use provider::{IdentityListener, IdentityProvider};
pub use role::{AuthContext, Role, resolve_role};
pub use session::Session;
