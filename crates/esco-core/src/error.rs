//! Error types for the portal core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the portal core.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. Ticket submission has its
/// own narrower taxonomy ([`crate::ticket::TicketError`]) because those
/// failures are returned to the caller as values, never propagated.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum PortalError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Identity provider could not be reached or is misconfigured.
    /// Non-fatal: the resolver degrades to a logged-out state.
    #[error("Identity provider initialization error: {0}")]
    Initialization(String),

    /// Authentication error (token exchange, sign-in)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Credential pair did not match the portal directory
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Sign-out request failed; local state is left untouched
    #[error("Sign-out error: {0}")]
    SignOut(String),

    /// Persistence layer error (ticket store)
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PortalError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an Initialization error
    pub fn initialization(message: impl Into<String>) -> Self {
        Self::Initialization(message.into())
    }

    /// Creates an Auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Creates a SignOut error
    pub fn sign_out(message: impl Into<String>) -> Self {
        Self::SignOut(message.into())
    }

    /// Creates a Persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an Initialization error
    pub fn is_initialization(&self) -> bool {
        matches!(self, Self::Initialization(_))
    }

    /// Check if this is an InvalidCredentials error
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Check if this is a Persistence error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (transitional, used at the application layer)
impl From<anyhow::Error> for PortalError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<String> for PortalError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, PortalError>`.
pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_helper() {
        let err = PortalError::not_found("client", "client-9");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: client 'client-9'");
    }

    #[test]
    fn test_predicates_are_disjoint() {
        let err = PortalError::initialization("provider unreachable");
        assert!(err.is_initialization());
        assert!(!err.is_persistence());
        assert!(!err.is_invalid_credentials());
    }
}
