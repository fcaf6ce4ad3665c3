//! Ticket submission error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a ticket submission was rejected.
///
/// These are returned as values from `submit`, never thrown into the UI
/// layer; each maps to an inline human-readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketError {
    /// No session exists yet.
    #[error("Authentication required.")]
    AuthRequired,

    /// Anonymous identities may never write.
    #[error("Please register or log in to submit a ticket.")]
    AnonymousNotAllowed,

    /// The underlying persistence call failed. Already logged at the call
    /// site; the caller may re-submit explicitly (there is no retry policy).
    #[error("Failed to submit ticket: {0}")]
    Persistence(String),
}
