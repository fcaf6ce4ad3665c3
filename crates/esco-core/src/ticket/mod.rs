//! Support ticket domain module.
//!
//! # Module Structure
//!
//! - `model`: ticket entity, draft payload, and the snapshot ordering rule
//! - `store`: store interface for the per-identity collections
//! - `error`: the submission error taxonomy

mod error;
mod model;
mod store;

// Re-export public API
pub use error::TicketError;
pub use model::{SupportTicket, TicketDraft, TicketStatus, sort_snapshot};
pub use store::{SnapshotListener, TicketStore};
