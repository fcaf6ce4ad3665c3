//! Application layer of the Esco CPA portal core.
//!
//! Use cases orchestrating the domain traits: session resolution and role
//! routing ([`AuthUseCase`]), the live support ticket channel
//! ([`TicketUseCase`]), and the firm CRM operations ([`CrmUseCase`]).

pub mod auth_usecase;
pub mod crm_usecase;
pub mod ticket_usecase;

pub use auth_usecase::AuthUseCase;
pub use crm_usecase::CrmUseCase;
pub use ticket_usecase::TicketUseCase;
