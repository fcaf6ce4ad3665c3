//! Infrastructure layer of the Esco CPA portal core.
//!
//! In-memory implementations of the domain traits: the identity provider,
//! the per-identity ticket store, and the seeded firm repositories.

pub mod identity_provider;
pub mod memory_appointment_repository;
pub mod memory_client_repository;
pub mod memory_invoice_repository;
pub mod memory_staff_repository;
pub mod memory_todo_repository;
pub mod seed;
pub mod ticket_store;

pub use identity_provider::MemoryIdentityProvider;
pub use memory_appointment_repository::MemoryAppointmentRepository;
pub use memory_client_repository::MemoryClientRepository;
pub use memory_invoice_repository::MemoryInvoiceRepository;
pub use memory_staff_repository::MemoryStaffRepository;
pub use memory_todo_repository::MemoryTodoRepository;
pub use ticket_store::MemoryTicketStore;
