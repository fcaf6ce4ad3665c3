//! Invoice domain module.

mod model;
mod repository;

pub use model::{Invoice, InvoiceStatus};
pub use repository::InvoiceRepository;
