//! Staff domain module.

mod model;
mod repository;

pub use model::{StaffMember, StaffStatus};
pub use repository::StaffRepository;
