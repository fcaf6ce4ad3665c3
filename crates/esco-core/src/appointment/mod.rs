//! Appointment domain module.

mod model;
mod repository;

pub use model::{Appointment, AppointmentStatus};
pub use repository::AppointmentRepository;
