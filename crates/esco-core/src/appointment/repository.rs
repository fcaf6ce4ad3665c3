//! Appointment repository trait.

use super::model::Appointment;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for scheduled appointments.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Saves an appointment, inserting or replacing by id.
    async fn save(&self, appointment: &Appointment) -> Result<()>;

    /// Lists all appointments ascending by date.
    async fn list_all(&self) -> Result<Vec<Appointment>>;

    /// Allocates the next numeric id above the current maximum.
    async fn next_id(&self) -> Result<u32>;
}
