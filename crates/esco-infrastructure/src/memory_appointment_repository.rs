//! In-memory appointment repository.

use esco_core::appointment::{Appointment, AppointmentRepository};
use esco_core::error::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An [`AppointmentRepository`] over an in-memory list kept ascending by
/// date. The `date_time` strings are ISO 8601, so lexical order is
/// chronological order.
#[derive(Clone)]
pub struct MemoryAppointmentRepository {
    appointments: Arc<RwLock<Vec<Appointment>>>,
}

impl MemoryAppointmentRepository {
    pub fn new(initial: Vec<Appointment>) -> Self {
        let mut appointments = initial;
        appointments.sort_by(|a, b| a.date_time.cmp(&b.date_time));
        Self {
            appointments: Arc::new(RwLock::new(appointments)),
        }
    }

    /// Repository seeded with the demo calendar.
    pub fn with_seed() -> Self {
        Self::new(crate::seed::seed_appointments())
    }
}

#[async_trait::async_trait]
impl AppointmentRepository for MemoryAppointmentRepository {
    async fn save(&self, appointment: &Appointment) -> Result<()> {
        let mut appointments = self.appointments.write().await;
        if let Some(existing) = appointments.iter_mut().find(|a| a.id == appointment.id) {
            *existing = appointment.clone();
        } else {
            appointments.push(appointment.clone());
        }
        appointments.sort_by(|a, b| a.date_time.cmp(&b.date_time));
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Appointment>> {
        Ok(self.appointments.read().await.clone())
    }

    async fn next_id(&self) -> Result<u32> {
        let appointments = self.appointments.read().await;
        Ok(appointments.iter().map(|a| a.id).max().unwrap_or(0) + 1)
    }
}
