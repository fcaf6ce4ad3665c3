//! Appointment domain model.

use serde::{Deserialize, Serialize};

/// Scheduling status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
}

/// A scheduled client appointment.
///
/// `date_time` is an ISO 8601 local timestamp string; the calendar views
/// sort and render it as-is, so lexical order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub date_time: String,
    /// Display text for who the appointment is with.
    pub client_text: String,
    /// Staff member id the appointment is assigned to.
    pub assigned_to: String,
    pub status: AppointmentStatus,
}
