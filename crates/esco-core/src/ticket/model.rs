//! Support ticket domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Lifecycle status of a support ticket.
///
/// Clients only ever create tickets in `New`; the later states are set by
/// firm staff out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    New,
    InProgress,
    Closed,
}

/// A client-submitted support request, append-only, owned by one identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTicket {
    /// Store-assigned document id.
    pub id: String,
    pub subject: String,
    pub description: String,
    pub status: TicketStatus,
    /// Server-assigned creation time. `None` while the assignment is still
    /// pending on the backend.
    pub created_at: Option<DateTime<Utc>>,
}

/// The fields a client supplies when submitting a ticket.
///
/// `id` and `created_at` are deliberately absent: both are assigned by the
/// store, never by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDraft {
    pub subject: String,
    pub description: String,
}

impl TicketDraft {
    pub fn new(subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            description: description.into(),
        }
    }
}

/// Sorts a snapshot by creation time, newest first, pending timestamps last.
///
/// Every emission of the live sequence is a complete replacement sorted with
/// this rule; consumers never see incremental deltas.
pub fn sort_snapshot(tickets: &mut [SupportTicket]) {
    tickets.sort_by(|a, b| match (&b.created_at, &a.created_at) {
        (Some(b_at), Some(a_at)) => b_at.cmp(a_at),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ticket(id: &str, created_at: Option<DateTime<Utc>>) -> SupportTicket {
        SupportTicket {
            id: id.to_string(),
            subject: "subject".to_string(),
            description: "description".to_string(),
            status: TicketStatus::New,
            created_at,
        }
    }

    #[test]
    fn test_sort_newest_first_pending_last() {
        let t1 = Utc.with_ymd_and_hms(2024, 11, 20, 9, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 11, 25, 9, 0, 0).unwrap();
        let mut tickets = vec![
            ticket("older", Some(t1)),
            ticket("pending", None),
            ticket("newer", Some(t2)),
        ];

        sort_snapshot(&mut tickets);

        let ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["newer", "older", "pending"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut tickets = vec![ticket("a", None), ticket("b", None)];
        sort_snapshot(&mut tickets);
        let ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
