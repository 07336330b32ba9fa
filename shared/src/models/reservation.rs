//! Reservation model
//!
//! Reservations move through a fixed transition set; anything outside it
//! is rejected.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Seated,
    Completed,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    /// Whether `self -> to` is in the allowed transition set:
    /// pending -> confirmed | cancelled,
    /// confirmed -> seated | cancelled | no-show,
    /// seated -> completed.
    pub fn can_transition(self, to: ReservationStatus) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, to),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, Seated)
                | (Confirmed, Cancelled)
                | (Confirmed, NoShow)
                | (Seated, Completed)
        )
    }

    /// Completed, cancelled, and no-show reservations never change again
    pub fn is_terminal(self) -> bool {
        use ReservationStatus::*;
        matches!(self, Completed | Cancelled | NoShow)
    }
}

/// Rejected status transition
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid reservation transition: {from:?} -> {to:?}")]
pub struct TransitionError {
    pub from: ReservationStatus,
    pub to: ReservationStatus,
}

/// A table reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub party_size: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub table_preference: Option<String>,
    pub status: ReservationStatus,
    pub notes: Option<String>,
}

impl Reservation {
    /// Move the reservation to a new status, enforcing the transition set
    pub fn transition(&mut self, to: ReservationStatus) -> Result<(), TransitionError> {
        if !self.status.can_transition(to) {
            return Err(TransitionError {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(status: ReservationStatus) -> Reservation {
        Reservation {
            id: "RES-001".to_string(),
            customer_name: "Alice Johnson".to_string(),
            customer_phone: Some("+1555123456".to_string()),
            party_size: 4,
            date: "2024-08-21".parse().unwrap(),
            time: "18:30:00".parse().unwrap(),
            duration_minutes: 90,
            table_preference: Some("window".to_string()),
            status,
            notes: None,
        }
    }

    #[test]
    fn test_happy_path() {
        let mut res = reservation(ReservationStatus::Pending);
        res.transition(ReservationStatus::Confirmed).unwrap();
        res.transition(ReservationStatus::Seated).unwrap();
        res.transition(ReservationStatus::Completed).unwrap();
        assert!(res.status.is_terminal());
    }

    #[test]
    fn test_exact_edge_set() {
        use ReservationStatus::*;
        let all = [Pending, Confirmed, Seated, Completed, Cancelled, NoShow];
        let allowed = [
            (Pending, Confirmed),
            (Pending, Cancelled),
            (Confirmed, Seated),
            (Confirmed, Cancelled),
            (Confirmed, NoShow),
            (Seated, Completed),
        ];
        for from in all {
            for to in all {
                assert_eq!(
                    from.can_transition(to),
                    allowed.contains(&(from, to)),
                    "unexpected verdict for {from:?} -> {to:?}"
                );
            }
        }
    }

    #[test]
    fn test_rejected_transition_leaves_status() {
        let mut res = reservation(ReservationStatus::Seated);
        let err = res.transition(ReservationStatus::Cancelled).unwrap_err();
        assert_eq!(err.from, ReservationStatus::Seated);
        assert_eq!(res.status, ReservationStatus::Seated);
    }
}
