//! Employee payroll and performance model
//!
//! Payroll and review fields are mutated independently by manager
//! actions. The only coupling is the date stamping on specific status
//! transitions.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days until the next review once one completes
const REVIEW_CYCLE_DAYS: u64 = 90;

/// Payroll payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Paid,
}

/// Performance review status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewStatus {
    Pending,
    Completed,
    Overdue,
}

/// An employee as shown on the performance/payroll board
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub position: String,
    pub hourly_rate: f64,
    pub hours_worked: f64,
    pub gross_pay: f64,
    pub net_pay: f64,
    pub payment_status: PaymentStatus,
    pub last_pay_date: Option<NaiveDate>,
    pub performance_score: f64,
    pub review_status: ReviewStatus,
    pub last_review_date: Option<NaiveDate>,
    pub review_due_date: Option<NaiveDate>,
}

impl Employee {
    /// Update the payment status. Moving to `Paid` stamps the pay date;
    /// every other transition leaves the date untouched.
    pub fn set_payment_status(&mut self, status: PaymentStatus, today: NaiveDate) {
        self.payment_status = status;
        if status == PaymentStatus::Paid {
            self.last_pay_date = Some(today);
        }
    }

    /// Update the review status. Completing a review stamps the review
    /// date and schedules the next one a cycle out; other transitions
    /// leave both dates untouched.
    pub fn set_review_status(&mut self, status: ReviewStatus, today: NaiveDate) {
        self.review_status = status;
        if status == ReviewStatus::Completed {
            self.last_review_date = Some(today);
            self.review_due_date = today.checked_add_days(Days::new(REVIEW_CYCLE_DAYS));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn employee() -> Employee {
        Employee {
            id: "EMP-001".to_string(),
            name: "Sarah Chen".to_string(),
            position: "Barista".to_string(),
            hourly_rate: 16.5,
            hours_worked: 40.0,
            gross_pay: 660.0,
            net_pay: 528.0,
            payment_status: PaymentStatus::Pending,
            last_pay_date: Some(date("2024-07-15")),
            performance_score: 4.2,
            review_status: ReviewStatus::Pending,
            last_review_date: None,
            review_due_date: Some(date("2024-08-01")),
        }
    }

    #[test]
    fn test_paid_stamps_pay_date() {
        let mut emp = employee();
        emp.set_payment_status(PaymentStatus::Paid, date("2024-08-20"));
        assert_eq!(emp.payment_status, PaymentStatus::Paid);
        assert_eq!(emp.last_pay_date, Some(date("2024-08-20")));
    }

    #[test]
    fn test_processing_keeps_old_pay_date() {
        let mut emp = employee();
        emp.set_payment_status(PaymentStatus::Processing, date("2024-08-20"));
        assert_eq!(emp.last_pay_date, Some(date("2024-07-15")));
    }

    #[test]
    fn test_completed_review_stamps_and_schedules() {
        let mut emp = employee();
        emp.set_review_status(ReviewStatus::Completed, date("2024-08-20"));
        assert_eq!(emp.last_review_date, Some(date("2024-08-20")));
        assert_eq!(emp.review_due_date, Some(date("2024-11-18")));
    }

    #[test]
    fn test_overdue_keeps_dates() {
        let mut emp = employee();
        emp.set_review_status(ReviewStatus::Overdue, date("2024-08-20"));
        assert_eq!(emp.last_review_date, None);
        assert_eq!(emp.review_due_date, Some(date("2024-08-01")));
    }
}
