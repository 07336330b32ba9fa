//! Performance and payroll board
//!
//! Local employee records mutated by manager actions. Payment and
//! review transitions stamp dates per the model rules; edits go through
//! a dialog session committed into the local list.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::{ConsoleError, ConsoleResult};
use crate::notify::Notifier;
use crate::session::EditSession;
use crate::view::ListView;
use shared::Capabilities;
use shared::models::{Employee, PaymentStatus, ReviewStatus};

/// Board-level payroll summary
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PayrollSummary {
    pub pending_payments: usize,
    pub overdue_reviews: usize,
    pub total_net_pay: f64,
}

/// Performance/payroll screen state
pub struct PerformanceSection {
    caps: Capabilities,
    notifier: Arc<dyn Notifier>,
    pub list: ListView<Employee>,
    editing: Option<EditSession<Employee>>,
}

impl PerformanceSection {
    pub fn new(caps: Capabilities, notifier: Arc<dyn Notifier>, page_size: u32) -> Self {
        Self {
            caps,
            notifier,
            list: ListView::new(page_size),
            editing: None,
        }
    }

    /// Update an employee's payment status (paying stamps the pay date)
    pub fn set_payment_status(
        &mut self,
        id: &str,
        status: PaymentStatus,
        today: NaiveDate,
    ) -> ConsoleResult<()> {
        if !self.caps.manage_payroll {
            return Err(ConsoleError::Forbidden("update payment status"));
        }
        let employee = self.find(id)?;
        employee.set_payment_status(status, today);
        if status == PaymentStatus::Paid {
            self.notifier.success(&format!("Payment recorded for {id}"));
        }
        Ok(())
    }

    /// Update an employee's review status (completion stamps the review
    /// date and schedules the next one)
    pub fn set_review_status(
        &mut self,
        id: &str,
        status: ReviewStatus,
        today: NaiveDate,
    ) -> ConsoleResult<()> {
        if !self.caps.manage_payroll {
            return Err(ConsoleError::Forbidden("update review status"));
        }
        let employee = self.find(id)?;
        employee.set_review_status(status, today);
        Ok(())
    }

    pub fn summary(&self) -> PayrollSummary {
        let mut summary = PayrollSummary::default();
        for employee in self.list.items() {
            if employee.payment_status == PaymentStatus::Pending {
                summary.pending_payments += 1;
            }
            if employee.review_status == ReviewStatus::Overdue {
                summary.overdue_reviews += 1;
            }
            summary.total_net_pay += employee.net_pay;
        }
        summary
    }

    // ── Edit dialog ─────────────────────────────────────────────────

    pub fn begin_edit(&mut self, id: &str) -> ConsoleResult<()> {
        let employee = self
            .list
            .items()
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| ConsoleError::NotFound(format!("employee {id}")))?;
        self.editing = Some(EditSession::open(employee));
        Ok(())
    }

    pub fn edit_draft(&mut self, f: impl FnOnce(&mut Employee)) -> bool {
        self.editing.as_mut().is_some_and(|session| session.edit(f))
    }

    pub fn draft(&self) -> Option<&Employee> {
        self.editing.as_ref().and_then(EditSession::draft)
    }

    pub fn dialog_open(&self) -> bool {
        self.editing.as_ref().is_some_and(EditSession::is_open)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Commit the open draft into the board
    pub fn save_edit(&mut self) -> ConsoleResult<Employee> {
        if !self.caps.manage_payroll {
            return Err(ConsoleError::Forbidden("update employee"));
        }
        let session = self
            .editing
            .as_mut()
            .ok_or_else(|| ConsoleError::Validation("no employee edit in progress".into()))?;
        let saved = session.save_local(self.list.items_mut())?;
        self.editing = None;
        Ok(saved)
    }

    fn find(&mut self, id: &str) -> ConsoleResult<&mut Employee> {
        self.list
            .items_mut()
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ConsoleError::NotFound(format!("employee {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::BufferNotifier;
    use shared::Role;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn employee(id: &str, payment: PaymentStatus, review: ReviewStatus) -> Employee {
        Employee {
            id: id.to_string(),
            name: "Sarah Chen".into(),
            position: "Barista".into(),
            hourly_rate: 16.5,
            hours_worked: 40.0,
            gross_pay: 660.0,
            net_pay: 528.0,
            payment_status: payment,
            last_pay_date: None,
            performance_score: 4.2,
            review_status: review,
            last_review_date: None,
            review_due_date: None,
        }
    }

    fn board(caps: Capabilities) -> PerformanceSection {
        let mut section = PerformanceSection::new(caps, Arc::new(BufferNotifier::new()), 10);
        section.list.set_items(vec![
            employee("EMP-001", PaymentStatus::Pending, ReviewStatus::Overdue),
            employee("EMP-002", PaymentStatus::Paid, ReviewStatus::Completed),
        ]);
        section
    }

    #[test]
    fn test_pay_stamps_date_and_updates_summary() {
        let mut section = board(Capabilities::for_role(Role::Manager));
        assert_eq!(section.summary().pending_payments, 1);

        section
            .set_payment_status("EMP-001", PaymentStatus::Paid, date("2024-08-20"))
            .unwrap();
        let emp = &section.list.items()[0];
        assert_eq!(emp.last_pay_date, Some(date("2024-08-20")));
        assert_eq!(section.summary().pending_payments, 0);
    }

    #[test]
    fn test_review_completion_schedules_next() {
        let mut section = board(Capabilities::for_role(Role::Manager));
        section
            .set_review_status("EMP-001", ReviewStatus::Completed, date("2024-08-20"))
            .unwrap();
        let emp = &section.list.items()[0];
        assert_eq!(emp.review_due_date, Some(date("2024-11-18")));
        assert_eq!(section.summary().overdue_reviews, 0);
    }

    #[test]
    fn test_non_manager_is_refused() {
        let mut section = board(Capabilities::for_role(Role::FrontDesk));
        let err = section
            .set_payment_status("EMP-001", PaymentStatus::Paid, date("2024-08-20"))
            .unwrap_err();
        assert!(matches!(err, ConsoleError::Forbidden(_)));
        assert_eq!(section.list.items()[0].payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn test_edit_dialog_commits_locally() {
        let mut section = board(Capabilities::for_role(Role::Manager));
        section.begin_edit("EMP-002").unwrap();
        section.edit_draft(|draft| draft.hours_worked = 38.0);
        // Board untouched while the dialog is open
        assert_eq!(section.list.items()[1].hours_worked, 40.0);

        section.save_edit().unwrap();
        assert_eq!(section.list.items()[1].hours_worked, 38.0);
        assert!(!section.dialog_open());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut section = board(Capabilities::for_role(Role::Manager));
        section.begin_edit("EMP-001").unwrap();
        section.edit_draft(|draft| draft.performance_score = 1.0);
        section.cancel_edit();
        assert_eq!(section.list.items()[0].performance_score, 4.2);
        assert!(!section.dialog_open());
    }
}
