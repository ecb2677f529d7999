//! Loan (borrow) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lending state of a borrowed book.
///
/// A book either carries a complete loan or none at all, so holder, borrow
/// date and due date are always set or cleared together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub member_id: String,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl Loan {
    /// Overdue means strictly after the due date; the due date itself is fine.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        today > self.due_date
    }

    /// Whole days past the due date, if any
    pub fn overdue_days(&self, today: NaiveDate) -> Option<i64> {
        self.is_overdue(today)
            .then(|| (today - self.due_date).num_days())
    }
}

/// Returned to the caller of a successful borrow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanReceipt {
    pub isbn: String,
    pub member_id: String,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Returned to the caller of a successful return
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnReceipt {
    pub isbn: String,
    /// Member the book was lent to
    pub member_id: String,
    /// Strictly positive when the book came back late
    pub overdue_days: Option<i64>,
}
