//! Read-only views computed from the catalog and member registry

use chrono::NaiveDate;
use serde::Serialize;

use super::book::Book;

/// Library-wide counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LibraryReport {
    pub total_books: usize,
    pub total_members: usize,
    pub available_books: usize,
    pub borrowed_books: usize,
    pub overdue_books: usize,
}

impl std::fmt::Display for LibraryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total Books: {}", self.total_books)?;
        writeln!(f, "Total Members: {}", self.total_members)?;
        writeln!(f, "Available Books: {}", self.available_books)?;
        writeln!(f, "Borrowed Books: {}", self.borrowed_books)?;
        write!(f, "Overdue Books: {}", self.overdue_books)
    }
}

/// A lent-out book together with what a loan desk needs to show about it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorrowedBook {
    pub book: Book,
    /// `None` when the holder's member record no longer exists
    pub holder_name: Option<String>,
    pub due_date: NaiveDate,
    pub overdue_days: Option<i64>,
}

impl BorrowedBook {
    pub fn is_overdue(&self) -> bool {
        self.overdue_days.is_some()
    }
}
