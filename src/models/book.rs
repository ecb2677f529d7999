//! Book (catalog entry) model

use chrono::NaiveDate;
use serde::Serialize;

use super::loan::Loan;

/// A lendable book. Values handed out by the library are detached copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Present while the book is lent out
    pub loan: Option<Loan>,
}

impl Book {
    /// New, available book
    pub fn new(isbn: &str, title: &str, author: &str, genre: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            loan: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.loan.is_none()
    }

    pub fn borrowed_by(&self) -> Option<&str> {
        self.loan.as_ref().map(|l| l.member_id.as_str())
    }

    pub fn borrow_date(&self) -> Option<NaiveDate> {
        self.loan.as_ref().map(|l| l.borrow_date)
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.loan.as_ref().map(|l| l.due_date)
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.loan.as_ref().is_some_and(|l| l.is_overdue(today))
    }

    /// Case-insensitive substring match on title, author, genre or ISBN.
    /// `needle` must already be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.author, &self.genre, &self.isbn]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ISBN: {} | Title: {} | Author: {} | Genre: {} | Status: ",
            self.isbn, self.title, self.author, self.genre
        )?;
        match &self.loan {
            None => write!(f, "Available"),
            Some(loan) => write!(f, "Borrowed by {}", loan.member_id),
        }
    }
}
