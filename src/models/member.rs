//! Member model and related types

use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::Serialize;

/// A registered borrower
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub member_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// ISBNs currently held
    pub borrowed_books: IndexSet<String>,
    pub membership_date: NaiveDate,
}

/// Contact fields a front-end may change; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Member {
    pub fn new(member_id: &str, name: &str, email: &str, phone: &str, joined: NaiveDate) -> Self {
        Self {
            member_id: member_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            borrowed_books: IndexSet::new(),
            membership_date: joined,
        }
    }

    pub fn loan_count(&self) -> usize {
        self.borrowed_books.len()
    }

    pub fn has_loans(&self) -> bool {
        !self.borrowed_books.is_empty()
    }

    /// Returns false if the ISBN was already held
    pub(crate) fn hold(&mut self, isbn: &str) -> bool {
        self.borrowed_books.insert(isbn.to_string())
    }

    pub(crate) fn release(&mut self, isbn: &str) -> bool {
        self.borrowed_books.shift_remove(isbn)
    }

    pub(crate) fn apply(&mut self, update: UpdateMember) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
    }
}

impl std::fmt::Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Email: {} | Phone: {} | Books Borrowed: {} | Member Since: {}",
            self.member_id,
            self.name,
            self.email,
            self.phone,
            self.loan_count(),
            self.membership_date.format("%d-%m-%Y")
        )
    }
}
