//! Loan management: borrowing, returning, what is out and what is late

use chrono::Days;

use super::Library;
use crate::{
    error::{AppError, AppResult, StateViolation},
    models::{Book, BorrowedBook, Loan, LoanReceipt, ReturnReceipt},
};

impl Library {
    /// Lend a book to a member.
    ///
    /// Checks, in order: book exists, member exists, book is available,
    /// member is under the loan limit.
    pub fn borrow_book(&mut self, isbn: &str, member_id: &str) -> AppResult<LoanReceipt> {
        let today = self.today();
        let max_books = self.loans.max_books_per_member;
        let term_days = self.loans.max_borrow_days;

        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;
        let member = self
            .members
            .get_mut(member_id)
            .ok_or_else(|| AppError::MemberNotFound(member_id.to_string()))?;

        if !book.is_available() {
            tracing::warn!("Loan rejected: ISBN {} is already borrowed", isbn);
            return Err(AppError::InvalidState(StateViolation::AlreadyBorrowed));
        }

        if member.loan_count() >= max_books {
            tracing::warn!(
                "Loan rejected: member {} holds {}/{} books",
                member_id,
                member.loan_count(),
                max_books
            );
            return Err(AppError::LimitExceeded {
                current: member.loan_count(),
                max: max_books,
            });
        }

        let due_date = today
            .checked_add_days(Days::new(u64::from(term_days)))
            .ok_or(AppError::LoanTermOutOfRange { term_days })?;

        book.loan = Some(Loan {
            member_id: member_id.to_string(),
            borrow_date: today,
            due_date,
        });
        member.hold(isbn);
        self.save();

        tracing::info!("Loan: ISBN {} to member {}, due {}", isbn, member_id, due_date);
        Ok(LoanReceipt {
            isbn: isbn.to_string(),
            member_id: member_id.to_string(),
            borrow_date: today,
            due_date,
        })
    }

    /// Take a book back, reporting how many days late it is
    pub fn return_book(&mut self, isbn: &str) -> AppResult<ReturnReceipt> {
        let today = self.today();

        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;
        let Some(loan) = book.loan.take() else {
            tracing::warn!("Return rejected: ISBN {} is not borrowed", isbn);
            return Err(AppError::InvalidState(StateViolation::NotBorrowed));
        };

        let overdue_days = loan.overdue_days(today);
        if let Some(days) = overdue_days {
            tracing::info!("ISBN {} returned {} days overdue", isbn, days);
        }

        // A missing holder must not block the return
        match self.members.get_mut(&loan.member_id) {
            Some(member) => {
                member.release(isbn);
            }
            None => tracing::warn!(
                "Return of ISBN {}: holder {} no longer registered",
                isbn,
                loan.member_id
            ),
        }
        self.save();

        tracing::info!("Return: ISBN {} from member {}", isbn, loan.member_id);
        Ok(ReturnReceipt {
            isbn: isbn.to_string(),
            member_id: loan.member_id,
            overdue_days,
        })
    }

    /// Books currently lent out
    pub fn list_borrowed(&self) -> Vec<Book> {
        self.books
            .values()
            .filter(|book| !book.is_available())
            .cloned()
            .collect()
    }

    /// Lent-out books past their due date
    pub fn list_overdue(&self) -> Vec<Book> {
        let today = self.today();
        self.books
            .values()
            .filter(|book| book.is_overdue(today))
            .cloned()
            .collect()
    }

    /// Lent-out books with holder name and lateness
    pub fn borrowed_details(&self) -> Vec<BorrowedBook> {
        let today = self.today();
        self.books
            .values()
            .filter_map(|book| {
                let loan = book.loan.as_ref()?;
                Some(BorrowedBook {
                    holder_name: self.members.get(&loan.member_id).map(|m| m.name.clone()),
                    due_date: loan.due_date,
                    overdue_days: loan.overdue_days(today),
                    book: book.clone(),
                })
            })
            .collect()
    }

    pub fn overdue_details(&self) -> Vec<BorrowedBook> {
        self.borrowed_details()
            .into_iter()
            .filter(BorrowedBook::is_overdue)
            .collect()
    }
}
