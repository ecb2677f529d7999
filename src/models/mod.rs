//! Data models for Lendshelf

pub mod book;
pub mod loan;
pub mod member;
pub mod report;

// Re-export commonly used types
pub use book::Book;
pub use loan::{Loan, LoanReceipt, ReturnReceipt};
pub use member::{Member, UpdateMember};
pub use report::{BorrowedBook, LibraryReport};
