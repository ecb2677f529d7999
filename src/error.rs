//! Error types for Lendshelf

use std::path::PathBuf;

use thiserror::Error;

/// Stable numeric error codes, one per failure a front-end may want to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    StorageFailure = 3,
    NoSuchMember = 4,
    NoSuchBook = 5,
    BookNotAvailable = 7,
    Duplicate = 8,
    MaxBorrowsReached = 11,
    BookBorrowed = 13,
    BadValue = 18,
    MemberHasBorrowedBooks = 21,
    BookNotBorrowed = 22,
}

/// Broad failure categories shared by every operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    InvalidState,
    LimitExceeded,
    PersistenceFailure,
}

/// Operation incompatible with the current state of a book or member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateViolation {
    #[error("book is currently borrowed")]
    BookOnLoan,
    #[error("member still has borrowed books")]
    MemberHasLoans,
    #[error("book is already borrowed")]
    AlreadyBorrowed,
    #[error("book is not currently borrowed")]
    NotBorrowed,
}

/// Failures of the durable data stores
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data in {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported format version {found} in {} (expected {expected})", .path.display())]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    #[error("Invalid record in {}: {message}", .path.display())]
    InvalidRecord { path: PathBuf, message: String },
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Book with ISBN {0} not found")]
    BookNotFound(String),

    #[error("Member with ID {0} not found")]
    MemberNotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid state: {0}")]
    InvalidState(StateViolation),

    #[error("Maximum borrowing limit reached ({current}/{max})")]
    LimitExceeded { current: usize, max: usize },

    #[error("Loan term of {term_days} days puts the due date out of range")]
    LoanTermOutOfRange { term_days: u32 },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::BookNotFound(_) | AppError::MemberNotFound(_) => ErrorKind::NotFound,
            AppError::Conflict(_) => ErrorKind::Conflict,
            AppError::InvalidState(_) | AppError::LoanTermOutOfRange { .. } => {
                ErrorKind::InvalidState
            }
            AppError::LimitExceeded { .. } => ErrorKind::LimitExceeded,
            AppError::Storage(_) => ErrorKind::PersistenceFailure,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::BookNotFound(_) => ErrorCode::NoSuchBook,
            AppError::MemberNotFound(_) => ErrorCode::NoSuchMember,
            AppError::Conflict(_) => ErrorCode::Duplicate,
            AppError::InvalidState(StateViolation::BookOnLoan) => ErrorCode::BookBorrowed,
            AppError::InvalidState(StateViolation::MemberHasLoans) => {
                ErrorCode::MemberHasBorrowedBooks
            }
            AppError::InvalidState(StateViolation::AlreadyBorrowed) => ErrorCode::BookNotAvailable,
            AppError::InvalidState(StateViolation::NotBorrowed) => ErrorCode::BookNotBorrowed,
            AppError::LimitExceeded { .. } => ErrorCode::MaxBorrowsReached,
            AppError::LoanTermOutOfRange { .. } => ErrorCode::BadValue,
            AppError::Storage(_) => ErrorCode::StorageFailure,
        }
    }
}

/// Result type alias for library operations
pub type AppResult<T> = Result<T, AppError>;
