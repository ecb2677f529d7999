//! Business logic: the `Library` and its operations.
//!
//! Operations are grouped by concern in submodules, each adding an
//! `impl Library` block. Every mutation runs to completion, including the
//! save, before returning. A failed save is logged and never changes the
//! operation's result.

pub mod catalog;
pub mod loans;
pub mod members;
pub mod stats;

use chrono::NaiveDate;

use crate::{
    clock::{Clock, SystemClock},
    config::{AppConfig, LoansConfig},
    error::AppResult,
    repository::{BookMap, JsonFileStorage, MemberMap, Snapshot, Storage},
};

/// Default loan term in days
pub const MAX_BORROW_DAYS: u32 = 14;
/// Default number of books a member may hold at once
pub const MAX_BOOKS_PER_MEMBER: usize = 5;

/// The catalog, the member registry and the rules binding them
pub struct Library {
    books: BookMap,
    members: MemberMap,
    loans: LoansConfig,
    storage: Box<dyn Storage>,
    clock: Box<dyn Clock>,
}

impl Library {
    /// Load whatever `storage` holds (possibly nothing) and use default loan rules
    pub fn open(storage: Box<dyn Storage>) -> Self {
        let Snapshot { books, members } = storage.load();
        tracing::info!(
            "Library opened with {} books and {} members",
            books.len(),
            members.len()
        );

        Self {
            books,
            members,
            loans: LoansConfig::default(),
            storage,
            clock: Box::new(SystemClock),
        }
    }

    /// Open the JSON stores named by the configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::open(Box::new(JsonFileStorage::from_config(&config.storage)))
            .with_loans(config.loans.clone())
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_loans(mut self, loans: LoansConfig) -> Self {
        self.loans = loans;
        self
    }

    pub fn loan_rules(&self) -> &LoansConfig {
        &self.loans
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Write both maps to storage now, reporting any failure to the caller
    pub fn persist(&self) -> AppResult<()> {
        self.storage.save(&self.books, &self.members)?;
        Ok(())
    }

    /// Save after a mutation; failures are logged only
    fn save(&self) {
        if let Err(e) = self.persist() {
            tracing::error!("Error saving library data: {}", e);
        }
    }
}
