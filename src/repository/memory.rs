//! In-memory storage for tests and throwaway sessions

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{BookMap, MemberMap, Snapshot, Storage};
use crate::error::StorageError;

/// Keeps the last saved snapshot in memory. Clones share the same contents,
/// so a library reopened from a clone sees what the previous one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    saved: Rc<RefCell<Snapshot>>,
    saves: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated storage
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            saved: Rc::new(RefCell::new(snapshot)),
            saves: Rc::new(Cell::new(0)),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.saved.borrow().clone()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Snapshot {
        self.snapshot()
    }

    fn save(&self, books: &BookMap, members: &MemberMap) -> Result<(), StorageError> {
        *self.saved.borrow_mut() = Snapshot {
            books: books.clone(),
            members: members.clone(),
        };
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
