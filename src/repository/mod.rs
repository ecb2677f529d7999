//! Persistence layer: durable storage of the catalog and member registry

pub mod books;
mod file;
pub mod members;
pub mod memory;

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::{
    config::StorageConfig,
    error::StorageError,
    models::{Book, Member},
};

pub use memory::MemoryStorage;

/// Books keyed by ISBN
pub type BookMap = IndexMap<String, Book>;
/// Members keyed by member ID
pub type MemberMap = IndexMap<String, Member>;

/// Everything the library keeps between runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub books: BookMap,
    pub members: MemberMap,
}

/// Durable storage for a library.
///
/// `load` never fails: missing or unreadable data yields empty maps.
#[cfg_attr(test, mockall::automock)]
pub trait Storage {
    fn load(&self) -> Snapshot;
    fn save(&self, books: &BookMap, members: &MemberMap) -> Result<(), StorageError>;
}

/// Two independent JSON documents on disk, one per map
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    books: books::BooksFile,
    members: members::MembersFile,
}

impl JsonFileStorage {
    pub fn new(books_path: impl Into<PathBuf>, members_path: impl Into<PathBuf>) -> Self {
        Self {
            books: books::BooksFile::new(books_path),
            members: members::MembersFile::new(members_path),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.books_path(), config.members_path())
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Snapshot {
        let books = match self.books.load() {
            Ok(Some(books)) => books,
            Ok(None) => {
                tracing::info!("No existing book data found. Starting with empty library.");
                BookMap::new()
            }
            Err(e) => {
                tracing::warn!("Book data unreadable, starting with empty library: {}", e);
                BookMap::new()
            }
        };

        let members = match self.members.load() {
            Ok(Some(members)) => members,
            Ok(None) => {
                tracing::info!("No existing member data found. Starting with empty member list.");
                MemberMap::new()
            }
            Err(e) => {
                tracing::warn!("Member data unreadable, starting with empty member list: {}", e);
                MemberMap::new()
            }
        };

        Snapshot { books, members }
    }

    /// Writes both stores even if the first one fails; the first error is returned.
    fn save(&self, books: &BookMap, members: &MemberMap) -> Result<(), StorageError> {
        let books_result = self.books.save(books);
        let members_result = self.members.save(members);

        match (books_result, members_result) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
            (Err(books_err), Err(members_err)) => {
                tracing::error!("Error saving member data: {}", members_err);
                Err(books_err)
            }
        }
    }
}
