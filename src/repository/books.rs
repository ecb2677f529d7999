//! Book catalog store

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::file::{read_document, write_document, FORMAT_VERSION};
use super::BookMap;
use crate::{
    error::StorageError,
    models::{Book, Loan},
};

/// On-disk shape of a book. Loan fields are flat and null while available.
#[derive(Debug, Serialize, Deserialize)]
struct BookRecord {
    isbn: String,
    title: String,
    author: String,
    genre: String,
    available: bool,
    #[serde(default)]
    borrowed_by: Option<String>,
    #[serde(default)]
    borrow_date: Option<NaiveDate>,
    #[serde(default)]
    due_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
struct BooksDocument {
    version: u32,
    books: Vec<BookRecord>,
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            available: book.is_available(),
            borrowed_by: book.borrowed_by().map(str::to_string),
            borrow_date: book.borrow_date(),
            due_date: book.due_date(),
        }
    }
}

impl TryFrom<BookRecord> for Book {
    type Error = String;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        let BookRecord {
            isbn,
            title,
            author,
            genre,
            available,
            borrowed_by,
            borrow_date,
            due_date,
        } = record;

        let loan = match (available, borrowed_by, borrow_date, due_date) {
            (true, None, None, None) => None,
            (false, Some(member_id), Some(borrow_date), Some(due_date)) => Some(Loan {
                member_id,
                borrow_date,
                due_date,
            }),
            _ => return Err(format!("book {} has inconsistent loan fields", isbn)),
        };

        Ok(Book {
            isbn,
            title,
            author,
            genre,
            loan,
        })
    }
}

#[derive(Debug, Clone)]
pub struct BooksFile {
    path: PathBuf,
}

impl BooksFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog; `Ok(None)` when no catalog was saved yet
    pub fn load(&self) -> Result<Option<BookMap>, StorageError> {
        let Some(document) = read_document::<BooksDocument>(&self.path)? else {
            return Ok(None);
        };

        let mut books = BookMap::with_capacity(document.books.len());
        for record in document.books {
            let book = Book::try_from(record).map_err(|message| self.invalid(message))?;
            if books.contains_key(&book.isbn) {
                return Err(self.invalid(format!("duplicate ISBN {}", book.isbn)));
            }
            books.insert(book.isbn.clone(), book);
        }
        Ok(Some(books))
    }

    pub fn save(&self, books: &BookMap) -> Result<(), StorageError> {
        let document = BooksDocument {
            version: FORMAT_VERSION,
            books: books.values().map(BookRecord::from).collect(),
        };
        write_document(&self.path, &document)
    }

    fn invalid(&self, message: String) -> StorageError {
        StorageError::InvalidRecord {
            path: self.path.clone(),
            message,
        }
    }
}
