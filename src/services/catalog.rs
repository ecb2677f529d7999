//! Catalog management: adding, removing, finding books

use super::Library;
use crate::{
    error::{AppError, AppResult, StateViolation},
    models::Book,
};

impl Library {
    /// Add a new, available book
    pub fn add_book(
        &mut self,
        isbn: &str,
        title: &str,
        author: &str,
        genre: &str,
    ) -> AppResult<Book> {
        if self.books.contains_key(isbn) {
            tracing::warn!("Catalog add rejected: ISBN {} already exists", isbn);
            return Err(AppError::Conflict(format!(
                "Book with ISBN {} already exists",
                isbn
            )));
        }

        let book = Book::new(isbn, title, author, genre);
        self.books.insert(isbn.to_string(), book.clone());
        self.save();

        tracing::info!("Catalog add: ISBN {} \"{}\"", isbn, title);
        Ok(book)
    }

    /// Remove a book that is not lent out
    pub fn remove_book(&mut self, isbn: &str) -> AppResult<Book> {
        let book = self
            .books
            .get(isbn)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;

        if !book.is_available() {
            tracing::warn!("Catalog remove rejected: ISBN {} is borrowed", isbn);
            return Err(AppError::InvalidState(StateViolation::BookOnLoan));
        }

        let removed = self
            .books
            .shift_remove(isbn)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;
        self.save();

        tracing::info!("Catalog remove: ISBN {}", isbn);
        Ok(removed)
    }

    /// Case-insensitive substring search over title, author, genre and ISBN.
    /// A blank query matches every book.
    pub fn search_books(&self, query: &str) -> Vec<Book> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.list_books();
        }

        self.books
            .values()
            .filter(|book| book.matches(&needle))
            .cloned()
            .collect()
    }

    pub fn list_books(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    pub fn get_book(&self, isbn: &str) -> AppResult<Book> {
        self.books
            .get(isbn)
            .cloned()
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))
    }
}
