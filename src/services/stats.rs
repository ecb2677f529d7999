//! Statistics service

use super::Library;
use crate::models::LibraryReport;

impl Library {
    /// Counts of books, members, loans and overdue loans as of today
    pub fn library_report(&self) -> LibraryReport {
        let today = self.today();
        let total_books = self.books.len();
        let available_books = self.books.values().filter(|b| b.is_available()).count();
        let overdue_books = self.books.values().filter(|b| b.is_overdue(today)).count();

        LibraryReport {
            total_books,
            total_members: self.members.len(),
            available_books,
            borrowed_books: total_books - available_books,
            overdue_books,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_empty_report() {
        let (library, _, _) = test_library();
        assert_eq!(library.library_report(), LibraryReport::default());
    }

    #[test]
    fn test_report_counts() {
        let (mut library, _, clock) = test_library();
        library.add_book("B1", "Dune", "Frank Herbert", "Science Fiction").unwrap();
        library.add_book("B2", "Hamlet", "William Shakespeare", "Drama").unwrap();
        library.add_book("B3", "Emma", "Jane Austen", "Romance").unwrap();
        library.add_member("M1", "Ada", "ada@example.org", "555-0100").unwrap();
        library.borrow_book("B1", "M1").unwrap();
        clock.advance_days(10);
        library.borrow_book("B2", "M1").unwrap();
        clock.advance_days(5);

        assert_eq!(
            library.library_report(),
            LibraryReport {
                total_books: 3,
                total_members: 1,
                available_books: 1,
                borrowed_books: 2,
                overdue_books: 1,
            }
        );
        assert_eq!(library.library_report().overdue_books, library.list_overdue().len());
    }
}
