//! End-to-end lending scenarios

use lendshelf::{
    clock::ManualClock,
    error::{ErrorKind, StateViolation},
    AppError, Library,
};
use tempfile::tempdir;

use super::{day, open_library};

fn assert_invariants(library: &Library) {
    let members = library.list_members();
    for book in library.list_books() {
        match book.borrowed_by() {
            None => {
                assert!(book.is_available());
                assert!(book.borrow_date().is_none() && book.due_date().is_none());
            }
            Some(holder) => {
                assert!(!book.is_available());
                assert!(book.borrow_date().is_some() && book.due_date().is_some());
                let owners: Vec<_> = members
                    .iter()
                    .filter(|m| m.borrowed_books.contains(&book.isbn))
                    .collect();
                assert_eq!(owners.len(), 1, "{} held by {} members", book.isbn, owners.len());
                assert_eq!(owners[0].member_id, holder);
            }
        }
    }
    for member in &members {
        assert!(member.borrowed_books.len() <= library.loan_rules().max_books_per_member);
    }
}

#[test]
fn test_borrow_return_cycle() {
    let dir = tempdir().unwrap();
    let clock = ManualClock::new(day(2024, 6, 1));
    let mut library = open_library(&dir, &clock);

    library.add_book("B1", "Dune", "Frank Herbert", "Science Fiction").unwrap();
    library.add_member("M1", "Ada Lovelace", "ada@example.org", "555-0100").unwrap();
    assert_invariants(&library);

    let receipt = library.borrow_book("B1", "M1").unwrap();
    assert_eq!(receipt.due_date, day(2024, 6, 15));
    assert_eq!(library.list_borrowed()[0].isbn, "B1");
    assert!(library.get_member("M1").unwrap().borrowed_books.contains("B1"));
    assert_invariants(&library);

    clock.advance_days(20);
    assert_eq!(library.list_overdue().len(), 1);
    assert_eq!(library.library_report().overdue_books, 1);

    let returned = library.return_book("B1").unwrap();
    assert_eq!(returned.overdue_days, Some(6));
    assert!(library.get_book("B1").unwrap().is_available());
    assert!(library.get_member("M1").unwrap().borrowed_books.is_empty());
    assert!(library.list_borrowed().is_empty());
    assert_invariants(&library);
}

#[test]
fn test_limit_protects_existing_loans() {
    let dir = tempdir().unwrap();
    let clock = ManualClock::new(day(2024, 6, 1));
    let mut library = open_library(&dir, &clock);

    library.add_member("M1", "Ada", "ada@example.org", "555-0100").unwrap();
    for i in 1..=6 {
        library
            .add_book(&format!("B{}", i), &format!("Book {}", i), "Author", "Genre")
            .unwrap();
    }
    for i in 1..=5 {
        library.borrow_book(&format!("B{}", i), "M1").unwrap();
    }
    let before = library.list_borrowed();

    let err = library.borrow_book("B6", "M1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LimitExceeded);
    assert_eq!(library.list_borrowed(), before);
    assert_invariants(&library);
}

#[test]
fn test_rejections_do_not_mutate() {
    let dir = tempdir().unwrap();
    let clock = ManualClock::new(day(2024, 6, 1));
    let mut library = open_library(&dir, &clock);

    library.add_book("B1", "Dune", "Frank Herbert", "Science Fiction").unwrap();
    library.add_member("M1", "Ada", "ada@example.org", "555-0100").unwrap();
    library.borrow_book("B1", "M1").unwrap();

    let books = library.list_books();
    let members = library.list_members();

    assert!(matches!(
        library.add_book("B1", "Other", "Someone", "Drama"),
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        library.remove_book("B1"),
        Err(AppError::InvalidState(StateViolation::BookOnLoan))
    ));
    assert!(matches!(
        library.remove_member("M1"),
        Err(AppError::InvalidState(StateViolation::MemberHasLoans))
    ));
    assert!(matches!(
        library.borrow_book("B1", "M1"),
        Err(AppError::InvalidState(StateViolation::AlreadyBorrowed))
    ));

    assert_eq!(library.list_books(), books);
    assert_eq!(library.list_members(), members);
}

#[test]
fn test_snapshots_are_detached() {
    let dir = tempdir().unwrap();
    let clock = ManualClock::new(day(2024, 6, 1));
    let mut library = open_library(&dir, &clock);
    library.add_book("B1", "Dune", "Frank Herbert", "Science Fiction").unwrap();

    let mut copy = library.get_book("B1").unwrap();
    copy.title = "Changed".to_string();

    assert_eq!(library.get_book("B1").unwrap().title, "Dune");
}

#[test]
fn test_search_scenario() {
    let dir = tempdir().unwrap();
    let clock = ManualClock::new(day(2024, 6, 1));
    let mut library = open_library(&dir, &clock);
    library.add_book("B1", "Dune", "Frank Herbert", "Science Fiction").unwrap();
    library.add_book("B2", "Hamlet", "William Shakespeare", "Drama").unwrap();

    let hits: Vec<_> = library.search_books("sci").into_iter().map(|b| b.isbn).collect();
    assert_eq!(hits, vec!["B1".to_string()]);
    assert_eq!(library.search_books("").len(), 2);
}
