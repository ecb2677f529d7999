//! State surviving process restarts

use std::fs;

use lendshelf::{clock::ManualClock, repository::Storage, Library};
use tempfile::tempdir;

use super::{day, open_library, storage_in};

#[test]
fn test_state_survives_reopen() {
    let dir = tempdir().unwrap();
    let clock = ManualClock::new(day(2024, 6, 1));

    {
        let mut library = open_library(&dir, &clock);
        library.add_book("B1", "Dune", "Frank Herbert", "Science Fiction").unwrap();
        library.add_book("B2", "Hamlet", "William Shakespeare", "Drama").unwrap();
        library.add_member("M1", "Ada", "ada@example.org", "555-0100").unwrap();
        library.borrow_book("B1", "M1").unwrap();
    }

    clock.advance_days(15);
    let reopened = open_library(&dir, &clock);

    let book = reopened.get_book("B1").unwrap();
    assert_eq!(book.borrowed_by(), Some("M1"));
    assert_eq!(book.borrow_date(), Some(day(2024, 6, 1)));
    assert_eq!(book.due_date(), Some(day(2024, 6, 15)));
    assert!(reopened.get_book("B2").unwrap().is_available());

    let member = reopened.get_member("M1").unwrap();
    assert_eq!(member.membership_date, day(2024, 6, 1));
    assert!(member.borrowed_books.contains("B1"));

    assert_eq!(reopened.list_overdue().len(), 1);
}

#[test]
fn test_removals_persist() {
    let dir = tempdir().unwrap();
    let clock = ManualClock::new(day(2024, 6, 1));

    {
        let mut library = open_library(&dir, &clock);
        library.add_book("B1", "Dune", "Frank Herbert", "Science Fiction").unwrap();
        library.add_member("M1", "Ada", "ada@example.org", "555-0100").unwrap();
        library.remove_book("B1").unwrap();
        library.remove_member("M1").unwrap();
    }

    let reopened = open_library(&dir, &clock);
    assert!(reopened.list_books().is_empty());
    assert!(reopened.list_members().is_empty());
}

#[test]
fn test_save_load_roundtrip_field_for_field() {
    let dir = tempdir().unwrap();
    let clock = ManualClock::new(day(2024, 6, 1));
    let mut library = open_library(&dir, &clock);
    library.add_book("B1", "Dune", "Frank Herbert", "Science Fiction").unwrap();
    library.add_book("B2", "Hamlet", "William Shakespeare", "Drama").unwrap();
    library.add_member("M1", "Ada", "ada@example.org", "555-0100").unwrap();
    library.borrow_book("B2", "M1").unwrap();
    library.persist().unwrap();

    let loaded = storage_in(&dir).load();
    let mut books: Vec<_> = loaded.books.into_values().collect();
    let mut expected = library.list_books();
    books.sort_by(|a, b| a.isbn.cmp(&b.isbn));
    expected.sort_by(|a, b| a.isbn.cmp(&b.isbn));
    assert_eq!(books, expected);

    let members: Vec<_> = loaded.members.into_values().collect();
    assert_eq!(members, library.list_members());
}

#[test]
fn test_corrupt_members_file_keeps_books() {
    let dir = tempdir().unwrap();
    let clock = ManualClock::new(day(2024, 6, 1));
    {
        let mut library = open_library(&dir, &clock);
        library.add_book("B1", "Dune", "Frank Herbert", "Science Fiction").unwrap();
        library.add_member("M1", "Ada", "ada@example.org", "555-0100").unwrap();
    }

    fs::write(dir.path().join("members.json"), "garbage").unwrap();

    let reopened = open_library(&dir, &clock);
    assert_eq!(reopened.list_books().len(), 1);
    assert!(reopened.list_members().is_empty());
}

#[test]
fn test_first_run_starts_empty() {
    let dir = tempdir().unwrap();
    let library = Library::open(Box::new(storage_in(&dir)));
    assert_eq!(library.library_report().total_books, 0);
    assert_eq!(library.library_report().total_members, 0);
}
