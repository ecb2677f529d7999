//! Integration tests against the public library API

mod library_tests;
mod persistence_tests;

use chrono::NaiveDate;
use lendshelf::{clock::ManualClock, repository::JsonFileStorage, Library};
use tempfile::TempDir;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn storage_in(dir: &TempDir) -> JsonFileStorage {
    JsonFileStorage::new(dir.path().join("books.json"), dir.path().join("members.json"))
}

/// Library on fresh JSON stores inside `dir`
pub fn open_library(dir: &TempDir, clock: &ManualClock) -> Library {
    Library::open(Box::new(storage_in(dir))).with_clock(clock.clone())
}
