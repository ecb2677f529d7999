//! Lendshelf Library Record Management
//!
//! The in-memory catalog of books and registry of members, the lending rules
//! that bind them (availability, per-member limits, due dates, overdue
//! detection) and their persistence across restarts. Front-ends build a
//! [`Library`] once and call its operations.

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::Library;
