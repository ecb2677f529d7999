//! Configuration management for Lendshelf

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::services::{MAX_BOOKS_PER_MEMBER, MAX_BORROW_DAYS};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding both data stores
    pub data_dir: PathBuf,
    pub books_file: String,
    pub members_file: String,
}

impl StorageConfig {
    pub fn books_path(&self) -> PathBuf {
        self.data_dir.join(&self.books_file)
    }

    pub fn members_path(&self) -> PathBuf {
        self.data_dir.join(&self.members_file)
    }
}

/// Loan rules applied by the library
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoansConfig {
    /// Loan term in calendar days
    pub max_borrow_days: u32,
    pub max_books_per_member: usize,
}

impl LoansConfig {
    /// Longest accepted loan term, in days
    pub const MAX_TERM_DAYS: u32 = 3650;

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_borrow_days == 0 || self.max_borrow_days > Self::MAX_TERM_DAYS {
            return Err(ConfigError::Message(format!(
                "loans.max_borrow_days must be between 1 and {}, got {}",
                Self::MAX_TERM_DAYS,
                self.max_borrow_days
            )));
        }
        if self.max_books_per_member == 0 {
            return Err(ConfigError::Message(
                "loans.max_books_per_member must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Output format of the log lines
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    /// Directory for daily rolling log files; stderr when unset
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub loans: LoansConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // e.g. LENDSHELF_LOANS__MAX_BORROW_DAYS=21
            .add_source(
                Environment::with_prefix("LENDSHELF")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option(
                "storage.data_dir",
                env::var("LENDSHELF_DATA_DIR").ok(),
            )?
            .build()?;

        let app: Self = config.try_deserialize()?;
        app.loans.validate()?;
        Ok(app)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            books_file: "books.json".to_string(),
            members_file: "members.json".to_string(),
        }
    }
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self {
            max_borrow_days: MAX_BORROW_DAYS,
            max_books_per_member: MAX_BOOKS_PER_MEMBER,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}
