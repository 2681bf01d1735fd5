//! Error types for the streak library.

use std::path::PathBuf;

use jiff::civil::Date;
use thiserror::Error;

/// Every failure a registry, engine or store operation can report.
///
/// All variants are recoverable: callers display the message and carry on.
/// The persistence family is grouped by [`HabitError::is_persistence_failure`].
#[derive(Error, Debug)]
pub enum HabitError {
    /// A habit or user name was blank after trimming
    #[error("Name cannot be empty.")]
    EmptyName,
    /// A habit with the same normalized name already exists
    #[error("Habit '{name}' already exists.")]
    DuplicateHabit { name: String },
    /// No habit is registered under the given name
    #[error("Habit '{name}' not found.")]
    HabitNotFound { name: String },
    /// The habit already has a check-in for this date
    #[error("Habit '{name}' was already checked in on {date}.")]
    AlreadyCheckedIn { name: String, date: Date },
    /// The date precedes the habit's last check-in
    #[error("Cannot check in '{name}' on {today}: last check-in was {last}.")]
    CheckInBeforeLastCheckIn { name: String, last: Date, today: Date },
    /// A menu choice outside `1..=max`
    #[error("Invalid selection '{choice}': choose a number between 1 and {max}.")]
    InvalidSelection { choice: String, max: usize },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Calendar arithmetic overflowed the supported date range
    #[error("Calendar error: {source}")]
    Calendar {
        #[from]
        source: jiff::Error,
    },
    /// Configuration and runtime plumbing errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> HabitError {
        HabitError::Database {
            message: self.message,
            source,
        }
    }
}

impl HabitError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a file system error for `path`.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HabitError::FileSystem {
            path: path.into(),
            source,
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        HabitError::HabitNotFound { name: name.into() }
    }

    /// True for storage-layer faults (I/O, database, encoding).
    ///
    /// When a save fails the working copy of the registry is discarded, so
    /// callers should reload before retrying.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            HabitError::Database { .. }
                | HabitError::FileSystem { .. }
                | HabitError::XdgDirectory(_)
                | HabitError::Serialization { .. }
                | HabitError::Configuration { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| HabitError::database(message).with_source(e))
    }
}

/// Result type alias for streak operations
pub type Result<T> = std::result::Result<T, HabitError>;
