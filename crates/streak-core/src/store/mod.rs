//! Persistence adapters for the registry state.
//!
//! The registry and engine never touch storage directly. A [`Store`] loads
//! the whole [`RegistryState`] and saves it back, fully replacing what was
//! there. Two interchangeable backends exist:
//!
//! - [`JsonStore`]: one pretty-printed JSON document
//! - [`SqliteStore`]: a SQLite database with users, habits and events tables
//!
//! Which one is used is decided by [`Backend`], usually from configuration.

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::Result, models::RegistryState};

pub mod json;
pub mod sqlite;

pub use json::JsonStore;
pub use sqlite::SqliteStore;

/// Load/save contract for the registry state.
pub trait Store: Send + Sync {
    /// Loads the stored state.
    ///
    /// Returns the default (empty) state when nothing has been stored yet or
    /// the stored data cannot be understood. Errors are reserved for faults
    /// such as unreadable files.
    fn load(&self) -> Result<RegistryState>;

    /// Replaces the stored state with `state`.
    fn save(&self, state: &RegistryState) -> Result<()>;

    /// Where the data lives, for diagnostics.
    fn location(&self) -> &Path;
}

/// Available storage backends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Flat JSON file
    #[default]
    Json,

    /// SQLite database
    Sqlite,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" | "file" => Ok(Backend::Json),
            "sqlite" | "sql" | "db" => Ok(Backend::Sqlite),
            _ => Err(format!("Invalid backend: {s} (expected 'json' or 'sqlite')")),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Json => "json",
            Backend::Sqlite => "sqlite",
        }
    }

    /// File name used under the data directory when no path is given.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Backend::Json => "habits.json",
            Backend::Sqlite => "habits.db",
        }
    }

    /// Opens a store of this kind at `path`.
    pub fn open(self, path: &Path) -> Result<Box<dyn Store>> {
        Ok(match self {
            Backend::Json => Box::new(JsonStore::new(path)),
            Backend::Sqlite => Box::new(SqliteStore::open(path)?),
        })
    }
}
