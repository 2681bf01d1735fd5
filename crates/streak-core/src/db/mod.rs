//! SQLite storage for the registry state.
//!
//! The relational layout keeps one `users` row, one `habits` row per habit
//! and one `habit_events` row per history marker. [`Database`] converts
//! between that layout and [`crate::models::RegistryState`].

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod schema;
pub mod state_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
