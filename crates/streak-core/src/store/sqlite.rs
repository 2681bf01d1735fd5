//! SQLite backend.

use std::path::{Path, PathBuf};

use log::warn;
use rusqlite::ErrorCode;

use super::Store;
use crate::{
    db::Database,
    error::{HabitError, Result},
    models::RegistryState,
};

/// Stores the registry in a SQLite database file.
///
/// A connection is opened per call; the store itself only holds the path.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Opens the database once to create the schema, then returns the store.
    ///
    /// A file that is not a SQLite database is tolerated here: it loads as
    /// the empty state and saving over it fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Err(e) = Database::new(&path) {
            if !is_malformed(&e) {
                return Err(e);
            }
            warn!("{} is not a usable database: {e}", path.display());
        }
        Ok(Self { path })
    }
}

/// Row contents that do not decode (bad dates, unknown markers, negative
/// streaks) and files that are not databases count as malformed data rather
/// than a storage fault.
fn is_malformed(err: &HabitError) -> bool {
    let HabitError::Database { source, .. } = err else {
        return false;
    };
    matches!(
        source,
        rusqlite::Error::FromSqlConversionFailure(..)
            | rusqlite::Error::InvalidColumnType(..)
            | rusqlite::Error::IntegralValueOutOfRange(..)
    ) || source.sqlite_error_code() == Some(ErrorCode::NotADatabase)
}

impl Store for SqliteStore {
    fn load(&self) -> Result<RegistryState> {
        match Database::new(&self.path).and_then(|db| db.load_state()) {
            Err(e) if is_malformed(&e) => {
                warn!("ignoring malformed database {}: {e}", self.path.display());
                Ok(RegistryState::default())
            }
            other => other,
        }
    }

    fn save(&self, state: &RegistryState) -> Result<()> {
        let mut db = Database::new(&self.path)?;
        db.save_state(state)
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
