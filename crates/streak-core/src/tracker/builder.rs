//! Builder for creating and configuring Tracker instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use jiff::civil::Date;
use log::debug;
use tokio::task;

use super::{join_error, Tracker};
use crate::{
    error::{HabitError, Result},
    store::{Backend, Store},
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    backend: Backend,
    data_path: Option<PathBuf>,
    today: Option<Date>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings (JSON backend, XDG path).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Sets a custom data file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/streak/habits.json` (or `habits.db` for SQLite).
    pub fn with_data_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Pins the tracker's notion of "today" instead of reading the clock.
    pub fn with_today(mut self, today: Option<Date>) -> Self {
        self.today = today;
        self
    }

    /// Builds the configured tracker.
    ///
    /// # Errors
    ///
    /// Returns `HabitError::FileSystem` if the data directory cannot be created
    /// Returns `HabitError::Database` if SQLite initialization fails
    pub async fn build(self) -> Result<Tracker> {
        let path = match self.data_path {
            Some(path) => path,
            None => Self::default_data_path(self.backend)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| HabitError::file_system(parent, e))?;
        }

        debug!("opening {} store at {}", self.backend, path.display());
        let backend = self.backend;
        let store: Box<dyn Store> = task::spawn_blocking(move || backend.open(&path))
            .await
            .map_err(join_error)??;

        Ok(Tracker::new(Arc::from(store), self.today))
    }

    /// Returns the default data path following XDG Base Directory
    /// specification.
    fn default_data_path(backend: Backend) -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("streak")
            .place_data_file(backend.default_file_name())
            .map_err(|e| HabitError::XdgDirectory(e.to_string()))
    }
}
