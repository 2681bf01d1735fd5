//! JSON file backend.

use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use log::{debug, warn};
use tempfile::NamedTempFile;

use super::Store;
use crate::{
    error::{HabitError, Result},
    models::RegistryState,
};

/// Stores the registry as a single pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Store for JsonStore {
    fn load(&self) -> Result<RegistryState> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no data file at {}, starting empty", self.path.display());
                return Ok(RegistryState::default());
            }
            Err(e) => return Err(HabitError::file_system(&self.path, e)),
        };

        if data.trim().is_empty() {
            return Ok(RegistryState::default());
        }

        match serde_json::from_str(&data) {
            Ok(state) => Ok(state),
            Err(e) => {
                warn!(
                    "ignoring malformed data file {}: {e}",
                    self.path.display()
                );
                Ok(RegistryState::default())
            }
        }
    }

    /// Writes through a temporary file in the same directory so a failed
    /// write never leaves a truncated document behind.
    fn save(&self, state: &RegistryState) -> Result<()> {
        let mut data = serde_json::to_string_pretty(state)?;
        data.push('\n');

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| HabitError::file_system(dir, e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| HabitError::file_system(dir, e))?;
        tmp.write_all(data.as_bytes())
            .map_err(|e| HabitError::file_system(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| HabitError::file_system(&self.path, e.error))?;

        debug!("saved {} habit(s) to {}", state.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use tempfile::TempDir;

    use super::*;
    use crate::models::Marker;

    #[test]
    fn test_missing_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("habits.json"));
        assert_eq!(store.load().unwrap(), RegistryState::default());
    }

    #[test]
    fn test_malformed_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("habits.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonStore::new(&path);
        assert_eq!(store.load().unwrap(), RegistryState::default());
    }

    #[test]
    fn test_save_writes_documented_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("habits.json");
        let store = JsonStore::new(&path);

        let mut state = RegistryState::default();
        state.add_habit("reading", date(2024, 1, 1)).unwrap();
        state.check_in("reading", date(2024, 1, 1)).unwrap();
        store.save(&state).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["last_check_in_date"], "2024-01-01");
        assert_eq!(raw["habits"]["reading"]["history"][0], "FIRE");
        assert!(raw["user"].is_null());

        let loaded = store.load().unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.habit("reading").unwrap().history, vec![Marker::Fire]);
    }

    #[test]
    fn test_save_overwrites_previous_state() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("habits.json"));

        let mut state = RegistryState::default();
        state.add_habit("a", date(2024, 1, 1)).unwrap();
        state.add_habit("b", date(2024, 1, 1)).unwrap();
        store.save(&state).unwrap();

        state.delete_habit("a").unwrap();
        store.save(&state).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.habit("a").is_none());
    }
}
