//! The complete persisted state for the single local user.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize};

use super::Habit;
use crate::registry;

/// User profile plus every habit, keyed by normalized habit name.
///
/// This is the value a [`crate::store::Store`] loads and saves. The default
/// value is the empty state used when nothing has been stored yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryState {
    /// Display name, unset until the user provides one
    #[serde(default)]
    pub user: Option<String>,

    /// Most recent check-in across all habits
    #[serde(default, alias = "last_date")]
    pub last_check_in_date: Option<Date>,

    /// Habits keyed by name
    #[serde(default, deserialize_with = "deserialize_habits")]
    pub habits: BTreeMap<String, Habit>,
}

impl RegistryState {
    pub fn habit(&self, name: &str) -> Option<&Habit> {
        self.habits.get(name)
    }

    /// The habit flagged as main, if any.
    pub fn main_habit(&self) -> Option<&Habit> {
        self.habits.values().find(|habit| habit.is_main)
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}

/// Reads the habit map and copies each key into the habit's `name`.
///
/// A `null` map (written by some older files) is read as empty. Keys are
/// normalized and the registry invariants restored, see
/// [`crate::registry::index_habits`].
fn deserialize_habits<'de, D>(deserializer: D) -> Result<BTreeMap<String, Habit>, D::Error>
where
    D: Deserializer<'de>,
{
    let habits: Option<BTreeMap<String, Habit>> = Option::deserialize(deserializer)?;
    Ok(registry::index_habits(habits.unwrap_or_default()))
}
