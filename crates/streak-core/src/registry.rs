//! Registry operations over [`RegistryState`].
//!
//! These are the pure, in-memory halves of every user-facing operation.
//! They enforce the registry invariants:
//!
//! - habit names are unique after normalization (trim + lowercase)
//! - at most one habit is flagged as main
//! - history only grows, and only through the check-in engine
//!
//! Persistence is handled by the caller (see [`crate::tracker::Tracker`]),
//! which runs each operation against a working copy and commits it in one
//! save.

use std::collections::BTreeMap;

use jiff::civil::Date;
use log::{debug, warn};

use crate::{
    engine::{self, CheckInDelta},
    error::{HabitError, Result},
    models::{Habit, RegistryState},
};

/// Result of a successful registry check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    /// The habit after the check-in was applied
    pub habit: Habit,
    /// The change that was applied
    pub delta: CheckInDelta,
}

/// Trims and lowercases a habit name.
///
/// # Errors
///
/// Returns [`HabitError::EmptyName`] if nothing is left after trimming.
pub fn normalize_name(name: &str) -> Result<String> {
    let clean = name.trim().to_lowercase();
    if clean.is_empty() {
        return Err(HabitError::EmptyName);
    }
    Ok(clean)
}

/// Builds the habit map from stored `(name, habit)` records.
///
/// Stored data may predate normalization or have been edited by hand, so the
/// registry invariants are restored here:
///
/// - keys are normalized; blank ones are dropped
/// - of several records that normalize to the same name, the first is kept
/// - only the first habit flagged as main keeps the flag
pub(crate) fn index_habits<I>(records: I) -> BTreeMap<String, Habit>
where
    I: IntoIterator<Item = (String, Habit)>,
{
    let mut habits = BTreeMap::new();
    let mut main: Option<String> = None;

    for (key, mut habit) in records {
        let Ok(name) = normalize_name(&key) else {
            warn!("dropping stored habit with a blank name");
            continue;
        };
        if habits.contains_key(&name) {
            warn!("dropping stored habit '{key}': another record is already named '{name}'");
            continue;
        }
        if habit.is_main {
            match &main {
                Some(current) => {
                    warn!("clearing main flag on '{name}': '{current}' is already main");
                    habit.is_main = false;
                }
                None => main = Some(name.clone()),
            }
        }

        habit.name.clone_from(&name);
        habits.insert(name, habit);
    }
    habits
}

impl RegistryState {
    /// Sets the user's display name (trimmed, case preserved).
    pub fn set_user_name(&mut self, name: &str) -> Result<String> {
        let clean = name.trim();
        if clean.is_empty() {
            return Err(HabitError::EmptyName);
        }
        self.user = Some(clean.to_string());
        Ok(clean.to_string())
    }

    /// Registers a new habit created on `today`.
    pub fn add_habit(&mut self, name: &str, today: Date) -> Result<Habit> {
        let name = normalize_name(name)?;
        if self.habits.contains_key(&name) {
            return Err(HabitError::DuplicateHabit { name });
        }

        let habit = Habit::new(name.clone(), today);
        self.habits.insert(name, habit.clone());
        debug!("added habit '{}'", habit.name);
        Ok(habit)
    }

    /// Removes a habit and its history. Returns the removed habit.
    pub fn delete_habit(&mut self, name: &str) -> Result<Habit> {
        let name = normalize_name(name)?;
        let habit = self
            .habits
            .remove(&name)
            .ok_or_else(|| HabitError::not_found(&name))?;
        debug!("deleted habit '{name}'");
        Ok(habit)
    }

    /// Checks a habit in on `today` and records `today` as the user's most
    /// recent check-in.
    pub fn check_in(&mut self, name: &str, today: Date) -> Result<CheckIn> {
        let name = normalize_name(name)?;
        let habit = self
            .habits
            .get_mut(&name)
            .ok_or_else(|| HabitError::not_found(&name))?;

        let delta = engine::attempt_check_in(habit, today)?;
        delta.apply(habit);
        let habit = habit.clone();

        self.last_check_in_date = Some(today);
        Ok(CheckIn { habit, delta })
    }

    /// Makes `name` the only main habit.
    pub fn set_main_habit(&mut self, name: &str) -> Result<()> {
        let name = normalize_name(name)?;
        if !self.habits.contains_key(&name) {
            return Err(HabitError::not_found(name));
        }
        for (key, habit) in &mut self.habits {
            habit.is_main = *key == name;
        }
        Ok(())
    }

    /// Clears the main flag on `name`, leaving no main habit.
    pub fn clear_main_habit(&mut self, name: &str) -> Result<()> {
        let name = normalize_name(name)?;
        let habit = self
            .habits
            .get_mut(&name)
            .ok_or_else(|| HabitError::not_found(&name))?;
        habit.is_main = false;
        Ok(())
    }

    /// Flips the main flag on `name`. Returns whether it is main afterwards.
    pub fn toggle_main_habit(&mut self, name: &str) -> Result<bool> {
        let clean = normalize_name(name)?;
        let is_main = self
            .habits
            .get(&clean)
            .map(|habit| habit.is_main)
            .ok_or_else(|| HabitError::not_found(&clean))?;

        if is_main {
            self.clear_main_habit(&clean)?;
        } else {
            self.set_main_habit(&clean)?;
        }
        Ok(!is_main)
    }

    /// Resolves a 1-based menu choice to a habit name, in listing order.
    pub fn habit_name_at(&self, choice: &str) -> Result<String> {
        let invalid = || HabitError::InvalidSelection {
            choice: choice.trim().to_string(),
            max: self.habits.len(),
        };
        let index: usize = choice.trim().parse().map_err(|_| invalid())?;
        index
            .checked_sub(1)
            .and_then(|i| self.habits.keys().nth(i))
            .cloned()
            .ok_or_else(invalid)
    }
}
