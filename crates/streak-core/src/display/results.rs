//! Result wrapper types for displaying operation outcomes.
//!
//! Each wrapper renders the confirmation message a user sees after a
//! successful operation.

use std::fmt;

use crate::{models::Habit, registry::CheckIn};

/// Wrapper type for displaying the result of adding a habit.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Habit> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Habit '{}' added.", self.resource.name)
    }
}

/// Wrapper type for displaying the result of deleting a habit.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Habit> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Habit '{}' deleted.", self.resource.name)?;
        if !self.resource.history.is_empty() {
            write!(
                f,
                " {} day(s) of history removed.",
                self.resource.history.len()
            )?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying a main-habit change.
///
/// The wording follows the habit's `is_main` flag after the change.
pub struct MainHabitResult<T> {
    pub resource: T,
}

impl<T> MainHabitResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for MainHabitResult<Habit> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.resource.is_main {
            write!(f, "Habit '{}' is now main.", self.resource.name)
        } else {
            write!(f, "Habit '{}' is no longer main.", self.resource.name)
        }
    }
}

impl fmt::Display for CheckIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.delta.message())
    }
}
