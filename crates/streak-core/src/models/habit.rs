//! Habit model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Marker;

/// One tracked behavior and its check-in state.
///
/// The name is the registry key. It is not part of the stored record and is
/// filled in by [`super::RegistryState`] when the state is deserialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Habit {
    /// Normalized (trimmed, lowercase) habit name
    #[serde(skip)]
    pub name: String,

    /// Date the habit was added; never changes
    #[serde(alias = "start_date")]
    pub creation_date: Date,

    /// Most recent check-in, `None` until the first one
    #[serde(default, alias = "last_date")]
    pub last_check_in_date: Option<Date>,

    /// One marker per tracked calendar day, oldest first
    #[serde(default)]
    pub history: Vec<Marker>,

    /// Consecutive `FIRE` days ending at `last_check_in_date`
    #[serde(default)]
    pub streak: u32,

    /// Whether this is the user's main habit
    #[serde(default)]
    pub is_main: bool,
}

impl Habit {
    /// Creates a fresh habit that has never been checked in.
    pub fn new(name: impl Into<String>, creation_date: Date) -> Self {
        Self {
            name: name.into(),
            creation_date,
            last_check_in_date: None,
            history: Vec::new(),
            streak: 0,
            is_main: false,
        }
    }

    /// The last `days` markers, oldest first.
    pub fn recent_history(&self, days: usize) -> &[Marker] {
        let start = self.history.len().saturating_sub(days);
        &self.history[start..]
    }

    pub fn last_marker(&self) -> Option<Marker> {
        self.history.last().copied()
    }

    /// Whether the habit already has a check-in on `date`.
    pub fn is_checked_in_on(&self, date: Date) -> bool {
        self.last_check_in_date == Some(date)
    }
}
