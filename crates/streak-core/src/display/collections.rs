//! Collection wrapper types for displaying groups of habits.

use std::{fmt, ops::Index};

use super::rows::HabitRow;
use crate::models::RegistryState;

/// Newtype wrapper for displaying the habit list.
///
/// Titles are left to the caller. Empty lists render a short notice.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use streak_core::{display::HabitRows, RegistryState};
///
/// let mut state = RegistryState::default();
/// state.add_habit("reading", date(2024, 1, 1))?;
///
/// let output = HabitRows::from(&state).to_string();
/// assert!(output.contains("Reading"));
/// # Ok::<(), streak_core::HabitError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HabitRows(pub Vec<HabitRow>);

impl HabitRows {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HabitRow> {
        self.0.iter()
    }

    /// The list without markdown, for line-oriented terminals.
    pub fn plain(&self) -> PlainHabitRows<'_> {
        PlainHabitRows(self)
    }
}

/// Plain-text rendering of [`HabitRows`], numbered from 1 like the markdown list.
pub struct PlainHabitRows<'a>(pub &'a HabitRows);

impl fmt::Display for PlainHabitRows<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No habits yet. Add one first.");
        }
        for (position, row) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{}) {}{} {} streak: {} {} (since {}, last: {})",
                position + 1,
                row.name_title,
                if row.is_main { " ★" } else { "" },
                if row.history.is_empty() { "-" } else { row.history.as_str() },
                row.streak,
                row.badge,
                row.created,
                row.last_check
            )?;
        }
        Ok(())
    }
}

impl From<&RegistryState> for HabitRows {
    fn from(state: &RegistryState) -> Self {
        Self(state.habits.values().map(HabitRow::from).collect())
    }
}

impl Index<usize> for HabitRows {
    type Output = HabitRow;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for HabitRows {
    type Item = HabitRow;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HabitRows {
    type Item = &'a HabitRow;
    type IntoIter = std::slice::Iter<'a, HabitRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for HabitRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No habits yet. Add one first.");
        }
        for (position, row) in self.0.iter().enumerate() {
            writeln!(f, "{}. {row}", position + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for HabitRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let main = if self.is_main { " ★" } else { "" };
        write!(
            f,
            "**{}**{main} {} streak: {} {} (since {}, last: {})",
            self.name_title,
            if self.history.is_empty() { "-" } else { self.history.as_str() },
            self.streak,
            self.badge,
            self.created,
            self.last_check
        )
    }
}
