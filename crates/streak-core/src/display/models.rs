//! Display implementations for domain models.
//!
//! Output is markdown, rendered by the CLI's terminal renderer.

use std::fmt;

use super::{datetime::ShortDate, rows::streak_badge};
use crate::models::{Habit, Marker, RegistryState};

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl fmt::Display for Habit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let main = if self.is_main { " (main)" } else { "" };
        writeln!(f, "## {}{main}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- Streak: {} {}", self.streak, streak_badge(self.streak))?;
        writeln!(f, "- Created: {}", self.creation_date)?;
        writeln!(
            f,
            "- Last check-in: {}",
            ShortDate(self.last_check_in_date)
        )?;

        if !self.history.is_empty() {
            let history: String = self.history.iter().map(Marker::glyph).collect();
            writeln!(f, "- History: {history}")?;
        }
        Ok(())
    }
}

impl fmt::Display for RegistryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.user {
            Some(user) => writeln!(f, "# {user}'s habits")?,
            None => writeln!(f, "# Habits")?,
        }
        writeln!(f)?;

        if self.habits.is_empty() {
            return writeln!(f, "No habits yet. Add one first.");
        }
        for habit in self.habits.values() {
            write!(f, "{habit}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}
