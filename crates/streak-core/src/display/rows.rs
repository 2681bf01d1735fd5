//! Row projection of a habit for list views.
//!
//! Rows are derived data for display only. Streak logic always works from
//! [`Habit`] itself.

use serde::Serialize;

use super::datetime::ShortDate;
use crate::models::Habit;

/// Number of history markers shown in previews.
pub const PREVIEW_DAYS: usize = 7;

/// Streak length from which the badge shows three flames.
const HOT_STREAK: u32 = 7;

/// One habit, pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitRow {
    /// Stored habit name
    pub name: String,
    /// Name with each word capitalized
    pub name_title: String,
    pub is_main: bool,
    /// Creation date as `DD Mon`
    pub created: String,
    /// Last check-in as `DD Mon`, or `-`
    pub last_check: String,
    pub streak: u32,
    /// Streak indicator glyphs
    pub badge: &'static str,
    /// Last seven markers as glyphs, oldest first
    pub history: String,
}

/// Capitalizes the first letter of each whitespace-separated word.
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Glyphs summarizing a streak length.
pub fn streak_badge(streak: u32) -> &'static str {
    if streak >= HOT_STREAK {
        "🔥🔥🔥"
    } else if streak > 0 {
        "🔥"
    } else {
        "🧊"
    }
}

impl From<&Habit> for HabitRow {
    fn from(habit: &Habit) -> Self {
        Self {
            name: habit.name.clone(),
            name_title: title_case(&habit.name),
            is_main: habit.is_main,
            created: ShortDate(Some(habit.creation_date)).to_string(),
            last_check: ShortDate(habit.last_check_in_date).to_string(),
            streak: habit.streak,
            badge: streak_badge(habit.streak),
            history: habit
                .recent_history(PREVIEW_DAYS)
                .iter()
                .map(|marker| marker.glyph())
                .collect(),
        }
    }
}
