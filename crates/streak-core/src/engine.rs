//! Check-in state transitions for a single habit.
//!
//! [`attempt_check_in`] is pure: it inspects a habit and a date and either
//! rejects the check-in or returns a [`CheckInDelta`] describing the change.
//! Applying the delta is a separate step so callers decide when a change is
//! committed.
//!
//! The history holds one marker per calendar day from the first check-in to
//! the latest one. Days skipped between two check-ins are backfilled with
//! [`Marker::Ice`] before the new [`Marker::Fire`] is appended, so the last
//! marker always stands for the check-in date itself.
//!
//! ```rust
//! use jiff::civil::date;
//! use streak_core::{engine, models::{Habit, Marker}};
//!
//! let mut habit = Habit::new("reading", date(2024, 1, 1));
//! engine::attempt_check_in(&habit, date(2024, 1, 1))?.apply(&mut habit);
//! engine::attempt_check_in(&habit, date(2024, 1, 5))?.apply(&mut habit);
//!
//! assert_eq!(habit.history, vec![
//!     Marker::Fire, Marker::Ice, Marker::Ice, Marker::Ice, Marker::Fire,
//! ]);
//! assert_eq!(habit.streak, 1);
//! # Ok::<(), streak_core::HabitError>(())
//! ```

use jiff::civil::Date;
use log::debug;

use crate::{
    calendar,
    error::{HabitError, Result},
    models::{Habit, Marker},
};

/// The change produced by a successful check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInDelta {
    /// Name of the habit being checked in
    pub name: String,
    /// The check-in date
    pub date: Date,
    /// Number of `ICE` markers to backfill before today's `FIRE`
    pub missed_days: u32,
    /// Streak after the check-in
    pub streak: u32,
}

impl CheckInDelta {
    /// Applies the change: backfill, append today's marker, update streak and
    /// last check-in date.
    pub fn apply(&self, habit: &mut Habit) {
        habit
            .history
            .extend(std::iter::repeat(Marker::Ice).take(self.missed_days as usize));
        habit.history.push(Marker::Fire);
        habit.streak = self.streak;
        habit.last_check_in_date = Some(self.date);
    }

    /// Confirmation text for the user.
    pub fn message(&self) -> String {
        let days = if self.streak == 1 { "day" } else { "days" };
        match self.missed_days {
            0 => format!(
                "Checked in '{}'. Streak: {} {days}.",
                self.name, self.streak
            ),
            missed => format!(
                "Checked in '{}' after {missed} missed day(s). Streak: {} {days}.",
                self.name, self.streak
            ),
        }
    }
}

/// Decides the outcome of checking `habit` in on `today`.
///
/// # Errors
///
/// - [`HabitError::AlreadyCheckedIn`] if the habit was already checked in on
///   `today`
/// - [`HabitError::CheckInBeforeLastCheckIn`] if `today` precedes the last
///   check-in
pub fn attempt_check_in(habit: &Habit, today: Date) -> Result<CheckInDelta> {
    let Some(last) = habit.last_check_in_date else {
        debug!("first check-in for '{}' on {today}", habit.name);
        return Ok(CheckInDelta {
            name: habit.name.clone(),
            date: today,
            missed_days: 0,
            streak: habit.streak.saturating_add(1),
        });
    };

    if habit.is_checked_in_on(today) {
        return Err(HabitError::AlreadyCheckedIn {
            name: habit.name.clone(),
            date: today,
        });
    }
    if today < last {
        return Err(HabitError::CheckInBeforeLastCheckIn {
            name: habit.name.clone(),
            last,
            today,
        });
    }

    // Non-negative after the guards above, and jiff's date range fits in u32.
    let missed_days = u32::try_from(calendar::days_between(last, today) - 1).unwrap_or(u32::MAX);

    let mut streak = habit.streak;
    if missed_days > 0 {
        streak = 0;
    }

    // The marker preceding today's entry: a backfilled day, or whatever was
    // recorded last.
    let preceding = if missed_days > 0 {
        Some(Marker::Ice)
    } else {
        habit.last_marker()
    };
    if preceding == Some(Marker::Ice) {
        streak = 0;
    }

    debug!(
        "check-in for '{}' on {today}: {missed_days} missed day(s), streak {} -> {}",
        habit.name,
        habit.streak,
        streak + 1
    );

    Ok(CheckInDelta {
        name: habit.name.clone(),
        date: today,
        missed_days,
        streak: streak.saturating_add(1),
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn check_in(habit: &mut Habit, today: Date) -> Result<CheckInDelta> {
        let delta = attempt_check_in(habit, today)?;
        delta.apply(habit);
        Ok(delta)
    }

    #[test]
    fn test_first_check_in_never_backfills() {
        // Created long before the first check-in: still no ICE.
        let mut habit = Habit::new("reading", date(2023, 6, 1));
        let delta = check_in(&mut habit, date(2024, 1, 1)).unwrap();

        assert_eq!(delta.missed_days, 0);
        assert_eq!(habit.history, vec![Marker::Fire]);
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.last_check_in_date, Some(date(2024, 1, 1)));
    }

    #[test]
    fn test_gap_backfills_ice_and_resets_streak() {
        let mut habit = Habit::new("reading", date(2024, 1, 1));
        check_in(&mut habit, date(2024, 1, 1)).unwrap();
        let delta = check_in(&mut habit, date(2024, 1, 5)).unwrap();

        assert_eq!(delta.missed_days, 3);
        assert_eq!(
            habit.history,
            vec![
                Marker::Fire,
                Marker::Ice,
                Marker::Ice,
                Marker::Ice,
                Marker::Fire
            ]
        );
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.last_check_in_date, Some(date(2024, 1, 5)));
    }

    #[test]
    fn test_consecutive_days_build_streak() {
        let mut habit = Habit::new("walk", date(2024, 1, 1));
        for day in 1..=5 {
            check_in(&mut habit, date(2024, 1, day)).unwrap();
        }

        assert_eq!(habit.streak, 5);
        assert_eq!(habit.history, vec![Marker::Fire; 5]);
    }

    #[test]
    fn test_next_day_adds_exactly_one_fire() {
        let mut habit = Habit::new("walk", date(2024, 1, 1));
        check_in(&mut habit, date(2024, 1, 30)).unwrap();
        check_in(&mut habit, date(2024, 1, 31)).unwrap();
        let before = habit.clone();

        check_in(&mut habit, date(2024, 2, 1)).unwrap();

        assert_eq!(habit.streak, before.streak + 1);
        assert_eq!(habit.history.len(), before.history.len() + 1);
        assert_eq!(habit.last_marker(), Some(Marker::Fire));
    }

    #[test]
    fn test_any_gap_grows_history_by_missed_plus_one() {
        for gap in 2..=10_i8 {
            let mut habit = Habit::new("stretch", date(2024, 3, 1));
            check_in(&mut habit, date(2024, 3, 1)).unwrap();
            check_in(&mut habit, date(2024, 3, 2)).unwrap();
            let before = habit.history.len();

            let delta = check_in(&mut habit, date(2024, 3, 2 + gap)).unwrap();

            let missed = (gap - 1) as usize;
            assert_eq!(delta.missed_days as usize, missed);
            assert_eq!(habit.history.len(), before + missed + 1);
            assert_eq!(habit.streak, 1);
        }
    }

    #[test]
    fn test_same_day_is_rejected_without_change() {
        let mut habit = Habit::new("reading", date(2024, 1, 1));
        check_in(&mut habit, date(2024, 1, 1)).unwrap();
        let before = habit.clone();

        for _ in 0..2 {
            let err = attempt_check_in(&habit, date(2024, 1, 1)).unwrap_err();
            assert!(matches!(err, HabitError::AlreadyCheckedIn { .. }));
            assert_eq!(habit, before);
        }
    }

    #[test]
    fn test_earlier_date_is_rejected() {
        let mut habit = Habit::new("reading", date(2024, 1, 1));
        check_in(&mut habit, date(2024, 1, 10)).unwrap();

        let err = attempt_check_in(&habit, date(2024, 1, 9)).unwrap_err();
        assert!(matches!(err, HabitError::CheckInBeforeLastCheckIn { .. }));
    }

    #[test]
    fn test_trailing_ice_breaks_streak_without_gap() {
        // Inconsistent history: yesterday recorded as ICE with a live streak.
        let mut habit = Habit::new("reading", date(2024, 1, 1));
        habit.history = vec![Marker::Fire, Marker::Ice];
        habit.streak = 4;
        habit.last_check_in_date = Some(date(2024, 1, 2));

        let delta = attempt_check_in(&habit, date(2024, 1, 3)).unwrap();
        assert_eq!(delta.missed_days, 0);
        assert_eq!(delta.streak, 1);
    }

    #[test]
    fn test_long_gap_counts_every_missed_day() {
        let mut habit = Habit::new("reading", date(1900, 1, 1));
        check_in(&mut habit, date(1900, 1, 1)).unwrap();
        habit.streak = 30;

        // 200 years with 49 leap days.
        let delta = attempt_check_in(&habit, date(2100, 1, 1)).unwrap();
        assert_eq!(delta.missed_days, 73_048);
        assert_eq!(delta.streak, 1);
    }

    #[test]
    fn test_message_mentions_missed_days() {
        let mut habit = Habit::new("reading", date(2024, 1, 1));
        let first = check_in(&mut habit, date(2024, 1, 1)).unwrap();
        assert_eq!(first.message(), "Checked in 'reading'. Streak: 1 day.");

        let second = check_in(&mut habit, date(2024, 1, 4)).unwrap();
        assert!(second.message().contains("after 2 missed day(s)"));
    }
}
