//! Command handlers for the streak CLI.
//!
//! Each handler runs one tracker operation and renders its
//! `(success, message)` status. A failed operation turns into an error so
//! the process exits non-zero.

use anyhow::{bail, Result};
use log::debug;
use streak_core::{
    display::HabitRows,
    params::{CheckInHabits, HabitName, UserName},
    OperationStatus, Tracker,
};

use crate::renderer::TerminalRenderer;

pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn into_tracker(self) -> Tracker {
        self.tracker
    }

    pub async fn set_user(&self, params: &UserName) -> Result<()> {
        self.report(self.tracker.set_user_name_status(params).await)
    }

    pub async fn add_habit(&self, params: &HabitName) -> Result<()> {
        self.report(self.tracker.add_habit_status(params).await)
    }

    pub async fn delete_habit(&self, params: &HabitName) -> Result<()> {
        self.report(self.tracker.delete_habit_status(params).await)
    }

    pub async fn toggle_main_habit(&self, params: &HabitName) -> Result<()> {
        self.report(self.tracker.toggle_main_habit_status(params).await)
    }

    /// Checks in every named habit, reporting each one. Fails if any did.
    pub async fn check_in(&self, params: &CheckInHabits) -> Result<()> {
        let statuses = self.tracker.check_in_many_status(params).await;
        let failed = statuses.iter().filter(|s| !s.success).count();
        for status in &statuses {
            self.renderer.render_status(status)?;
        }

        if failed > 0 {
            bail!("{failed} of {} check-in(s) failed", statuses.len());
        }
        Ok(())
    }

    pub async fn status(&self) -> Result<()> {
        let state = self.tracker.state().await?;
        debug!("showing status for {} habit(s)", state.len());

        let title = match &state.user {
            Some(user) => format!("{user}'s habits"),
            None => "Habits".to_string(),
        };
        let rows = HabitRows::from(&state);
        self.renderer.render(&format!("# {title}\n\n{rows}"))
    }

    fn report(&self, status: OperationStatus) -> Result<()> {
        self.renderer.render_status(&status)?;
        if !status.success {
            bail!("{}", status.message);
        }
        Ok(())
    }
}
