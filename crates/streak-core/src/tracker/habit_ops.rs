//! Habit operations for the Tracker.

use log::info;

use super::Tracker;
use crate::{
    display::HabitRows,
    error::{HabitError, Result},
    models::{Habit, RegistryState},
    params::{CheckInHabits, HabitName, MenuChoice, UserName},
    registry::{normalize_name, CheckIn},
};

impl Tracker {
    /// Sets the display name. Returns the stored (trimmed) name.
    pub async fn set_user_name(&self, params: &UserName) -> Result<String> {
        let name = params.name.clone();
        let stored = self
            .transact(move |state| state.set_user_name(&name))
            .await?;
        info!("user name set to '{stored}'");
        Ok(stored)
    }

    /// Adds a habit created today.
    pub async fn add_habit(&self, params: &HabitName) -> Result<Habit> {
        let name = params.name.clone();
        let today = self.today();
        let habit = self
            .transact(move |state| state.add_habit(&name, today))
            .await?;
        info!("added habit '{}'", habit.name);
        Ok(habit)
    }

    /// Permanently deletes a habit and its history. Returns what was removed.
    pub async fn delete_habit(&self, params: &HabitName) -> Result<Habit> {
        let name = params.name.clone();
        let habit = self
            .transact(move |state| state.delete_habit(&name))
            .await?;
        info!("deleted habit '{}'", habit.name);
        Ok(habit)
    }

    /// Checks a habit in for today.
    pub async fn check_in(&self, params: &HabitName) -> Result<CheckIn> {
        let name = params.name.clone();
        let today = self.today();
        let check_in = self
            .transact(move |state| state.check_in(&name, today))
            .await?;
        info!(
            "checked in '{}' (streak {})",
            check_in.habit.name, check_in.habit.streak
        );
        Ok(check_in)
    }

    /// Checks in several habits, each as its own unit. One failure does not
    /// stop the others.
    pub async fn check_in_many(&self, params: &CheckInHabits) -> Vec<Result<CheckIn>> {
        let mut results = Vec::with_capacity(params.names.len());
        for name in &params.names {
            results.push(self.check_in(&HabitName::new(name.as_str())).await);
        }
        results
    }

    /// Makes a habit the only main habit.
    pub async fn set_main_habit(&self, params: &HabitName) -> Result<Habit> {
        let name = params.name.clone();
        self.transact(move |state| {
            state.set_main_habit(&name)?;
            updated_habit(state, &name)
        })
        .await
    }

    /// Clears the main flag on a habit.
    pub async fn clear_main_habit(&self, params: &HabitName) -> Result<Habit> {
        let name = params.name.clone();
        self.transact(move |state| {
            state.clear_main_habit(&name)?;
            updated_habit(state, &name)
        })
        .await
    }

    /// Flips the main flag on a habit. The returned habit's `is_main` tells
    /// which way it went.
    pub async fn toggle_main_habit(&self, params: &HabitName) -> Result<Habit> {
        let name = params.name.clone();
        self.transact(move |state| {
            state.toggle_main_habit(&name)?;
            updated_habit(state, &name)
        })
        .await
    }

    /// Current state as stored.
    pub async fn state(&self) -> Result<RegistryState> {
        self.read(|state| Ok(state.clone())).await
    }

    /// Display rows for every habit, in listing order.
    pub async fn habit_rows(&self) -> Result<HabitRows> {
        self.read(|state| Ok(HabitRows::from(state))).await
    }

    /// Resolves a numbered menu choice to a habit name.
    pub async fn habit_name_at(&self, params: &MenuChoice) -> Result<String> {
        let choice = params.choice.clone();
        self.read(move |state| state.habit_name_at(&choice)).await
    }
}

fn updated_habit(state: &RegistryState, name: &str) -> Result<Habit> {
    let name = normalize_name(name)?;
    state
        .habit(&name)
        .cloned()
        .ok_or_else(|| HabitError::not_found(name))
}
