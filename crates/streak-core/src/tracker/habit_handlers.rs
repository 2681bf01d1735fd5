//! Habit handlers that return `(success, message)` statuses for the Tracker.
//!
//! Every mutating operation has a `*_status` counterpart here. Errors are
//! turned into failure statuses instead of being propagated, so interactive
//! callers can print the message and carry on.

use log::warn;

use super::Tracker;
use crate::{
    display::{CreateResult, DeleteResult, MainHabitResult, OperationStatus},
    error::Result,
    params::{CheckInHabits, HabitName, UserName},
};

impl Tracker {
    /// Handle setting the user's display name.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use streak_core::{params::UserName, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let status = tracker
    ///     .set_user_name_status(&UserName { name: "Ada".to_string() })
    ///     .await;
    /// assert!(status.success);
    /// # Result::<(), streak_core::HabitError>::Ok(())
    /// # };
    /// ```
    pub async fn set_user_name_status(&self, params: &UserName) -> OperationStatus {
        let result = self
            .set_user_name(params)
            .await
            .map(|name| format!("Hello, {name}!"));
        report(result)
    }

    /// Handle adding a habit.
    pub async fn add_habit_status(&self, params: &HabitName) -> OperationStatus {
        report(self.add_habit(params).await.map(CreateResult::new))
    }

    /// Handle deleting a habit and its history.
    pub async fn delete_habit_status(&self, params: &HabitName) -> OperationStatus {
        report(self.delete_habit(params).await.map(DeleteResult::new))
    }

    /// Handle checking a habit in for today.
    pub async fn check_in_status(&self, params: &HabitName) -> OperationStatus {
        report(self.check_in(params).await)
    }

    /// Handle checking in several habits. One status per name, in order.
    pub async fn check_in_many_status(&self, params: &CheckInHabits) -> Vec<OperationStatus> {
        self.check_in_many(params)
            .await
            .into_iter()
            .map(report)
            .collect()
    }

    /// Handle flipping a habit's main flag.
    pub async fn toggle_main_habit_status(&self, params: &HabitName) -> OperationStatus {
        report(self.toggle_main_habit(params).await.map(MainHabitResult::new))
    }
}

fn report<T: std::fmt::Display>(result: Result<T>) -> OperationStatus {
    if let Err(e) = &result {
        if e.is_persistence_failure() {
            warn!("operation not saved: {e}");
        }
    }
    OperationStatus::from_result(&result)
}
