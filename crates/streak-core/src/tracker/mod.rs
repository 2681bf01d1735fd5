//! High-level async API over a [`Store`].
//!
//! The [`Tracker`] is what presentation layers (CLI, MCP server) talk to.
//! Every public operation is one atomic unit:
//!
//! ```text
//! load full state ──▶ registry operation on a working copy ──▶ save
//! ```
//!
//! If the operation is rejected nothing is saved. If the save fails the error
//! is returned and the working copy is dropped, so the next operation starts
//! again from what is actually stored.
//!
//! Storage calls are blocking and run on tokio's blocking pool.
//!
//! ```rust,no_run
//! use streak_core::{params::HabitName, Backend, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_backend(Backend::Json)
//!     .with_data_path(Some("habits.json"))
//!     .build()
//!     .await?;
//!
//! tracker.add_habit(&HabitName::new("reading")).await?;
//! let check_in = tracker.check_in(&HabitName::new("reading")).await?;
//! println!("{}", check_in.delta.message());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use jiff::civil::Date;
use tokio::task;

use crate::{
    calendar,
    error::{HabitError, Result},
    models::RegistryState,
    store::Store,
};

pub mod builder;
pub mod habit_handlers;
pub mod habit_ops;


pub use builder::TrackerBuilder;

/// Async facade that runs registry operations against a store.
pub struct Tracker {
    store: Arc<dyn Store>,
    today: Option<Date>,
}

impl Tracker {
    pub(crate) fn new(store: Arc<dyn Store>, today: Option<Date>) -> Self {
        Self { store, today }
    }

    /// The date check-ins and new habits are recorded under.
    pub fn today(&self) -> Date {
        self.today.unwrap_or_else(calendar::today)
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Loads the state, applies `op` and saves the result.
    async fn transact<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut RegistryState) -> Result<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || {
            let mut state = store.load()?;
            let value = op(&mut state)?;
            store.save(&state)?;
            Ok(value)
        })
        .await
        .map_err(join_error)?
    }

    /// Loads the state and reads from it without saving.
    async fn read<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&RegistryState) -> Result<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || op(&store.load()?))
            .await
            .map_err(join_error)?
    }
}

fn join_error(e: task::JoinError) -> HabitError {
    HabitError::Configuration {
        message: format!("Task join error: {e}"),
    }
}
