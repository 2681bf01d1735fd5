//! Core library for the Streak habit tracker.
//!
//! This crate holds the check-in state machine, the habit registry and the
//! persistence adapters. Presentation layers (the CLI, the MCP server) sit on
//! top of [`Tracker`] and only ever see domain values or
//! [`OperationStatus`] pairs.
//!
//! # Layers
//!
//! - **Engine** ([`engine`]): pure check-in transitions for one habit
//! - **Registry** ([`registry`]): add, delete, check-in and main-habit
//!   operations over an in-memory [`RegistryState`]
//! - **Stores** ([`store`]): load and save the whole state, as JSON or SQLite
//! - **Tracker** ([`tracker`]): async facade running one load, operation and
//!   save per call
//! - **Display** ([`display`]): row projections and confirmation messages
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use streak_core::{Marker, RegistryState};
//!
//! let mut state = RegistryState::default();
//! state.add_habit("Reading", date(2024, 1, 1))?;
//! state.check_in("reading", date(2024, 1, 1))?;
//! let check_in = state.check_in("reading", date(2024, 1, 3))?;
//!
//! assert_eq!(check_in.habit.history, vec![Marker::Fire, Marker::Ice, Marker::Fire]);
//! assert_eq!(check_in.habit.streak, 1);
//! # Ok::<(), streak_core::HabitError>(())
//! ```

pub mod calendar;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod registry;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use db::Database;
pub use display::{HabitRow, HabitRows, OperationStatus};
pub use engine::CheckInDelta;
pub use error::{HabitError, Result};
pub use models::{Habit, Marker, RegistryState};
pub use params::{CheckInHabits, HabitName, MenuChoice, UserName};
pub use registry::CheckIn;
pub use store::{Backend, JsonStore, SqliteStore, Store};
pub use tracker::{Tracker, TrackerBuilder};
