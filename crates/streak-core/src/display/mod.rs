//! Display formatting and presentation projections.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Everything else here is a wrapper or projection for a particular context:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Rows, Results  │    │   Formatted     │
//! │ (Habit, State)  │───▶│   and Status    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`rows`]: [`HabitRow`], the list projection with `DD Mon` dates and a
//!   seven-marker preview
//! - [`collections`]: [`HabitRows`], the numbered habit list
//! - [`results`]: confirmation messages for add, delete, check-in, main toggle
//! - [`status`]: [`OperationStatus`], the `(success, message)` pair
//! - [`datetime`]: [`ShortDate`]
//!
//! ```rust
//! use streak_core::{display::OperationStatus, HabitError};
//!
//! let status = OperationStatus::from_result::<String>(&Err(HabitError::EmptyName));
//! assert_eq!(status.as_pair(), (false, "Name cannot be empty."));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod rows;
pub mod status;

pub use collections::{HabitRows, PlainHabitRows};
pub use datetime::ShortDate;
pub use results::{CreateResult, DeleteResult, MainHabitResult};
pub use rows::{HabitRow, PREVIEW_DAYS};
pub use status::OperationStatus;
