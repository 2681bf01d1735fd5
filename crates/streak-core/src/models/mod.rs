//! Data models for habits and the registry state.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures separate from
//! presentation.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use streak_core::models::{Habit, Marker};
//!
//! let mut habit = Habit::new("reading", date(2024, 1, 1));
//! habit.history = vec![Marker::Fire, Marker::Ice, Marker::Fire];
//! assert_eq!(habit.recent_history(2), &[Marker::Ice, Marker::Fire]);
//! ```

pub mod habit;
pub mod marker;
pub mod state;

#[cfg(test)]
mod tests;

pub use habit::Habit;
pub use marker::Marker;
pub use state::RegistryState;
