//! Parameter structures shared by every interface.
//!
//! The CLI wraps these in clap `Args` types and converts with `From`; the MCP
//! server deserializes them directly, with JSON schemas generated when the
//! `schema` feature is enabled. The core types carry no framework derives
//! beyond serde.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for operations addressing one habit by name.
///
/// Used for add, delete, check-in and main-habit selection. Names are
/// matched case-insensitively after trimming.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct HabitName {
    /// Name of the habit
    pub name: String,
}

impl HabitName {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Parameters for setting the user's display name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UserName {
    /// Display name; surrounding whitespace is dropped
    pub name: String,
}

/// Parameters for checking in several habits at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CheckInHabits {
    /// Names of the habits to check in
    pub names: Vec<String>,
}

/// A numbered selection typed into the interactive menu (1-based).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuChoice {
    /// Raw text entered by the user
    pub choice: String,
}

impl MenuChoice {
    pub fn new(choice: impl Into<String>) -> Self {
        Self {
            choice: choice.into(),
        }
    }
}
