//! Command-line arguments using clap's derive API.
//!
//! Argument structs wrap the core parameter types and convert with `From`,
//! so clap attributes never leak into `streak-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::Date;
use streak_core::{
    params::{CheckInHabits, HabitName, UserName},
    Backend,
};

/// Track daily habits and keep your streaks alive.
///
/// Each habit keeps one marker per day: 🔥 for a check-in, 🧊 for a missed
/// day. Missed days are filled in the next time you check in. Run without a
/// subcommand to see the current status.
#[derive(Parser)]
#[command(version, about, name = "streak")]
pub struct Args {
    /// Path to the data file. Defaults to $XDG_DATA_HOME/streak/habits.json
    /// (or habits.db for the SQLite backend)
    #[arg(long, global = true, env = "STREAK_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Storage backend: json or sqlite
    #[arg(long, global = true, env = "STREAK_BACKEND", default_value_t = Backend::Json)]
    pub backend: Backend,

    /// Record check-ins and new habits under this date (YYYY-MM-DD) instead
    /// of today
    #[arg(long, global = true, env = "STREAK_TODAY")]
    pub today: Option<Date>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the streak CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Set your display name
    User(UserArgs),
    /// Add a new habit
    #[command(alias = "a")]
    Add(HabitArgs),
    /// Delete a habit and its whole history
    #[command(alias = "rm")]
    Delete(HabitArgs),
    /// Check in one or more habits for today
    #[command(alias = "ci")]
    CheckIn(CheckInArgs),
    /// Make a habit your main habit, or unmark it if it already is
    Main(HabitArgs),
    /// Show all habits with their streaks and last seven days
    #[command(alias = "s")]
    Status,
    /// Interactive menu
    #[command(alias = "m")]
    Menu,
    /// Start the MCP server
    Serve,
}

#[derive(ClapArgs)]
pub struct UserArgs {
    /// Name to greet you with
    pub name: String,
}

impl From<UserArgs> for UserName {
    fn from(val: UserArgs) -> Self {
        UserName { name: val.name }
    }
}

/// A single habit, addressed by name (case-insensitive)
#[derive(ClapArgs)]
pub struct HabitArgs {
    #[arg(help = "Name of the habit")]
    pub name: String,
}

impl From<HabitArgs> for HabitName {
    fn from(val: HabitArgs) -> Self {
        HabitName { name: val.name }
    }
}

#[derive(ClapArgs)]
pub struct CheckInArgs {
    #[arg(required = true, help = "Names of the habits completed today")]
    pub names: Vec<String>,
}

impl From<CheckInArgs> for CheckInHabits {
    fn from(val: CheckInArgs) -> Self {
        CheckInHabits { names: val.names }
    }
}
