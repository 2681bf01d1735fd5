//! History markers recorded for each calendar day of a habit.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Outcome of one calendar day.
///
/// Older data files stored the emoji glyphs directly; both spellings are
/// accepted when reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The habit was checked in on that day
    #[serde(rename = "FIRE", alias = "fire", alias = "🔥")]
    Fire,

    /// The day passed without a check-in
    #[serde(rename = "ICE", alias = "ice", alias = "🧊")]
    Ice,
}

impl FromStr for Marker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "🔥" => Ok(Marker::Fire),
            "🧊" => Ok(Marker::Ice),
            other => match other.to_lowercase().as_str() {
                "fire" => Ok(Marker::Fire),
                "ice" => Ok(Marker::Ice),
                _ => Err(format!("Invalid history marker: {s}")),
            },
        }
    }
}

impl Marker {
    /// Database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::Fire => "fire",
            Marker::Ice => "ice",
        }
    }

    /// Glyph used in history previews.
    pub fn glyph(&self) -> &'static str {
        match self {
            Marker::Fire => "🔥",
            Marker::Ice => "🧊",
        }
    }
}
