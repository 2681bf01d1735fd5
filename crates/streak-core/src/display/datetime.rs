//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// Formats an optional date as `DD Mon` (e.g. `05 Jan`), or `-` when absent.
///
/// ```rust
/// use jiff::civil::date;
/// use streak_core::display::ShortDate;
///
/// assert_eq!(ShortDate(Some(date(2024, 1, 5))).to_string(), "05 Jan");
/// assert_eq!(ShortDate(None).to_string(), "-");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortDate(pub Option<Date>);

impl fmt::Display for ShortDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.strftime("%d %b")),
            None => f.write_str("-"),
        }
    }
}
