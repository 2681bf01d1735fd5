//! Calendar helpers: the current local date and whole-day arithmetic.
//!
//! Dates carry no time-of-day or timezone. They serialize as ISO-8601
//! calendar dates (`YYYY-MM-DD`) through jiff's serde support.

use jiff::{civil::Date, Span, Zoned};

use crate::error::Result;

/// Today's date in the system timezone.
pub fn today() -> Date {
    Zoned::now().date()
}

/// Signed number of calendar days from `a` to `b` (`b - a`).
pub fn days_between(a: Date, b: Date) -> i64 {
    i64::from((b - a).get_days())
}

/// The date `days` calendar days before `date`.
pub fn days_before(date: Date, days: i64) -> Result<Date> {
    Ok(date.checked_sub(Span::new().try_days(days)?)?)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_days_between_is_signed() {
        let a = date(2024, 1, 1);
        let b = date(2024, 1, 5);
        assert_eq!(days_between(a, b), 4);
        assert_eq!(days_between(b, a), -4);
        assert_eq!(days_between(a, a), 0);
    }

    #[test]
    fn test_days_between_crosses_month_and_leap_day() {
        assert_eq!(days_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(days_between(date(2023, 12, 31), date(2024, 1, 1)), 1);
    }

    #[test]
    fn test_days_before() {
        assert_eq!(
            days_before(date(2024, 3, 1), 2).unwrap(),
            date(2024, 2, 28)
        );
        assert_eq!(days_before(date(2024, 3, 1), 0).unwrap(), date(2024, 3, 1));
    }
}
