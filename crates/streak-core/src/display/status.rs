//! Success/failure messages returned to callers.

use std::fmt;

use crate::error::HabitError;

/// The `(success, message)` pair every mutating operation reports.
///
/// Presentation layers build one from an operation's result and show the
/// message directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// Success with the value's display text, or failure with the error's.
    pub fn from_result<T: fmt::Display>(result: &Result<T, HabitError>) -> Self {
        match result {
            Ok(value) => Self::success(value.to_string()),
            Err(e) => Self::failure(e.to_string()),
        }
    }

    pub fn as_pair(&self) -> (bool, &str) {
        (self.success, &self.message)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Operation completed".to_string());
        assert!(format!("{success}").contains("Success:"));

        let failure = OperationStatus::failure("Operation failed".to_string());
        assert!(format!("{failure}").contains("Error:"));
    }

    #[test]
    fn test_from_result() {
        let ok: Result<&str, HabitError> = Ok("Habit 'x' added.");
        assert_eq!(
            OperationStatus::from_result(&ok).as_pair(),
            (true, "Habit 'x' added.")
        );

        let err: Result<&str, HabitError> = Err(HabitError::EmptyName);
        assert_eq!(
            OperationStatus::from_result(&err).as_pair(),
            (false, "Name cannot be empty.")
        );
    }
}
