use std::path::Path;

use jiff::civil::{date, Date};
use streak_core::{Backend, Tracker, TrackerBuilder};
use tempfile::TempDir;

#[allow(dead_code)]
pub fn day(d: i8) -> Date {
    date(2024, 1, d)
}

/// Helper function to create a tracker over a data file in `dir`
#[allow(dead_code)]
pub async fn tracker_at(dir: &Path, backend: Backend, today: Date) -> Tracker {
    TrackerBuilder::new()
        .with_backend(backend)
        .with_data_path(Some(dir.join(backend.default_file_name())))
        .with_today(Some(today))
        .build()
        .await
        .expect("Failed to create tracker")
}

/// Helper function to create a test tracker in a fresh directory
#[allow(dead_code)]
pub async fn create_test_tracker(backend: Backend, today: Date) -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = tracker_at(temp_dir.path(), backend, today).await;
    (temp_dir, tracker)
}
