mod common;

use common::{create_test_tracker, day, tracker_at};
use streak_core::{Backend, HabitError, HabitName, Marker};
use tempfile::TempDir;

#[tokio::test]
async fn test_first_check_in_records_fire() {
    let (_temp_dir, tracker) = create_test_tracker(Backend::Json, day(1)).await;
    tracker.add_habit(&HabitName::new("x")).await.unwrap();

    let habit = tracker.check_in(&HabitName::new("x")).await.unwrap().habit;
    assert_eq!(habit.history, vec![Marker::Fire]);
    assert_eq!(habit.streak, 1);
    assert_eq!(habit.last_check_in_date, Some(day(1)));
}

#[tokio::test]
async fn test_gap_is_backfilled_with_ice() {
    for backend in [Backend::Json, Backend::Sqlite] {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let tracker = tracker_at(temp_dir.path(), backend, day(1)).await;
        tracker.add_habit(&HabitName::new("x")).await.unwrap();
        tracker.check_in(&HabitName::new("x")).await.unwrap();

        let tracker = tracker_at(temp_dir.path(), backend, day(5)).await;
        let check_in = tracker.check_in(&HabitName::new("x")).await.unwrap();
        assert_eq!(
            check_in.habit.history,
            vec![Marker::Fire, Marker::Ice, Marker::Ice, Marker::Ice, Marker::Fire]
        );
        assert_eq!(check_in.habit.streak, 1);
        assert_eq!(
            check_in.to_string(),
            "Checked in 'x' after 3 missed day(s). Streak: 1 day."
        );
    }
}

#[tokio::test]
async fn test_five_consecutive_days() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    tracker_at(temp_dir.path(), Backend::Sqlite, day(1))
        .await
        .add_habit(&HabitName::new("x"))
        .await
        .unwrap();

    for d in 1..=5 {
        let tracker = tracker_at(temp_dir.path(), Backend::Sqlite, day(d)).await;
        tracker.check_in(&HabitName::new("x")).await.unwrap();
    }

    let tracker = tracker_at(temp_dir.path(), Backend::Sqlite, day(5)).await;
    let state = tracker.state().await.unwrap();
    let habit = state.habit("x").unwrap();
    assert_eq!(habit.streak, 5);
    assert_eq!(habit.history.len(), 5);
    assert!(habit.history.iter().all(|m| *m == Marker::Fire));
}

#[tokio::test]
async fn test_add_delete_check_in() {
    let (_temp_dir, tracker) = create_test_tracker(Backend::Json, day(1)).await;
    tracker.add_habit(&HabitName::new("x")).await.unwrap();
    tracker.delete_habit(&HabitName::new("x")).await.unwrap();

    let err = tracker.check_in(&HabitName::new("x")).await.unwrap_err();
    assert!(matches!(err, HabitError::HabitNotFound { .. }));
    assert!(!err.is_persistence_failure());
}

#[tokio::test]
async fn test_check_in_before_last_check_in_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = tracker_at(temp_dir.path(), Backend::Json, day(5)).await;
    tracker.add_habit(&HabitName::new("x")).await.unwrap();
    tracker.check_in(&HabitName::new("x")).await.unwrap();

    let earlier = tracker_at(temp_dir.path(), Backend::Json, day(3)).await;
    let status = earlier.check_in_status(&HabitName::new("x")).await;
    assert_eq!(
        status.as_pair(),
        (
            false,
            "Cannot check in 'x' on 2024-01-03: last check-in was 2024-01-05."
        )
    );

    let habit = earlier.state().await.unwrap().habit("x").cloned().unwrap();
    assert_eq!(habit.history, vec![Marker::Fire]);
}

#[tokio::test]
async fn test_status_messages() {
    let (_temp_dir, tracker) = create_test_tracker(Backend::Sqlite, day(1)).await;

    let status = tracker.add_habit_status(&HabitName::new("  Read ")).await;
    assert_eq!(status.as_pair(), (true, "Habit 'read' added."));

    let status = tracker.add_habit_status(&HabitName::new("READ")).await;
    assert_eq!(status.as_pair(), (false, "Habit 'read' already exists."));

    let status = tracker.add_habit_status(&HabitName::new("   ")).await;
    assert_eq!(status.as_pair(), (false, "Name cannot be empty."));

    let status = tracker.delete_habit_status(&HabitName::new("read")).await;
    assert_eq!(status.as_pair(), (true, "Habit 'read' deleted."));

    let status = tracker.delete_habit_status(&HabitName::new("read")).await;
    assert_eq!(status.as_pair(), (false, "Habit 'read' not found."));
}
