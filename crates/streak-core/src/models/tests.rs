#[cfg(test)]
mod model_tests {
    use jiff::civil::date;

    use crate::models::{Habit, Marker, RegistryState};

    fn create_test_habit() -> Habit {
        let mut habit = Habit::new("reading", date(2024, 1, 1));
        habit.last_check_in_date = Some(date(2024, 1, 5));
        habit.history = vec![
            Marker::Fire,
            Marker::Ice,
            Marker::Ice,
            Marker::Ice,
            Marker::Fire,
        ];
        habit.streak = 1;
        habit
    }

    #[test]
    fn test_new_habit_is_blank() {
        let habit = Habit::new("x", date(2024, 1, 1));
        assert_eq!(habit.streak, 0);
        assert!(habit.history.is_empty());
        assert!(habit.last_check_in_date.is_none());
        assert!(!habit.is_main);
    }

    #[test]
    fn test_recent_history_windows() {
        let habit = create_test_habit();
        assert_eq!(habit.recent_history(7).len(), 5);
        assert_eq!(habit.recent_history(2), &[Marker::Ice, Marker::Fire]);
        assert!(habit.recent_history(0).is_empty());
        assert_eq!(habit.last_marker(), Some(Marker::Fire));
    }

    #[test]
    fn test_state_serializes_with_keyed_habits() {
        let mut state = RegistryState::default();
        state.user = Some("Ada".to_string());
        state.last_check_in_date = Some(date(2024, 1, 5));
        state
            .habits
            .insert("reading".to_string(), create_test_habit());

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["user"], "Ada");
        assert_eq!(json["last_check_in_date"], "2024-01-05");

        let reading = &json["habits"]["reading"];
        assert_eq!(reading["creation_date"], "2024-01-01");
        assert_eq!(reading["history"][0], "FIRE");
        assert_eq!(reading["history"][1], "ICE");
        assert_eq!(reading["streak"], 1);
        assert_eq!(reading["is_main"], false);
        assert!(reading.get("name").is_none());
    }

    #[test]
    fn test_state_deserialization_fills_names() {
        let json = r#"{
            "user": null,
            "last_check_in_date": null,
            "habits": {
                "walk": {
                    "creation_date": "2024-02-01",
                    "last_check_in_date": null,
                    "history": [],
                    "streak": 0,
                    "is_main": true
                }
            }
        }"#;
        let state: RegistryState = serde_json::from_str(json).unwrap();
        let walk = state.habit("walk").unwrap();
        assert_eq!(walk.name, "walk");
        assert_eq!(walk.creation_date, date(2024, 2, 1));
        assert_eq!(state.main_habit().map(|h| h.name.as_str()), Some("walk"));
    }

    #[test]
    fn test_legacy_document_is_accepted() {
        let json = r#"{
            "user": "Sam",
            "last_date": "2024-03-02",
            "habits": {
                "gym": {
                    "start_date": "2024-03-01",
                    "last_date": "2024-03-02",
                    "history": ["🔥", "🧊"],
                    "streak": 0,
                    "is_main": false
                }
            }
        }"#;
        let state: RegistryState = serde_json::from_str(json).unwrap();
        assert_eq!(state.last_check_in_date, Some(date(2024, 3, 2)));
        let gym = state.habit("gym").unwrap();
        assert_eq!(gym.creation_date, date(2024, 3, 1));
        assert_eq!(gym.history, vec![Marker::Fire, Marker::Ice]);
    }

    #[test]
    fn test_null_habits_read_as_empty() {
        let state: RegistryState =
            serde_json::from_str(r#"{"user": null, "last_date": null, "habits": null}"#).unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn test_marker_parsing() {
        assert_eq!("fire".parse::<Marker>(), Ok(Marker::Fire));
        assert_eq!("ICE".parse::<Marker>(), Ok(Marker::Ice));
        assert_eq!("🔥".parse::<Marker>(), Ok(Marker::Fire));
        assert!("snow".parse::<Marker>().is_err());
        assert_eq!(Marker::Ice.as_str(), "ice");
        assert_eq!(Marker::Fire.glyph(), "🔥");
    }
}
