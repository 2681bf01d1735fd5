//! Whole-state load and save.

use jiff::civil::Date;
use log::debug;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    calendar,
    error::{DatabaseResultExt, HabitError, Result},
    models::{Habit, Marker, RegistryState},
    registry,
};

const SELECT_USER_SQL: &str = "SELECT id, name, last_check_in_date FROM users ORDER BY id LIMIT 1";
const INSERT_USER_SQL: &str = "INSERT INTO users (name, last_check_in_date) VALUES (?1, ?2)";
const UPDATE_USER_SQL: &str = "UPDATE users SET name = ?1, last_check_in_date = ?2 WHERE id = ?3";
const SELECT_HABITS_SQL: &str = "SELECT id, name, creation_date, last_check_in_date, streak, is_main FROM habits WHERE user_id = ?1 ORDER BY name";
const SELECT_EVENTS_SQL: &str =
    "SELECT event_type FROM habit_events WHERE habit_id = ?1 ORDER BY event_date ASC";
const DELETE_HABITS_SQL: &str = "DELETE FROM habits WHERE user_id = ?1";
const INSERT_HABIT_SQL: &str = "INSERT INTO habits (user_id, name, creation_date, last_check_in_date, streak, is_main) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const INSERT_EVENT_SQL: &str =
    "INSERT INTO habit_events (habit_id, event_date, event_type) VALUES (?1, ?2, ?3)";

/// Reads an ISO date column.
fn date_column(row: &Row, index: usize) -> rusqlite::Result<Date> {
    row.get::<_, String>(index)?
        .parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn optional_date_column(row: &Row, index: usize) -> rusqlite::Result<Option<Date>> {
    match row.get::<_, Option<String>>(index)? {
        Some(value) => value.parse::<Date>().map(Some).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
        }),
        None => Ok(None),
    }
}

impl super::Database {
    /// Helper function to construct a Habit (without history) from a row
    fn build_habit_from_row(row: &Row) -> rusqlite::Result<(i64, Habit)> {
        let streak: i64 = row.get(4)?;
        let streak = u32::try_from(streak).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Integer, Box::new(e))
        })?;

        let habit = Habit {
            name: row.get(1)?,
            creation_date: date_column(row, 2)?,
            last_check_in_date: optional_date_column(row, 3)?,
            history: Vec::new(),
            streak,
            is_main: row.get(5)?,
        };
        Ok((row.get(0)?, habit))
    }

    /// Loads the full registry state.
    ///
    /// An empty database (no user row) yields the default state.
    pub fn load_state(&self) -> Result<RegistryState> {
        let user = self
            .connection
            .query_row(SELECT_USER_SQL, [], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    optional_date_column(row, 2)?,
                ))
            })
            .optional()
            .db_context("Failed to query user")?;

        let Some((user_id, name, last_check_in_date)) = user else {
            return Ok(RegistryState::default());
        };

        let mut stmt = self
            .connection
            .prepare(SELECT_HABITS_SQL)
            .db_context("Failed to prepare habit query")?;
        let rows = stmt
            .query_map(params![user_id], Self::build_habit_from_row)
            .db_context("Failed to query habits")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read habit row")?;

        let mut events = self
            .connection
            .prepare(SELECT_EVENTS_SQL)
            .db_context("Failed to prepare event query")?;

        let mut records = Vec::with_capacity(rows.len());
        for (habit_id, mut habit) in rows {
            habit.history = events
                .query_map(params![habit_id], |row| {
                    let kind: String = row.get(0)?;
                    kind.parse::<Marker>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(0, Type::Text, e.into())
                    })
                })
                .db_context("Failed to query habit events")?
                .collect::<rusqlite::Result<Vec<_>>>()
                .db_context("Failed to read habit event")?;
            records.push((habit.name.clone(), habit));
        }
        let habits = registry::index_habits(records);

        debug!("loaded {} habit(s) from database", habits.len());
        Ok(RegistryState {
            user: Some(name).filter(|name| !name.is_empty()),
            last_check_in_date,
            habits,
        })
    }

    /// Replaces everything stored with `state` in a single transaction.
    ///
    /// History markers are dated backwards from the habit's last check-in,
    /// one calendar day apart.
    pub fn save_state(&mut self, state: &RegistryState) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let user_name = state.user.as_deref().unwrap_or("");
        let last_check_in = state.last_check_in_date.map(|d| d.to_string());

        let existing: Option<i64> = tx
            .query_row(SELECT_USER_SQL, [], |row| row.get(0))
            .optional()
            .db_context("Failed to query user")?;
        let user_id = match existing {
            Some(id) => {
                tx.execute(UPDATE_USER_SQL, params![user_name, last_check_in, id])
                    .db_context("Failed to update user")?;
                id
            }
            None => {
                tx.execute(INSERT_USER_SQL, params![user_name, last_check_in])
                    .db_context("Failed to insert user")?;
                tx.last_insert_rowid()
            }
        };

        tx.execute(DELETE_HABITS_SQL, params![user_id])
            .db_context("Failed to clear habits")?;

        for (name, habit) in &state.habits {
            tx.execute(
                INSERT_HABIT_SQL,
                params![
                    user_id,
                    name,
                    habit.creation_date.to_string(),
                    habit.last_check_in_date.map(|d| d.to_string()),
                    i64::from(habit.streak),
                    habit.is_main,
                ],
            )
            .db_context("Failed to insert habit")?;
            let habit_id = tx.last_insert_rowid();

            if habit.history.is_empty() {
                continue;
            }
            let last = habit
                .last_check_in_date
                .ok_or_else(|| HabitError::Configuration {
                    message: format!("Habit '{name}' has history but no check-in date"),
                })?;

            let len = habit.history.len();
            for (i, marker) in habit.history.iter().enumerate() {
                let offset = i64::try_from(len - 1 - i).map_err(|_| HabitError::Configuration {
                    message: format!("History of habit '{name}' is too long"),
                })?;
                let event_date = calendar::days_before(last, offset)?;
                tx.execute(
                    INSERT_EVENT_SQL,
                    params![habit_id, event_date.to_string(), marker.as_str()],
                )
                .db_context("Failed to insert habit event")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("saved {} habit(s) to database", state.habits.len());
        Ok(())
    }
}
