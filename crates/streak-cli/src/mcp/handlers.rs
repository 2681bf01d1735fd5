//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use streak_core::{
    display::{CreateResult, DeleteResult, HabitRows, MainHabitResult},
    params as core, Tracker,
};
use tokio::sync::Mutex;

use super::errors::{to_mcp_error, tool_result};

/// Generic MCP wrapper for core parameter types with serde integration
///
/// `#[serde(transparent)]` passes deserialization straight through to the
/// wrapped core type, and the schema is the core type's own.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type HabitName = McpParams<core::HabitName>;
pub type UserName = McpParams<core::UserName>;
pub type CheckInHabits = McpParams<core::CheckInHabits>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
///
/// Each call holds the tracker lock for the whole operation.
pub struct McpHandlers {
    tracker: Arc<Mutex<Tracker>>,
}

impl McpHandlers {
    pub fn new(tracker: Arc<Mutex<Tracker>>) -> Self {
        Self { tracker }
    }

    pub async fn set_user(&self, Parameters(params): Parameters<UserName>) -> McpResult {
        debug!("set_user: {:?}", params);

        let result = self
            .tracker
            .lock()
            .await
            .set_user_name(params.as_ref())
            .await
            .map(|name| format!("Hello, {name}!"));
        tool_result("Failed to set user name", result)
    }

    pub async fn add_habit(&self, Parameters(params): Parameters<HabitName>) -> McpResult {
        debug!("add_habit: {:?}", params);

        let result = self
            .tracker
            .lock()
            .await
            .add_habit(params.as_ref())
            .await
            .map(CreateResult::new);
        tool_result("Failed to add habit", result)
    }

    pub async fn delete_habit(&self, Parameters(params): Parameters<HabitName>) -> McpResult {
        debug!("delete_habit: {:?}", params);

        let result = self
            .tracker
            .lock()
            .await
            .delete_habit(params.as_ref())
            .await
            .map(DeleteResult::new);
        tool_result("Failed to delete habit", result)
    }

    /// Checks in every named habit. The reply has one line per habit.
    pub async fn check_in(&self, Parameters(params): Parameters<CheckInHabits>) -> McpResult {
        debug!("check_in: {:?}", params);

        let tracker = self.tracker.lock().await;
        let mut lines = Vec::new();
        let mut all_ok = true;
        for result in tracker.check_in_many(params.as_ref()).await {
            match result {
                Ok(check_in) => lines.push(check_in.to_string()),
                Err(e) if e.is_persistence_failure() => {
                    return Err(to_mcp_error("Failed to check in", &e));
                }
                Err(e) => {
                    all_ok = false;
                    lines.push(e.to_string());
                }
            }
        }

        let content = vec![Content::text(lines.join("\n"))];
        Ok(if all_ok {
            CallToolResult::success(content)
        } else {
            CallToolResult::error(content)
        })
    }

    pub async fn toggle_main_habit(
        &self,
        Parameters(params): Parameters<HabitName>,
    ) -> McpResult {
        debug!("toggle_main_habit: {:?}", params);

        let result = self
            .tracker
            .lock()
            .await
            .toggle_main_habit(params.as_ref())
            .await
            .map(MainHabitResult::new);
        tool_result("Failed to toggle main habit", result)
    }

    pub async fn list_habits(&self) -> McpResult {
        debug!("list_habits");

        let state = self
            .tracker
            .lock()
            .await
            .state()
            .await
            .map_err(|e| to_mcp_error("Failed to list habits", &e))?;

        let title = match &state.user {
            Some(user) => format!("{user}'s habits"),
            None => "Habits".to_string(),
        };
        let result = format!("# {title}\n\n{}", HabitRows::from(&state));
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rmcp::model::RawContent;
    use streak_core::{Backend, TrackerBuilder};
    use tempfile::TempDir;

    use super::*;

    async fn create_test_handlers() -> (TempDir, McpHandlers) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let tracker = TrackerBuilder::new()
            .with_backend(Backend::Sqlite)
            .with_data_path(Some(temp_dir.path().join("habits.db")))
            .with_today(Some(date(2024, 1, 1)))
            .build()
            .await
            .expect("Failed to create tracker");
        (temp_dir, McpHandlers::new(Arc::new(Mutex::new(tracker))))
    }

    fn habit(name: &str) -> Parameters<HabitName> {
        Parameters(McpParams(core::HabitName::new(name)))
    }

    fn text(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| match &c.raw {
                RawContent::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let (_temp_dir, handlers) = create_test_handlers().await;

        let result = handlers.add_habit(habit("Read")).await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text(&result), "Habit 'read' added.");

        let result = handlers.add_habit(habit("read")).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text(&result), "Habit 'read' already exists.");

        let result = handlers.list_habits().await.unwrap();
        assert!(text(&result).contains("**Read**"));
    }

    #[tokio::test]
    async fn test_check_in_reports_each_habit() {
        let (_temp_dir, handlers) = create_test_handlers().await;
        handlers.add_habit(habit("read")).await.unwrap();

        let params = Parameters(McpParams(core::CheckInHabits {
            names: vec!["read".to_string(), "nope".to_string()],
        }));
        let result = handlers.check_in(params).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text(&result),
            "Checked in 'read'. Streak: 1 day.\nHabit 'nope' not found."
        );
    }

    #[tokio::test]
    async fn test_toggle_main_and_delete() {
        let (_temp_dir, handlers) = create_test_handlers().await;
        handlers.add_habit(habit("walk")).await.unwrap();

        let result = handlers.toggle_main_habit(habit("walk")).await.unwrap();
        assert_eq!(text(&result), "Habit 'walk' is now main.");
        let result = handlers.toggle_main_habit(habit("walk")).await.unwrap();
        assert_eq!(text(&result), "Habit 'walk' is no longer main.");

        let result = handlers.delete_habit(habit("walk")).await.unwrap();
        assert_eq!(text(&result), "Habit 'walk' deleted.");
    }
}
