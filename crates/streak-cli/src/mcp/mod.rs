//! MCP server implementation for streak
//!
//! Exposes the habit tracker over the Model Context Protocol so assistants
//! can add habits, check in and read streaks on the user's behalf.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use streak_core::Tracker;
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{CheckInHabits, HabitName, McpResult, UserName};

/// MCP server for streak
#[derive(Clone)]
pub struct StreakMcpServer {
    tracker: Arc<Mutex<Tracker>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StreakMcpServer {
    /// Create a new streak MCP server
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.tracker.clone())
    }

    #[tool(
        name = "set_user",
        description = "Set the user's display name. Surrounding whitespace is dropped; the name cannot be empty."
    )]
    async fn set_user(&self, params: Parameters<UserName>) -> McpResult {
        self.handlers().set_user(params).await
    }

    #[tool(
        name = "add_habit",
        description = "Start tracking a new habit. Names are case-insensitive and stored lowercase; adding a name that already exists fails."
    )]
    async fn add_habit(&self, params: Parameters<HabitName>) -> McpResult {
        self.handlers().add_habit(params).await
    }

    #[tool(
        name = "delete_habit",
        description = "Permanently delete a habit together with its whole check-in history. This cannot be undone."
    )]
    async fn delete_habit(&self, params: Parameters<HabitName>) -> McpResult {
        self.handlers().delete_habit(params).await
    }

    #[tool(
        name = "check_in",
        description = "Record today's check-in for one or more habits. Days missed since the last check-in are filled in as ICE and reset the streak. Each habit can be checked in once per day."
    )]
    async fn check_in(&self, params: Parameters<CheckInHabits>) -> McpResult {
        self.handlers().check_in(params).await
    }

    #[tool(
        name = "toggle_main_habit",
        description = "Make a habit the user's main habit, or unmark it if it already is. At most one habit is main."
    )]
    async fn toggle_main_habit(&self, params: Parameters<HabitName>) -> McpResult {
        self.handlers().toggle_main_habit(params).await
    }

    #[tool(
        name = "list_habits",
        description = "List all habits with their streak, the last seven days of history (🔥 done, 🧊 missed), creation date and last check-in."
    )]
    async fn list_habits(&self) -> McpResult {
        self.handlers().list_habits().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StreakMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(r#"streak tracks daily habits and their streaks.

## Core Concepts
- **Habits**: named behaviors, matched case-insensitively
- **History**: one marker per day since the first check-in, 🔥 (FIRE) for a check-in and 🧊 (ICE) for a missed day
- **Streak**: consecutive checked-in days ending at the last check-in
- **Main habit**: at most one habit can be flagged as the user's focus

## Workflow
1. `add_habit` for each habit to track
2. `check_in` with every habit done today
3. `list_habits` to review streaks

Missed days are filled in automatically at the next check-in."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: StreakMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting streak MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
