//! Error handling utilities for MCP server

use std::fmt::Display;

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData,
};
use streak_core::{HabitError, OperationStatus};

/// Helper to convert tracker errors to MCP errors
pub fn to_mcp_error(message: &str, error: &HabitError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}

/// Turns an operation result into a tool result.
///
/// Rejected operations (unknown habit, duplicate, already checked in) come
/// back as tool results flagged as errors so the client sees the message.
/// Storage faults become protocol errors.
pub fn tool_result<T: Display>(
    action: &str,
    result: streak_core::Result<T>,
) -> Result<CallToolResult, ErrorData> {
    if let Err(e) = &result {
        if e.is_persistence_failure() {
            return Err(to_mcp_error(action, e));
        }
    }

    let status = OperationStatus::from_result(&result);
    let content = vec![Content::text(status.message)];
    Ok(if status.success {
        CallToolResult::success(content)
    } else {
        CallToolResult::error(content)
    })
}
