//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication
//! and tool result construction.

use serde_json::{json, Value};

use super::models::UI_EVENTS_META_KEY;
use crate::commands::CommandOutput;
use crate::error::OrderError;
use crate::ui::UiEvent;

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

fn events_meta(events: &[UiEvent]) -> Value {
    json!({ UI_EVENTS_META_KEY: events })
}

/// Tool result for a command that completed.
pub fn tool_success(output: CommandOutput, events: &[UiEvent]) -> Value {
    json!({
        "content": [{ "type": "text", "text": output.summary }],
        "structuredContent": output.structured,
        "isError": false,
        "_meta": events_meta(events),
    })
}

/// Tool result for a command the order core rejected.
pub fn tool_failure(error: &OrderError, events: &[UiEvent]) -> Value {
    json!({
        "content": [{ "type": "text", "text": format!("Error: {error}") }],
        "structuredContent": error.to_payload(),
        "isError": true,
        "_meta": events_meta(events),
    })
}
