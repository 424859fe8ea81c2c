//! MCP (Model Context Protocol) route handlers
//!
//! This module exposes the four order commands as MCP tools. It exports
//! `handle_tool_call` publicly to make it accessible for tests.

use super::{helpers::*, models::*};
use crate::commands::models::{BROWSE, CHECKOUT, CREATE_ORDER, UPDATE_ORDER};
use crate::commands::{Command, Session};
use crate::error::ToolCallError;
use crate::state::{AppState, SharedState};
use crate::ui::RecordingPresenter;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!(error = %e.body_text(), "JSON-RPC parse error");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, -32700, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    tracing::info!(method = method_name, id = %id, "MCP call");

    // Notifications get no JSON-RPC response.
    if method_name.starts_with("notifications/") {
        return StatusCode::ACCEPTED.into_response();
    }

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args).await {
                Ok(result) => rpc_success(id, result),
                Err(e) => rpc_error(id, -32602, e.to_string()),
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            tracing::warn!(method = method_name, "unknown method");
            rpc_error(id, -32601, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn item_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "productId": {
                "type": "string",
                "description": "Product ID from the menu (e.g. \"pepperoni\", \"wings-8pc\", \"coca-cola\")."
            },
            "quantity": {
                "type": "integer",
                "minimum": 1,
                "default": 1,
                "description": "How many of this item."
            },
            "size": {
                "type": "string",
                "enum": ["small", "medium", "large"],
                "description": "Size for customizable products. Default: medium."
            },
            "crust": {
                "type": "string",
                "enum": ["hand-tossed", "handmade-pan", "thin", "brooklyn"],
                "description": "Crust for customizable products. Default: hand-tossed."
            },
            "toppings": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Topping IDs for customizable products. Replaces the default toppings; omit to keep them."
            }
        },
        "required": ["productId"]
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": BROWSE,
                "title": "Browse menu",
                "description": "Begin an ordering session on behalf of the user. Shows a status indicator naming the agent, then returns the full menu: store information, products by category, and size, crust and topping options with their price modifiers. Pizza price = base price + size modifier + crust modifier + $1.50 per topping beyond the pizza's defaults. Delivery adds $5.99; tax is 9.5% of subtotal plus delivery fee.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Display name of the client agent, shown to the user while the order is prepared."
                        }
                    },
                    "required": ["name"],
                    "additionalProperties": false
                }
            },
            {
                "name": CREATE_ORDER,
                "title": "Create order",
                "description": "Replace any existing order with a new one built from the given items. Every product ID is checked before anything changes; if one is unknown, nothing is created. Returns the cart with an 8-character cart ID per line for use with update-order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "orderType": {
                            "type": "string",
                            "enum": ["delivery", "carryout"],
                            "description": "Delivery or carryout."
                        },
                        "address": {
                            "type": "string",
                            "description": "Delivery address (required for delivery orders)."
                        },
                        "items": {
                            "type": "array",
                            "description": "Items to add to the cart.",
                            "items": item_schema()
                        }
                    },
                    "required": ["orderType", "items"],
                    "additionalProperties": false
                }
            },
            {
                "name": UPDATE_ORDER,
                "title": "Update order",
                "description": "Modify the current order. Removals apply first, then quantity changes, then additions. Each entry is applied independently; entries that fail are listed as errors without blocking the rest.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "add": {
                            "type": "array",
                            "description": "New products to add to the cart.",
                            "items": item_schema()
                        },
                        "remove": {
                            "type": "array",
                            "description": "Cart IDs of items to remove.",
                            "items": { "type": "string" }
                        },
                        "changeQuantity": {
                            "type": "array",
                            "description": "New quantities for existing cart items.",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "cartId": { "type": "string" },
                                    "quantity": { "type": "integer", "minimum": 1 }
                                },
                                "required": ["cartId", "quantity"]
                            }
                        }
                    },
                    "additionalProperties": false
                }
            },
            {
                "name": CHECKOUT,
                "title": "Checkout",
                "description": "Complete the order with the customer's contact details. Requires a cart built with create-order. The customer is asked to confirm before the order is placed; if they decline, the cart is kept and checkout can be retried.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "firstName": { "type": "string" },
                        "lastName": { "type": "string" },
                        "phone": { "type": "string", "description": "Phone number (10 digits)." },
                        "email": { "type": "string" },
                        "leaveAtDoor": { "type": "boolean", "default": false },
                        "deliveryInstructions": { "type": "string" }
                    },
                    "required": ["firstName", "lastName", "phone", "email"],
                    "additionalProperties": false
                }
            }
        ]
    })
}

/// Handles `tools/call` request (Business Logic).
///
/// Argument errors surface as JSON-RPC errors; rejected commands come back as
/// tool results flagged `isError`.
pub async fn handle_tool_call(
    state: &AppState,
    name: &str,
    args: Value,
) -> Result<Value, ToolCallError> {
    let command = Command::from_tool_call(name, args)?;

    let mut order = match state.try_claim_order() {
        Ok(order) => order,
        Err(busy) => {
            tracing::warn!(tool = name, "rejected while another command is in flight");
            return Ok(tool_failure(&busy, &[]));
        }
    };

    let presenter = RecordingPresenter::new();
    let mut session = Session::new(
        &state.catalog,
        &mut order,
        &presenter,
        state.confirmer.as_ref(),
    );
    let result = session.execute(command).await;
    let events = presenter.take();

    Ok(match result {
        Ok(output) => tool_success(output, &events),
        Err(e) => tool_failure(&e, &events),
    })
}
