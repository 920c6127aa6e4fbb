//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol handlers for the menu application.
//! It exports `handle_tool_call` publicly to make it accessible for tests.

use super::{helpers::*, models::*};
use crate::error::ToolError;
use crate::menu::{helpers::format_menu_summary, state::*, validation::DishDraft, view};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse))
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
            warn!(error = %e.body_text(), "JSON-RPC parse error");
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

    debug!(method = method_name, ?id, "MCP call");

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "resources/list" => rpc_success(id, handle_resources_list()),
        "resources/read" => rpc_success(id, handle_resources_read(&state).await),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(err) => {
                    info!(tool = tool_name, error = %err, "tool call rejected");
                    rpc_error(id, -32602, err.to_string())
                }
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            warn!(method = method_name, "unknown method");
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
            "tools": { "listChanged": true },
            "resources": { "listChanged": true, "subscribe": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    let course_enum = json!(["Starter", "Main", "Side", "Dessert"]);

    json!({
        "tools": [
            {
                "name": ADD_DISH_TOOL_NAME,
                "title": "Add dish to menu",
                "description": "Validates a dish (course, name, description, price) and appends it to the menu.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "courseType": { "type": "string", "enum": course_enum },
                        "dishName": { "type": "string" },
                        "dishDescription": { "type": "string" },
                        "dishPrice": { "type": "string", "description": "Non-negative decimal, e.g. \"9.5\"" }
                    },
                    "required": ["courseType", "dishName", "dishDescription", "dishPrice"],
                    "additionalProperties": false
                },
                "_meta": widget_meta(None)
            },
            {
                "name": REMOVE_DISH_TOOL_NAME,
                "title": "Remove dish",
                "description": "Removes the dish with the given id. Unknown ids leave the menu unchanged.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "minimum": 1 }
                    },
                    "required": ["id"],
                    "additionalProperties": false
                },
                "_meta": widget_meta(None)
            },
            {
                "name": LIST_MENU_TOOL_NAME,
                "title": "Show menu",
                "description": "Lists the menu, optionally filtered to one course.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "course": { "type": "string", "enum": ["All", "Starter", "Main", "Side", "Dessert"], "default": "All" }
                    },
                    "additionalProperties": false
                },
                "_meta": widget_meta(None)
            },
            {
                "name": COURSE_AVERAGES_TOOL_NAME,
                "title": "Average price per course",
                "description": "Reports the average dish price of each course, 0 for courses without dishes.",
                "inputSchema": {
                    "type": "object",
                    "properties": {},
                    "additionalProperties": false
                },
                "_meta": widget_meta(None)
            }
        ],
        "_meta": widget_meta(None)
    })
}

/// Handles `resources/list` request.
fn handle_resources_list() -> Value {
    json!({
        "resources": [{
            "name": "Restaurant menu",
            "uri": WIDGET_TEMPLATE_URI,
            "mimeType": WIDGET_MIME_TYPE,
            "_meta": widget_meta(None)
        }],
        "_meta": widget_meta(None)
    })
}

/// Handles `resources/read` request.
async fn handle_resources_read(state: &AppState) -> Value {
    let html = match state.load_widget_html().await {
        Ok(html) => html,
        Err(error) => {
            warn!(assets_dir = %state.assets_dir.display(), %error, "menu widget html unavailable");
            String::new()
        }
    };
    json!({
        "contents": [{
            "uri": WIDGET_TEMPLATE_URI,
            "mimeType": WIDGET_MIME_TYPE,
            "text": html,
            "_meta": widget_meta(None)
        }],
        "_meta": widget_meta(None)
    })
}

/// Handles `tools/call` request (Business Logic).
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, ToolError> {
    match name {
        ADD_DISH_TOOL_NAME => handle_add_dish_tool(state, args),
        REMOVE_DISH_TOOL_NAME => handle_remove_dish_tool(state, args),
        LIST_MENU_TOOL_NAME => handle_list_menu_tool(state, args),
        COURSE_AVERAGES_TOOL_NAME => Ok(handle_course_averages_tool(state)),
        _ => Err(ToolError::UnknownTool(name.to_string())),
    }
}

/// Tools without arguments may be called with `null`.
fn arguments_or_empty(args: Value) -> Value {
    if args.is_null() {
        json!({})
    } else {
        args
    }
}

/// Handles the add_dish tool functionality
fn handle_add_dish_tool(state: &AppState, args: Value) -> Result<Value, ToolError> {
    let mut draft: DishDraft = serde_json::from_value(args)?;

    let mut menu = state.menu();
    let dish = draft.submit(&mut menu)?;
    info!(dish_id = dish.id, course = %dish.course_type, "MCP ADD");

    let message = format!(
        "Dish added successfully! {} ({}) - R{}. Total Menu Items: {}",
        dish.dish_name,
        dish.course_type,
        dish.dish_price,
        menu.len()
    );

    Ok(tool_result(
        message,
        json!({
            "dish": dish,
            "dishes": menu.snapshot(),
            "total": menu.len()
        }),
        &state.session_id,
    ))
}

/// Handles the remove_dish tool functionality
fn handle_remove_dish_tool(state: &AppState, args: Value) -> Result<Value, ToolError> {
    let input: RemoveDishInput = serde_json::from_value(args)?;

    let mut menu = state.menu();
    let (removed, message) = match menu.remove(input.id) {
        Some(dish) => {
            info!(dish_id = input.id, "MCP REMOVE");
            (true, format!("Removed {}.", dish.dish_name))
        }
        None => (false, format!("No dish with id {} on the menu.", input.id)),
    };

    Ok(tool_result(
        message,
        json!({
            "id": input.id,
            "removed": removed,
            "dishes": menu.snapshot(),
            "total": menu.len()
        }),
        &state.session_id,
    ))
}

/// Handles the list_menu tool functionality
fn handle_list_menu_tool(state: &AppState, args: Value) -> Result<Value, ToolError> {
    let input: ListMenuInput = serde_json::from_value(arguments_or_empty(args))?;

    let menu = state.menu();
    let dishes = view::filter_by_course(menu.snapshot(), input.course);
    let message = if dishes.is_empty() {
        format!("No dishes for {}. Total Menu Items: {}", input.course, menu.len())
    } else {
        format!(
            "{}\nTotal Menu Items: {}",
            format_menu_summary(&dishes),
            menu.len()
        )
    };

    Ok(tool_result(
        message,
        json!({
            "course": input.course,
            "dishes": dishes,
            "total": menu.len(),
            "counts": view::count_by_course(menu.snapshot())
        }),
        &state.session_id,
    ))
}

/// Handles the course_averages tool functionality
fn handle_course_averages_tool(state: &AppState) -> Value {
    let averages = view::average_price_by_course(state.menu().snapshot());
    let message = averages
        .iter()
        .map(|(course, average)| format!("{}: R{:.2}", course, average))
        .collect::<Vec<_>>()
        .join(", ");

    tool_result(
        message,
        json!({ "averages": averages }),
        &state.session_id,
    )
}
