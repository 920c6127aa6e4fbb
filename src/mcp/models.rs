//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use crate::menu::models::CourseFilter;
use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Name of the tool that adds a dish from a form draft
pub const ADD_DISH_TOOL_NAME: &str = "add_dish";
/// Name of the tool that removes a dish by id
pub const REMOVE_DISH_TOOL_NAME: &str = "remove_dish";
/// Name of the tool that lists the (optionally filtered) menu
pub const LIST_MENU_TOOL_NAME: &str = "list_menu";
/// Name of the tool that reports average prices per course
pub const COURSE_AVERAGES_TOOL_NAME: &str = "course_averages";
/// URI for the widget template
pub const WIDGET_TEMPLATE_URI: &str = "ui://widget/restaurant-menu.html";
/// MIME type for the widget
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";
/// Server identifier
pub const SERVER_NAME: &str = "restaurant-menu-rust";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

// =============================================================================
// Tool Inputs
// =============================================================================

/// Input for the remove_dish tool
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoveDishInput {
    pub id: u64,
}

/// Input for the list_menu tool
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListMenuInput {
    #[serde(default)]
    pub course: CourseFilter,
}
