//! Restaurant Menu Library
//!
//! This library provides the core functionality for a restaurant menu
//! application: an in-memory menu store with derived course views, exposed
//! over REST and MCP (Model Context Protocol).

// Domain modules
pub mod error;
pub mod mcp;
pub mod menu;

// Infrastructure
pub mod config;
pub mod router;
