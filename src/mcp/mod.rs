//! Model Context Protocol (MCP) Module
//!
//! This module contains the MCP surface of the order server:
//! - Protocol models (JsonRpcRequest, constants)
//! - RPC helpers (success/error envelopes, tool results carrying UI events)
//! - MCP handlers (initialize, tools/list, tools/call, etc.)

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types and functions
pub use handlers::routes;
