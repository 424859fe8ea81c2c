//! Pizza Order Library
//!
//! This library provides the order core of a pizza ordering assistant
//! (catalog, cart, pricing, checkout) and exposes it over MCP.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod ui;

// Protocol surface
pub mod mcp;

// Infrastructure
pub mod config;
pub mod router;
pub mod state;
