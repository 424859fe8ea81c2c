//! Order Command Module
//!
//! The four commands external callers use to build and place an order:
//! - Typed command payloads and tool-call decoding
//! - The per-call session that runs them
//! - Checkout finalization behind the confirmation gate
//! - Markdown rendering of results

pub mod checkout;
pub mod models;
pub mod processor;
pub mod render;

pub use models::{Command, CommandOutput};
pub use processor::Session;
