//! Error taxonomy for order commands.
//!
//! Every rejected entry carries a [`Problem`] naming the offending field or
//! identifier so callers can reconcile partial failures.

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// One rejected field or entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// Field name or entry label, e.g. `phone` or `items[2]`.
    pub entry: String,
    /// Human-readable reason.
    pub message: String,
}

impl Problem {
    pub fn new(entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.entry, self.message)
    }
}

fn join(problems: &[Problem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised by the cart store and the command processor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Malformed or missing input.
    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<Problem>),

    /// Unknown product, topping or cart id.
    #[error("Not found: {}", join(.0))]
    NotFound(Vec<Problem>),

    /// The operation needs a non-empty cart.
    #[error("Cart is empty. {0}")]
    EmptyCart(String),

    /// The order was already placed; only `create-order` may start over.
    #[error("Order has already been placed. Use create-order to start a new order.")]
    OrderPlaced,

    /// Another command is still in flight.
    #[error("Another command is in progress. Retry once it completes.")]
    Busy,
}

impl OrderError {
    pub fn validation(entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![Problem::new(entry, message)])
    }

    pub fn not_found(entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound(vec![Problem::new(entry, message)])
    }

    /// Stable machine-readable code.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::EmptyCart(_) => "empty_cart",
            Self::OrderPlaced => "order_placed",
            Self::Busy => "busy",
        }
    }

    /// Problems attached to this error, if any.
    pub fn problems(&self) -> &[Problem] {
        match self {
            Self::Validation(problems) | Self::NotFound(problems) => problems,
            _ => &[],
        }
    }

    /// Error payload returned to callers in `structuredContent`.
    pub fn to_payload(&self) -> Value {
        json!({
            "error": {
                "kind": self.kind(),
                "message": self.to_string(),
                "problems": self.problems(),
            }
        })
    }
}

/// Errors decoding a `tools/call` request into a typed command.
#[derive(Debug, Error)]
pub enum ToolCallError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),
}
