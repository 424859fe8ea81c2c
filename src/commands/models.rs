//! Command Protocol Models
//!
//! Typed payloads of the four commands external callers may invoke, and the
//! decoding of a named tool call into one of them.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::cart::models::OrderType;
use crate::cart::pricing::Selection;
use crate::error::ToolCallError;

// =============================================================================
// Command names
// =============================================================================

pub const BROWSE: &str = "browse";
pub const CREATE_ORDER: &str = "create-order";
pub const UPDATE_ORDER: &str = "update-order";
pub const CHECKOUT: &str = "checkout";

// =============================================================================
// Inputs
// =============================================================================

/// Returns the default quantity (1) for requested items
fn default_quantity() -> i64 {
    1
}

/// A product to put in the cart.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemSpec {
    pub product_id: String,

    /// Signed so that zero and negative values reach validation.
    #[serde(default = "default_quantity")]
    pub quantity: i64,

    #[serde(default)]
    pub size: Option<String>,

    #[serde(default)]
    pub crust: Option<String>,

    /// Replaces the product's default toppings when present.
    #[serde(default)]
    pub toppings: Option<Vec<String>>,
}

impl ItemSpec {
    pub fn selection(&self) -> Selection {
        Selection {
            size: self.size.clone(),
            crust: self.crust.clone(),
            toppings: self.toppings.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BrowseInput {
    /// Display name of the calling agent.
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    pub order_type: OrderType,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuantityChange {
    pub cart_id: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderInput {
    #[serde(default)]
    pub add: Vec<ItemSpec>,
    #[serde(default)]
    pub remove: Vec<String>,
    #[serde(default)]
    pub change_quantity: Vec<QuantityChange>,
}

/// Contact fields default to empty so that missing values surface as
/// validation errors naming the field.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInput {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub leave_at_door: bool,
    #[serde(default)]
    pub delivery_instructions: Option<String>,
}

// =============================================================================
// Command
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Browse(BrowseInput),
    CreateOrder(CreateOrderInput),
    UpdateOrder(UpdateOrderInput),
    Checkout(CheckoutInput),
}

impl Command {
    /// Decodes a named tool call into a typed command.
    pub fn from_tool_call(name: &str, args: Value) -> Result<Self, ToolCallError> {
        let args = if args.is_null() { json!({}) } else { args };

        let command = match name {
            BROWSE => Self::Browse(serde_json::from_value(args)?),
            CREATE_ORDER => Self::CreateOrder(serde_json::from_value(args)?),
            UPDATE_ORDER => Self::UpdateOrder(serde_json::from_value(args)?),
            CHECKOUT => Self::Checkout(serde_json::from_value(args)?),
            _ => return Err(ToolCallError::UnknownTool(name.to_string())),
        };
        Ok(command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Browse(_) => BROWSE,
            Self::CreateOrder(_) => CREATE_ORDER,
            Self::UpdateOrder(_) => UPDATE_ORDER,
            Self::Checkout(_) => CHECKOUT,
        }
    }
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    /// Markdown summary for humans and language models.
    pub summary: String,
    /// Machine-readable payload.
    pub structured: Value,
}
