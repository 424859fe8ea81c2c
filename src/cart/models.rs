//! Cart Domain Models
//!
//! This module contains the data structures of an order in progress: its
//! line items, fulfillment type and checkout details.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::pricing::{self, serialize_money, Customization, Totals};
use crate::catalog::Product;

// =============================================================================
// Order-level fields
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Delivery,
    Carryout,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delivery => f.write_str("delivery"),
            Self::Carryout => f.write_str("carryout"),
        }
    }
}

/// Contact and hand-off details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInfo {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub leave_at_door: bool,
    pub delivery_instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum OrderStatus {
    Open,
    Placed {
        #[serde(rename = "orderNumber")]
        order_number: String,
    },
}

// =============================================================================
// Cart items
// =============================================================================

/// One priced line in the cart.
///
/// Price-relevant fields are fixed at creation; only the quantity changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    cart_id: String,
    product_id: String,
    name: String,
    quantity: u32,
    customization: Option<Customization>,
    unit_price: Decimal,
}

impl CartItem {
    pub fn new(
        cart_id: String,
        product: &Product,
        customization: Option<Customization>,
        quantity: u32,
    ) -> Self {
        let unit_price = pricing::price_with(product, customization.as_ref());
        Self {
            cart_id,
            product_id: product.id.clone(),
            name: product.name.clone(),
            quantity,
            customization,
            unit_price,
        }
    }

    pub fn cart_id(&self) -> &str {
        &self.cart_id
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn customization(&self) -> Option<&Customization> {
        self.customization.as_ref()
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Options summary, e.g. `Large 14" Hand Tossed · pepperoni, mushrooms`.
    pub fn description(&self) -> Option<String> {
        self.customization.as_ref().map(|c| {
            let toppings = if c.toppings.is_empty() {
                "no toppings".to_string()
            } else {
                c.toppings.join(", ")
            };
            format!("{} {} · {}", c.size.name, c.crust.name, toppings)
        })
    }

    pub fn to_line(&self) -> CartLine {
        let customization = self.customization.as_ref();
        CartLine {
            cart_id: self.cart_id.clone(),
            product_id: self.product_id.clone(),
            name: self.name.clone(),
            description: self.description(),
            quantity: self.quantity,
            size: customization.map(|c| c.size.id.clone()),
            crust: customization.map(|c| c.crust.id.clone()),
            toppings: customization.map(|c| c.toppings.clone()),
            unit_price: self.unit_price,
            line_total: self.line_total(),
        }
    }
}

// =============================================================================
// Snapshots returned to callers
// =============================================================================

/// Machine-readable view of a cart item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub cart_id: String,
    pub product_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crust: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toppings: Option<Vec<String>>,
    #[serde(serialize_with = "serialize_money")]
    pub unit_price: Decimal,
    #[serde(serialize_with = "serialize_money")]
    pub line_total: Decimal,
}

/// Machine-readable view of the whole order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub order_type: Option<OrderType>,
    pub address: Option<String>,
    pub status: OrderStatus,
    pub items: Vec<CartLine>,
    pub totals: Totals,
}
