//! Catalog Domain Models
//!
//! Read-only menu data: store information, categories, products and the
//! pizza customization tables.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opening hours for one service (carryout or delivery).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHours {
    pub sun_thu: String,
    pub fri_sat: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreHours {
    pub carryout: ServiceHours,
    pub delivery: ServiceHours,
}

/// The store the order is placed against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub delivery_estimate: String,
    pub hours: StoreHours,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub badge: Option<String>,
}

/// An orderable menu item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub category: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub base_price: Decimal,
    #[serde(default)]
    pub tag: Option<String>,
    /// Standard toppings; only meaningful for customizable products.
    #[serde(default)]
    pub default_toppings: Vec<String>,
    #[serde(default)]
    pub calories: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub customizable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub id: String,
    pub name: String,
    pub price_modifier: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Crust {
    pub id: String,
    pub name: String,
    pub price_modifier: Decimal,
    #[serde(default, rename = "default")]
    pub is_default: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topping {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

/// Serialized form of a whole catalog, as loaded from `PIZZA_CATALOG_PATH`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogDocument {
    pub store: Store,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub sizes: Vec<Size>,
    pub crusts: Vec<Crust>,
    pub toppings: Vec<Topping>,
}
