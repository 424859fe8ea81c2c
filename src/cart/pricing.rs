//! Pricing Engine
//!
//! Pure functions computing unit prices and cart totals. Amounts stay exact
//! `Decimal`s throughout; rounding to cents happens only when a value is
//! rendered or serialized.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::models::{CartItem, OrderType};
use crate::catalog::{Catalog, Crust, Product, Size};

/// Price of each topping beyond the product's defaults.
pub const EXTRA_TOPPING_PRICE: Decimal = Decimal::from_parts(150, 0, 0, false, 2);
/// Flat fee added to delivery orders.
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(599, 0, 0, false, 2);
/// Tax rate applied to subtotal plus delivery fee.
pub const TAX_RATE: Decimal = Decimal::from_parts(95, 0, 0, false, 3);

/// Customization options as requested by a caller, before defaults apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub size: Option<String>,
    pub crust: Option<String>,
    /// When present, fully replaces the product's default toppings.
    pub toppings: Option<Vec<String>>,
}

/// Fully resolved customization of a pizza.
#[derive(Debug, Clone, PartialEq)]
pub struct Customization {
    pub size: Size,
    pub crust: Crust,
    /// Deduplicated, in first-seen order.
    pub toppings: Vec<String>,
}

impl Customization {
    /// Toppings not already part of the product's defaults.
    pub fn extra_toppings<'a>(&'a self, product: &'a Product) -> impl Iterator<Item = &'a String> {
        self.toppings
            .iter()
            .filter(move |t| !product.default_toppings.contains(t))
    }
}

/// Resolves a selection against the catalog.
///
/// Returns `None` for non-customizable products: their selections are ignored.
/// Missing size/crust fall back to the catalog defaults and missing toppings
/// to the product's default set.
pub fn resolve_selection(
    catalog: &Catalog,
    product: &Product,
    selection: &Selection,
) -> Option<Customization> {
    if !product.customizable {
        return None;
    }

    let requested = selection
        .toppings
        .as_deref()
        .unwrap_or(&product.default_toppings);

    let mut toppings: Vec<String> = Vec::with_capacity(requested.len());
    for topping in requested {
        if !toppings.contains(topping) {
            toppings.push(topping.clone());
        }
    }

    Some(Customization {
        size: catalog.lookup_size(selection.size.as_deref()).clone(),
        crust: catalog.lookup_crust(selection.crust.as_deref()).clone(),
        toppings,
    })
}

/// Topping ids in the selection that the catalog does not know.
pub fn unknown_toppings<'a>(catalog: &Catalog, selection: &'a Selection) -> Vec<&'a str> {
    selection
        .toppings
        .iter()
        .flatten()
        .filter(|t| catalog.lookup_topping(t).is_none())
        .map(String::as_str)
        .collect()
}

/// Unit price of a product with an already resolved customization.
pub fn price_with(product: &Product, customization: Option<&Customization>) -> Decimal {
    match customization {
        Some(c) if product.customizable => {
            let extras = Decimal::from(c.extra_toppings(product).count());
            product.base_price
                + c.size.price_modifier
                + c.crust.price_modifier
                + EXTRA_TOPPING_PRICE * extras
        }
        _ => product.base_price,
    }
}

/// Unit price of a product for a raw selection.
pub fn unit_price(catalog: &Catalog, product: &Product, selection: &Selection) -> Decimal {
    let customization = resolve_selection(catalog, product, selection);
    price_with(product, customization.as_ref())
}

/// Aggregate amounts for a cart. Values are exact; serialization rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    #[serde(serialize_with = "serialize_money")]
    pub subtotal: Decimal,
    #[serde(serialize_with = "serialize_money")]
    pub delivery_fee: Decimal,
    #[serde(serialize_with = "serialize_money")]
    pub tax: Decimal,
    #[serde(serialize_with = "serialize_money")]
    pub total: Decimal,
}

pub fn cart_totals(cart: &[CartItem], order_type: Option<OrderType>) -> Totals {
    let subtotal: Decimal = cart.iter().map(CartItem::line_total).sum();
    let delivery_fee = match order_type {
        Some(OrderType::Delivery) => DELIVERY_FEE,
        _ => Decimal::ZERO,
    };
    let tax = TAX_RATE * (subtotal + delivery_fee);

    Totals {
        subtotal,
        delivery_fee,
        tax,
        total: subtotal + delivery_fee + tax,
    }
}

/// Rounds to cents, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Two-decimal string without currency symbol, e.g. `"26.81"`.
pub fn money_string(amount: Decimal) -> String {
    format!("{:.2}", round_money(amount))
}

/// Display form with currency symbol, e.g. `"$26.81"` or `"-$3.00"`.
pub fn format_money(amount: Decimal) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-${}", money_string(amount.abs()))
    } else {
        format!("${}", money_string(amount))
    }
}

pub fn serialize_money<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&money_string(*amount))
}
