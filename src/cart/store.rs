//! Cart Store
//!
//! The single mutable order of a session. Every operation either applies
//! completely or leaves the order untouched.

use super::helpers::new_cart_id;
use super::models::{CartItem, CartSnapshot, CheckoutInfo, OrderStatus, OrderType};
use super::pricing::{self, Selection, Totals};
use crate::catalog::Catalog;
use crate::error::OrderError;

/// Request to add a product to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequest {
    pub product_id: String,
    pub quantity: u32,
    pub selection: Selection,
}

impl ItemRequest {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            selection: Selection::default(),
        }
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }
}

/// Result of [`Order::add_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    pub cart_id: String,
    /// True when the quantity was folded into an existing line.
    pub merged: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    order_type: Option<OrderType>,
    address: Option<String>,
    items: Vec<CartItem>,
    checkout_info: Option<CheckoutInfo>,
    status: OrderStatus,
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl Order {
    pub fn new() -> Self {
        Self {
            order_type: None,
            address: None,
            items: Vec::new(),
            checkout_info: None,
            status: OrderStatus::Open,
        }
    }

    /// Discards the cart, checkout details and fulfillment settings.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Sets order type and address together; delivery needs a non-empty address.
    pub fn set_fulfillment(
        &mut self,
        order_type: OrderType,
        address: Option<&str>,
    ) -> Result<(), OrderError> {
        let address = address.map(str::trim).filter(|a| !a.is_empty());
        if order_type == OrderType::Delivery && address.is_none() {
            return Err(OrderError::validation(
                "address",
                "a delivery address is required for delivery orders",
            ));
        }

        self.order_type = Some(order_type);
        self.address = address.map(str::to_string);
        Ok(())
    }

    /// Adds a product, merging plain products into an existing line.
    ///
    /// Customizable products always get a fresh line and cart id.
    pub fn add_item(&mut self, catalog: &Catalog, request: &ItemRequest) -> Result<Added, OrderError> {
        let product = catalog.lookup_product(&request.product_id).ok_or_else(|| {
            OrderError::not_found(
                "productId",
                format!("product \"{}\" not found", request.product_id),
            )
        })?;

        if request.quantity < 1 {
            return Err(OrderError::validation("quantity", "must be at least 1"));
        }

        let unknown = pricing::unknown_toppings(catalog, &request.selection);
        if product.customizable && !unknown.is_empty() {
            return Err(OrderError::not_found(
                "toppings",
                format!("unknown topping(s): {}", unknown.join(", ")),
            ));
        }

        if !product.customizable {
            if let Some(existing) = self
                .items
                .iter_mut()
                .find(|i| i.product_id() == product.id)
            {
                existing.set_quantity(existing.quantity().saturating_add(request.quantity));
                return Ok(Added {
                    cart_id: existing.cart_id().to_string(),
                    merged: true,
                });
            }
        }

        let customization = pricing::resolve_selection(catalog, product, &request.selection);
        let cart_id = self.fresh_cart_id();
        self.items.push(CartItem::new(
            cart_id.clone(),
            product,
            customization,
            request.quantity,
        ));

        Ok(Added {
            cart_id,
            merged: false,
        })
    }

    pub fn remove_item(&mut self, cart_id: &str) -> Result<CartItem, OrderError> {
        let index = self
            .items
            .iter()
            .position(|i| i.cart_id() == cart_id)
            .ok_or_else(|| missing_cart_id(cart_id))?;
        Ok(self.items.remove(index))
    }

    /// Changes a line's quantity, returning the previous one. Unit price is untouched.
    pub fn set_quantity(&mut self, cart_id: &str, quantity: i64) -> Result<u32, OrderError> {
        let quantity = checked_quantity(quantity)?;

        let item = self
            .items
            .iter_mut()
            .find(|i| i.cart_id() == cart_id)
            .ok_or_else(|| missing_cart_id(cart_id))?;

        let previous = item.quantity();
        item.set_quantity(quantity);
        Ok(previous)
    }

    pub fn set_checkout_info(&mut self, info: CheckoutInfo) {
        self.checkout_info = Some(info);
    }

    pub fn place(&mut self, order_number: String) {
        self.status = OrderStatus::Placed { order_number };
    }

    pub fn is_placed(&self) -> bool {
        matches!(self.status, OrderStatus::Placed { .. })
    }

    pub fn item(&self, cart_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.cart_id() == cart_id)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn order_type(&self) -> Option<OrderType> {
        self.order_type
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn checkout_info(&self) -> Option<&CheckoutInfo> {
        self.checkout_info.as_ref()
    }

    pub fn status(&self) -> &OrderStatus {
        &self.status
    }

    pub fn totals(&self) -> Totals {
        pricing::cart_totals(&self.items, self.order_type)
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            order_type: self.order_type,
            address: self.address.clone(),
            status: self.status.clone(),
            items: self.items.iter().map(CartItem::to_line).collect(),
            totals: self.totals(),
        }
    }

    fn fresh_cart_id(&self) -> String {
        loop {
            let id = new_cart_id();
            if self.item(&id).is_none() {
                return id;
            }
        }
    }
}

fn missing_cart_id(cart_id: &str) -> OrderError {
    OrderError::not_found("cartId", format!("cart ID \"{cart_id}\" not found"))
}

/// Narrows a requested quantity to a line quantity of at least one.
pub fn checked_quantity(quantity: i64) -> Result<u32, OrderError> {
    if quantity < 1 {
        return Err(OrderError::validation("quantity", "must be at least 1"));
    }
    u32::try_from(quantity).map_err(|_| {
        OrderError::validation("quantity", format!("must be at most {}", u32::MAX))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn catalog() -> Catalog {
        Catalog::checkers().unwrap()
    }

    #[test]
    fn test_plain_products_merge() {
        let catalog = catalog();
        let mut order = Order::new();

        let first = order.add_item(&catalog, &ItemRequest::new("coca-cola", 1)).unwrap();
        let second = order.add_item(&catalog, &ItemRequest::new("coca-cola", 2)).unwrap();

        assert!(!first.merged);
        assert!(second.merged);
        assert_eq!(first.cart_id, second.cart_id);
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.items()[0].quantity(), 3);
        assert_eq!(order.items()[0].line_total(), Decimal::new(747, 2));
    }

    #[test]
    fn test_customizable_products_never_merge() {
        let catalog = catalog();
        let mut order = Order::new();

        let a = order.add_item(&catalog, &ItemRequest::new("pepperoni", 1)).unwrap();
        let b = order.add_item(&catalog, &ItemRequest::new("pepperoni", 1)).unwrap();

        assert_ne!(a.cart_id, b.cart_id);
        assert_eq!(order.items().len(), 2);
        assert_eq!(a.cart_id.len(), 8);
        assert!(a.cart_id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_unknown_product_is_not_found() {
        let catalog = catalog();
        let mut order = Order::new();

        let err = order
            .add_item(&catalog, &ItemRequest::new("calzone", 1))
            .unwrap_err();
        assert_eq!(err.kind(), "not_found");
        assert!(order.is_empty());
    }

    #[test]
    fn test_unknown_topping_is_rejected() {
        let catalog = catalog();
        let mut order = Order::new();
        let request = ItemRequest::new("cheese", 1).with_selection(Selection {
            toppings: Some(vec!["anchovies".into()]),
            ..Selection::default()
        });

        let err = order.add_item(&catalog, &request).unwrap_err();
        assert!(err.to_string().contains("anchovies"));
        assert!(order.is_empty());
    }

    #[test]
    fn test_quantity_change_keeps_unit_price() {
        let catalog = catalog();
        let mut order = Order::new();
        let added = order.add_item(&catalog, &ItemRequest::new("supreme", 1)).unwrap();
        let unit = order.items()[0].unit_price();

        let previous = order.set_quantity(&added.cart_id, 3).unwrap();

        assert_eq!(previous, 1);
        assert_eq!(order.items()[0].unit_price(), unit);
        assert_eq!(order.items()[0].line_total(), unit * Decimal::from(3));
    }

    #[test]
    fn test_set_quantity_rejects_out_of_range() {
        let catalog = catalog();
        let mut order = Order::new();
        let added = order.add_item(&catalog, &ItemRequest::new("sprite", 2)).unwrap();

        assert_eq!(order.set_quantity(&added.cart_id, 0).unwrap_err().kind(), "validation_error");
        assert_eq!(order.set_quantity(&added.cart_id, -4).unwrap_err().kind(), "validation_error");
        assert_eq!(order.set_quantity("ffffffff", 2).unwrap_err().kind(), "not_found");

        let too_many = order
            .set_quantity(&added.cart_id, i64::from(u32::MAX) + 1)
            .unwrap_err();
        assert_eq!(too_many.problems()[0].message, "must be at most 4294967295");
        assert_eq!(order.item(&added.cart_id).unwrap().quantity(), 2);
        assert_eq!(order.items()[0].quantity(), 2);
    }

    #[test]
    fn test_remove_item() {
        let catalog = catalog();
        let mut order = Order::new();
        let added = order.add_item(&catalog, &ItemRequest::new("lemonade", 1)).unwrap();

        assert_eq!(order.remove_item("00000000").unwrap_err().kind(), "not_found");
        let removed = order.remove_item(&added.cart_id).unwrap();
        assert_eq!(removed.product_id(), "lemonade");
        assert!(order.is_empty());
    }

    #[test]
    fn test_delivery_requires_address() {
        let mut order = Order::new();

        assert!(order.set_fulfillment(OrderType::Delivery, None).is_err());
        assert!(order.set_fulfillment(OrderType::Delivery, Some("   ")).is_err());
        assert_eq!(order.order_type(), None);

        order
            .set_fulfillment(OrderType::Delivery, Some("1 Microsoft Way"))
            .unwrap();
        assert_eq!(order.address(), Some("1 Microsoft Way"));

        order.set_fulfillment(OrderType::Carryout, None).unwrap();
        assert_eq!(order.order_type(), Some(OrderType::Carryout));
        assert_eq!(order.address(), None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let catalog = catalog();
        let mut order = Order::new();
        order.set_fulfillment(OrderType::Carryout, None).unwrap();
        order.add_item(&catalog, &ItemRequest::new("veggie", 1)).unwrap();
        order.place("ABCDEF12".into());

        order.reset();

        assert_eq!(order, Order::new());
        assert!(!order.is_placed());
    }
}
