//! Shopping Cart Helpers
//!
//! Identifier generation and short formatting used by the cart and its callers.

use super::models::CartItem;
use uuid::Uuid;

/// Eight lowercase hex characters, used to address a cart line.
pub fn new_cart_id() -> String {
    Uuid::new_v4().simple().to_string().chars().take(8).collect()
}

/// Eight uppercase hex characters identifying a placed order.
pub fn new_order_number() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(8)
        .collect::<String>()
        .to_uppercase()
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x Pepperoni, 1x Sprite®"`.
pub fn format_item_summary(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity(), i.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_shapes() {
        let cart_id = new_cart_id();
        assert_eq!(cart_id.len(), 8);
        assert!(cart_id.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));

        let number = new_order_number();
        assert_eq!(number.len(), 8);
        assert!(number.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }
}
