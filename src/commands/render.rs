//! Markdown summaries returned alongside structured results.

use crate::cart::models::CartItem;
use crate::cart::pricing::{format_money, EXTRA_TOPPING_PRICE, TAX_RATE};
use crate::cart::store::Order;
use crate::catalog::Catalog;
use crate::error::Problem;

/// The full menu, grouped by category, plus customization tables.
pub fn menu_markdown(catalog: &Catalog) -> String {
    let store = catalog.store();
    let mut lines = vec![
        format!("# {}", store.name),
        String::new(),
        format!(
            "- **Address:** {}, {}, {} {}",
            store.address, store.city, store.state, store.zip
        ),
        format!("- **Phone:** {}", store.phone),
        format!("- **Delivery Estimate:** {}", store.delivery_estimate),
        "- **Hours:**".to_string(),
        format!(
            "  - Carryout: Sun–Thu {}, Fri–Sat {}",
            store.hours.carryout.sun_thu, store.hours.carryout.fri_sat
        ),
        format!(
            "  - Delivery: Sun–Thu {}, Fri–Sat {}",
            store.hours.delivery.sun_thu, store.hours.delivery.fri_sat
        ),
        String::new(),
        "## Menu".to_string(),
    ];

    for category in catalog.categories() {
        let mut products = catalog.products_by_category(&category.id).peekable();
        if products.peek().is_none() {
            continue;
        }

        lines.push(String::new());
        lines.push(format!("### {}", category.name));
        lines.push(String::new());

        for p in products {
            let emoji = p.emoji.as_deref().map(|e| format!("{e} ")).unwrap_or_default();
            let tag = p.tag.as_deref().map(|t| format!(" `{t}`")).unwrap_or_default();
            lines.push(format!("- {emoji}**{}**{tag}", p.name));
            lines.push(format!("  - *{}*", p.description));
            lines.push(format!("  - **ID:** `{}`", p.id));
            lines.push(format!("  - **Base Price:** {}", format_money(p.base_price)));
            lines.push(format!("  - **Calories:** {}", p.calories));
            lines.push(format!(
                "  - **Customizable:** {}",
                if p.customizable { "Yes" } else { "No" }
            ));
            if p.customizable {
                let defaults = if p.default_toppings.is_empty() {
                    "None".to_string()
                } else {
                    p.default_toppings.join(", ")
                };
                lines.push(format!("  - **Default Toppings:** {defaults}"));
            }
        }
    }

    lines.push(String::new());
    lines.push("## Customization Options".to_string());
    lines.push(String::new());
    lines.push("### Sizes".to_string());
    for s in catalog.sizes() {
        lines.push(format!(
            "- **{}** (`{}`) {}",
            s.name,
            s.id,
            signed_money(s.price_modifier)
        ));
    }
    lines.push(String::new());
    lines.push("### Crusts".to_string());
    for c in catalog.crusts() {
        let default = if c.is_default { " *(default)*" } else { "" };
        lines.push(format!(
            "- **{}** (`{}`) {}{default}",
            c.name,
            c.id,
            signed_money(c.price_modifier)
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "### Toppings ({} each beyond defaults)",
        format_money(EXTRA_TOPPING_PRICE)
    ));
    for t in catalog.list_toppings() {
        lines.push(format!("- {} (`{}`)", t.name, t.id));
    }
    lines.push(String::new());
    lines.push(format!(
        "Delivery orders add a {} fee. Tax is {}% of subtotal plus delivery fee.",
        format_money(crate::cart::pricing::DELIVERY_FEE),
        (TAX_RATE * rust_decimal::Decimal::ONE_HUNDRED).normalize()
    ));

    lines.join("\n")
}

fn signed_money(amount: rust_decimal::Decimal) -> String {
    if amount.is_sign_positive() && !amount.is_zero() {
        format!("+{}", format_money(amount))
    } else {
        format_money(amount)
    }
}

fn item_line(item: &CartItem) -> String {
    let options = item
        .description()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default();
    format!(
        "- {}x **{}**{options}: {} (`{}`)",
        item.quantity(),
        item.name(),
        format_money(item.line_total()),
        item.cart_id()
    )
}

/// Cart contents and totals.
pub fn cart_markdown(order: &Order) -> String {
    let mut lines = vec!["## Cart".to_string(), String::new()];

    if order.is_empty() {
        lines.push("*Cart is empty.*".to_string());
    } else {
        lines.extend(order.items().iter().map(item_line));
    }

    let totals = order.totals();
    lines.push(String::new());
    lines.push(format!("- **Subtotal:** {}", format_money(totals.subtotal)));
    lines.push(format!("- **Delivery Fee:** {}", format_money(totals.delivery_fee)));
    lines.push(format!("- **Tax:** {}", format_money(totals.tax)));
    lines.push(format!("- **Total:** {}", format_money(totals.total)));

    lines.join("\n")
}

pub fn order_created(order: &Order) -> String {
    let mut lines = vec!["# Order Created".to_string(), String::new()];
    if let Some(order_type) = order.order_type() {
        lines.push(format!("- **Type:** {order_type}"));
    }
    if let Some(address) = order.address() {
        lines.push(format!("- **Delivery Address:** {address}"));
    }
    lines.push(String::new());
    lines.push(cart_markdown(order));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(
        "Ready for checkout. Use **update-order** to modify or **checkout** to complete the order."
            .to_string(),
    );
    lines.join("\n")
}

pub fn order_updated(changes: &[String], errors: &[Problem], order: &Order) -> String {
    let mut lines = vec!["# Order Updated".to_string(), String::new()];

    if !errors.is_empty() {
        lines.push("## Errors".to_string());
        lines.push(String::new());
        lines.extend(errors.iter().map(|e| format!("- {e}")));
        lines.push(String::new());
    }

    if !changes.is_empty() {
        lines.push("## Changes".to_string());
        lines.push(String::new());
        lines.extend(changes.iter().map(|c| format!("- {c}")));
        lines.push(String::new());
    }

    lines.push(cart_markdown(order));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push("Use **update-order** to make more changes or **checkout** to complete.".to_string());
    lines.join("\n")
}

pub fn order_placed(order: &Order, order_number: &str) -> String {
    let mut lines = vec![
        "# Order Placed".to_string(),
        String::new(),
        format!("- **Order Number:** {order_number}"),
    ];
    if let Some(info) = order.checkout_info() {
        lines.push(format!("- **Name:** {} {}", info.first_name, info.last_name));
        lines.push(format!("- **Phone:** {}", info.phone));
        lines.push(format!("- **Email:** {}", info.email));
        if info.leave_at_door {
            lines.push("- **Leave at door:** yes".to_string());
        }
        if let Some(instructions) = &info.delivery_instructions {
            lines.push(format!("- **Instructions:** {instructions}"));
        }
    }
    lines.push(String::new());
    lines.push(cart_markdown(order));
    lines.join("\n")
}

pub fn checkout_declined(order: &Order) -> String {
    [
        "# Order Not Placed".to_string(),
        String::new(),
        "The customer did not confirm the order. The cart is unchanged; call **checkout** again to retry or **update-order** to change it.".to_string(),
        String::new(),
        cart_markdown(order),
    ]
    .join("\n")
}
