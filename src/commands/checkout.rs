//! Checkout Finalizer
//!
//! Validates contact details, asks the customer to confirm, and places the
//! order once approved. A declined confirmation leaves the cart as it was.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use super::models::{CheckoutInput, CommandOutput};
use super::render;
use crate::cart::helpers::{format_item_summary, new_order_number};
use crate::cart::models::CheckoutInfo;
use crate::cart::pricing::format_money;
use crate::cart::store::Order;
use crate::error::{OrderError, Problem};
use crate::ui::presenter::{CHECKOUT_STEP, ORDER_PLACED_STEP};
use crate::ui::{ConfirmationRequest, Confirmer, Presenter, UiEvent};

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\(\d{3}\)|\d{3})[-.\s]?\d{3}[-.\s]?\d{4}$").expect("phone pattern compiles")
});

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Checks every contact field, reporting all failures at once.
pub fn validate_contact(input: &CheckoutInput) -> Result<CheckoutInfo, OrderError> {
    let mut problems = Vec::new();

    let first_name = input.first_name.trim();
    let last_name = input.last_name.trim();
    let phone = input.phone.trim();
    let email = input.email.trim();

    if first_name.is_empty() {
        problems.push(Problem::new("firstName", "is required"));
    }
    if last_name.is_empty() {
        problems.push(Problem::new("lastName", "is required"));
    }
    if !PHONE.is_match(phone) {
        problems.push(Problem::new("phone", "must be a 10-digit phone number"));
    }
    if !EMAIL.is_match(email) {
        problems.push(Problem::new("email", "must be a valid email address"));
    }

    if !problems.is_empty() {
        return Err(OrderError::Validation(problems));
    }

    Ok(CheckoutInfo {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        leave_at_door: input.leave_at_door,
        delivery_instructions: input
            .delivery_instructions
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    })
}

/// Runs checkout against the order. The confirmation gate is the only await point.
pub async fn finalize(
    order: &mut Order,
    input: CheckoutInput,
    presenter: &dyn Presenter,
    confirmer: &dyn Confirmer,
) -> Result<CommandOutput, OrderError> {
    if order.is_placed() {
        return Err(OrderError::OrderPlaced);
    }
    if order.is_empty() {
        return Err(OrderError::EmptyCart("Call create-order first.".to_string()));
    }
    if order.order_type().is_none() {
        return Err(OrderError::validation(
            "orderType",
            "no order type set; call create-order first",
        ));
    }

    let info = validate_contact(&input)?;
    let request = ConfirmationRequest {
        customer: format!("{} {}", info.first_name, info.last_name),
        items: format_item_summary(order.items()),
        total: format_money(order.totals().total),
        message: format!(
            "Place this {} order for {}?",
            order.order_type().map(|t| t.to_string()).unwrap_or_default(),
            format_money(order.totals().total)
        ),
    };

    order.set_checkout_info(info);
    presenter.notify(UiEvent::AdvanceToStep {
        step: CHECKOUT_STEP,
    });

    if !confirmer.confirm(&request).await {
        tracing::info!(customer = %request.customer, "checkout declined");
        return Ok(CommandOutput {
            summary: render::checkout_declined(order),
            structured: json!({
                "placed": false,
                "cart": order.snapshot(),
            }),
        });
    }

    let order_number = new_order_number();
    order.place(order_number.clone());
    presenter.notify(UiEvent::AdvanceToStep {
        step: ORDER_PLACED_STEP,
    });
    tracing::info!(
        order_number = %order_number,
        items = %request.items,
        total = %request.total,
        "order placed"
    );

    Ok(CommandOutput {
        summary: render::order_placed(order, &order_number),
        structured: json!({
            "placed": true,
            "orderNumber": order_number,
            "checkoutInfo": order.checkout_info(),
            "cart": order.snapshot(),
        }),
    })
}
