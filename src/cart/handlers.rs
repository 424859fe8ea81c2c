//! REST API handlers for the order widget
//!
//! This module implements HTTP endpoints for reading the cart and for
//! answering the checkout confirmation prompt.

use super::models::CartSnapshot;
use crate::state::SharedState;
use crate::ui::ConfirmationRequest;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(get_cart))
        .route(
            "/confirmation",
            get(get_confirmation).post(answer_confirmation),
        )
}

#[derive(Debug, Deserialize)]
pub struct ConfirmationAnswer {
    pub approved: bool,
}

#[derive(Debug, Serialize)]
pub struct ConfirmationStatus {
    pub status: &'static str,
}

/// Endpoint: GET /cart
/// Returns the current order. Refused while a command holds the order.
async fn get_cart(State(state): State<SharedState>) -> Response {
    match state.try_claim_order() {
        Ok(order) => {
            let snapshot: CartSnapshot = order.snapshot();
            Json(snapshot).into_response()
        }
        Err(busy) => (StatusCode::CONFLICT, Json(busy.to_payload())).into_response(),
    }
}

/// Endpoint: GET /confirmation
/// The prompt checkout is waiting on, if any.
async fn get_confirmation(State(state): State<SharedState>) -> Response {
    match state.confirmations.pending() {
        Some(request) => Json::<ConfirmationRequest>(request).into_response(),
        None => no_pending_confirmation(),
    }
}

/// Endpoint: POST /confirmation
/// Approves or declines the pending checkout.
async fn answer_confirmation(
    State(state): State<SharedState>,
    Json(answer): Json<ConfirmationAnswer>,
) -> Response {
    if !state.confirmations.resolve(answer.approved) {
        return no_pending_confirmation();
    }

    tracing::info!(approved = answer.approved, "confirmation answered");
    Json(ConfirmationStatus {
        status: if answer.approved { "approved" } else { "declined" },
    })
    .into_response()
}

fn no_pending_confirmation() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "no confirmation pending" })),
    )
        .into_response()
}
