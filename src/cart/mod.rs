//! Shopping Cart Domain Module
//!
//! This module contains the order in progress and everything that prices it:
//! - Domain models (CartItem, OrderType, snapshots)
//! - The pricing engine
//! - The cart store with its add/remove/quantity operations
//! - REST handlers for cart snapshots and checkout confirmation

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod pricing;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use store::Order;
