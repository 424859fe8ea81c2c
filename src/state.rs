//! Application State
//!
//! One order session shared by every handler, the read-only catalog, and the
//! confirmation gate checkout waits on.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::cart::Order;
use crate::catalog::{Catalog, CatalogError};
use crate::config::{ConfirmMode, ServerConfig};
use crate::error::OrderError;
use crate::ui::{AutoConfirm, Confirmer, WidgetConfirmer};

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub catalog: Catalog,

    /// Held for the whole duration of a command, including checkout's
    /// confirmation wait.
    order: Mutex<Order>,

    /// Gate consulted by checkout.
    pub confirmer: Arc<dyn Confirmer>,

    /// Widget-facing side of the gate, answered through `POST /confirmation`.
    pub confirmations: Arc<WidgetConfirmer>,
}

impl AppState {
    pub fn new(catalog: Catalog, confirm_mode: ConfirmMode, widget: WidgetConfirmer) -> Self {
        let confirmations = Arc::new(widget);
        let confirmer: Arc<dyn Confirmer> = match confirm_mode {
            ConfirmMode::Widget => confirmations.clone(),
            ConfirmMode::AutoApprove => Arc::new(AutoConfirm::approve()),
            ConfirmMode::AutoDecline => Arc::new(AutoConfirm::decline()),
        };

        Self {
            catalog,
            order: Mutex::new(Order::new()),
            confirmer,
            confirmations,
        }
    }

    /// Loads the configured catalog (or the built-in menu) and wires the gate.
    pub fn from_config(config: &ServerConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading catalog");
                Catalog::from_json_file(path)?
            }
            None => Catalog::checkers()?,
        };

        Ok(Self::new(
            catalog,
            config.confirm_mode,
            WidgetConfirmer::new(config.confirm_timeout),
        ))
    }

    /// Claims the order for one command; fails instead of queueing when busy.
    pub fn try_claim_order(&self) -> Result<MutexGuard<'_, Order>, OrderError> {
        self.order.try_lock().map_err(|_| OrderError::Busy)
    }
}
