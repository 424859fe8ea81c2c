//! Human-in-the-loop confirmation gate used by checkout.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;

/// What the human is asked to approve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationRequest {
    pub customer: String,
    pub items: String,
    pub total: String,
    pub message: String,
}

/// Yes/no gate consulted before an order is placed.
#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, request: &ConfirmationRequest) -> bool;
}

/// Answers every request the same way; for unattended runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm {
    pub approve: bool,
}

impl AutoConfirm {
    pub fn approve() -> Self {
        Self { approve: true }
    }

    pub fn decline() -> Self {
        Self { approve: false }
    }
}

#[async_trait]
impl Confirmer for AutoConfirm {
    async fn confirm(&self, request: &ConfirmationRequest) -> bool {
        tracing::info!(approve = self.approve, total = %request.total, "auto confirmation");
        self.approve
    }
}

struct Pending {
    request: ConfirmationRequest,
    responder: oneshot::Sender<bool>,
}

/// Parks the checkout until the widget posts an answer or the timeout expires.
///
/// An unanswered request counts as declined.
pub struct WidgetConfirmer {
    slot: Mutex<Option<Pending>>,
    timeout: Duration,
}

impl WidgetConfirmer {
    pub fn new(timeout: Duration) -> Self {
        Self {
            slot: Mutex::new(None),
            timeout,
        }
    }

    /// The request currently awaiting an answer, if any.
    pub fn pending(&self) -> Option<ConfirmationRequest> {
        self.lock().as_ref().map(|p| p.request.clone())
    }

    /// Answers the pending request. Returns false when nothing was pending.
    pub fn resolve(&self, approved: bool) -> bool {
        let Some(pending) = self.lock().take() else {
            return false;
        };
        // The checkout may have timed out in the meantime.
        pending.responder.send(approved).is_ok()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Pending>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Confirmer for WidgetConfirmer {
    async fn confirm(&self, request: &ConfirmationRequest) -> bool {
        let (responder, answer) = oneshot::channel();
        *self.lock() = Some(Pending {
            request: request.clone(),
            responder,
        });
        let _clear = ClearOnDrop(self);
        tracing::info!(total = %request.total, "awaiting customer confirmation");

        let approved = match tokio::time::timeout(self.timeout, answer).await {
            Ok(Ok(approved)) => approved,
            Ok(Err(_)) => false,
            Err(_) => {
                tracing::warn!(timeout = ?self.timeout, "confirmation timed out");
                false
            }
        };

        approved
    }
}

/// Empties the slot when `confirm` finishes or its future is dropped mid-wait.
struct ClearOnDrop<'a>(&'a WidgetConfirmer);

impl Drop for ClearOnDrop<'_> {
    fn drop(&mut self) {
        self.0.lock().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn request() -> ConfirmationRequest {
        ConfirmationRequest {
            customer: "Ada Lovelace".into(),
            items: "1x Pepperoni".into(),
            total: "$14.22".into(),
            message: "Place order?".into(),
        }
    }

    #[tokio::test]
    async fn test_auto_confirm() {
        assert!(AutoConfirm::approve().confirm(&request()).await);
        assert!(!AutoConfirm::decline().confirm(&request()).await);
    }

    #[tokio::test]
    async fn test_widget_confirmer_resolves() {
        let confirmer = Arc::new(WidgetConfirmer::new(Duration::from_secs(5)));
        assert!(!confirmer.resolve(true));

        let waiting = {
            let confirmer = confirmer.clone();
            tokio::spawn(async move { confirmer.confirm(&request()).await })
        };

        while confirmer.pending().is_none() {
            tokio::task::yield_now().await;
        }
        assert_eq!(confirmer.pending().unwrap().customer, "Ada Lovelace");
        assert!(confirmer.resolve(true));

        assert!(waiting.await.unwrap());
        assert!(confirmer.pending().is_none());
    }

    #[tokio::test]
    async fn test_cancelled_checkout_clears_prompt() {
        let confirmer = Arc::new(WidgetConfirmer::new(Duration::from_secs(5)));

        let waiting = {
            let confirmer = confirmer.clone();
            tokio::spawn(async move { confirmer.confirm(&request()).await })
        };
        while confirmer.pending().is_none() {
            tokio::task::yield_now().await;
        }

        waiting.abort();
        assert!(waiting.await.unwrap_err().is_cancelled());

        assert!(confirmer.pending().is_none());
        assert!(!confirmer.resolve(true));
    }

    #[tokio::test]
    async fn test_widget_confirmer_times_out_as_declined() {
        let confirmer = WidgetConfirmer::new(Duration::from_millis(10));
        assert!(!confirmer.confirm(&request()).await);
        assert!(confirmer.pending().is_none());
    }
}
