//! One-way notifications to the presentation layer.

use serde::Serialize;
use std::sync::{Mutex, PoisonError};

/// Step shown while the customer reviews the cart and checks out.
pub const CHECKOUT_STEP: u8 = 7;
/// Step shown once the order has been placed.
pub const ORDER_PLACED_STEP: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum UiEvent {
    /// An agent started working on the user's behalf.
    #[serde(rename_all = "camelCase")]
    ShowWorking { agent_name: String },
    HideWorking,
    AdvanceToStep { step: u8 },
    RenderCart,
}

/// Receiver of UI notifications. Calls never return data to the core.
pub trait Presenter: Send + Sync {
    fn notify(&self, event: UiEvent);
}

/// Buffers events so a transport can forward them with its response.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    events: Mutex<Vec<UiEvent>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the recorded events.
    pub fn take(&self) -> Vec<UiEvent> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *events)
    }
}

impl Presenter for RecordingPresenter {
    fn notify(&self, event: UiEvent) {
        tracing::debug!(?event, "ui notification");
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_presenter_drains() {
        let presenter = RecordingPresenter::new();
        presenter.notify(UiEvent::HideWorking);
        presenter.notify(UiEvent::AdvanceToStep { step: CHECKOUT_STEP });

        assert_eq!(
            presenter.take(),
            vec![UiEvent::HideWorking, UiEvent::AdvanceToStep { step: 7 }]
        );
        assert!(presenter.take().is_empty());
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_value(UiEvent::ShowWorking {
            agent_name: "Copilot".into(),
        })
        .unwrap();
        assert_eq!(json["event"], "showWorking");
        assert_eq!(json["agentName"], "Copilot");
    }
}
