//! Collaborator Interfaces
//!
//! The order core reports state changes to a presentation layer and asks a
//! human for final approval before placing an order. Both are modelled as
//! traits so the HTTP server, tests and headless runs can plug in their own.

pub mod confirm;
pub mod presenter;

pub use confirm::{AutoConfirm, ConfirmationRequest, Confirmer, WidgetConfirmer};
pub use presenter::{Presenter, RecordingPresenter, UiEvent};
