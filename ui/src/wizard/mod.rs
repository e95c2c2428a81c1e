//! Change-order wizard core: view state and its reducer, validation rules,
//! pure flow decisions, and the async orchestration around the remote calls.
//!
//! The controller owns no rendering. Components read `WizardState` through a
//! Dioxus signal and mutate it exclusively by dispatching `WizardAction`s;
//! toasts, navigation and dismissal go through the host bridge.

pub mod form_validation;
pub mod logic;
pub mod orchestrator;
pub mod types;

pub use form_validation::*;
pub use logic::*;
pub use orchestrator::*;
pub use types::*;
