//! Change-order wizard UI crate.
//!
//! A Dioxus front end for processing change orders against an existing
//! order record: pick the change-order type, optionally rework the order
//! team, confirm, and hand off to the change order service. State lives in
//! a single reducer ([`wizard::WizardState`]); remote calls and host
//! effects sit behind traits so the flow logic is testable off the browser.

pub mod app;
pub mod components;
pub mod services;
pub mod utils;
pub mod wizard;

pub use app::ChangeOrderWizard;
