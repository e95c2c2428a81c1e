//! User Interface Components
//!
//! Reusable Dioxus components for the change-order wizard:
//!
//! - **forms**: the three wizard pages
//! - **display**: spinner and status displays
//! - **inputs**: validated input fields and form controls

pub mod display;
pub mod forms;
pub mod inputs;
