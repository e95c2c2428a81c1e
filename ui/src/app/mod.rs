//! Root wizard component wiring state, services, and page forms together.

mod change_order_wizard;

pub use change_order_wizard::ChangeOrderWizard;
