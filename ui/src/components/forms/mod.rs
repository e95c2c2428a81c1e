pub mod change_order_form;
pub mod confirmation_form;
pub mod order_team_form;

pub use change_order_form::*;
pub use confirmation_form::*;
pub use order_team_form::*;
