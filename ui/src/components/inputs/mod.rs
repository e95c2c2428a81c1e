pub mod role_select;
pub mod validated_input;

pub use role_select::*;
pub use validated_input::*;
