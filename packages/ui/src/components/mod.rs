//! Shared form components.

mod button;
mod input;
mod label;

pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use label::Label;
