//! User-overridable presentation settings: key sequences mapped to
//! [`Action`](crate::action::Action)s and palette slot colors.

pub mod keybindings;
pub mod styles;

pub use keybindings::KeyBindings;
pub use styles::Styles;
