//! Neon palette and variant lookup tables
//!
//! Every named preset (button variant, size, glow, ...) resolves to visual
//! attributes through a pure table over a [`Theme`]. Same inputs, same output.

pub mod palette;
pub mod variant;

pub use palette::Theme;
pub use variant::{
    Animation, BadgeVariant, ButtonVariant, CardVariant, Glow, Size, SizeSpec, Tone,
};
