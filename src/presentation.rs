//! Presentation layer
//!
//! - Theme: palette and variant lookup tables
//! - Widgets: themed ratatui widgets
//! - Components: the showcase pages
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod theme;
pub mod widgets;
