//! # Neonkit - cyberpunk widgets for ratatui
//!
//! A kit of neon-themed terminal widgets and the models that drive them,
//! plus a showcase application that puts every widget on a page.
//!
//! ## Architecture Overview
//!
//! - **Model** ([`model`]): plain state machines updated by messages
//!   (`update(Message)`), free of any terminal or clock access
//! - **Widget** ([`presentation::widgets`]): builders that render a model
//!   with a [`Theme`](presentation::theme::Theme)
//! - **Component** ([`presentation::components`]): showcase pages that own
//!   models, react to keys and [`Action`](action::Action)s and draw widgets
//! - **App** ([`app`]): the event loop tying the terminal, keybindings and
//!   pages together
//!
//! ## Example Usage
//!
//! ```rust
//! use neonkit::model::stopwatch::{Message, Stopwatch};
//!
//! let mut stopwatch = Stopwatch::new();
//! stopwatch.update(Message::Started);
//! for _ in 0..150 {
//!     stopwatch.update(Message::Ticked);
//! }
//!
//! assert_eq!(stopwatch.formatted(), "00:01.50");
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Widget state and transitions
//! - [`presentation`] - Theme, widgets, pages and config types
//! - [`infrastructure`] - Terminal, tickers, CLI and config loading
//! - [`utils`] - Logging, panic handling and paths

pub mod action;
pub mod app;
pub mod infrastructure;
pub mod model;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
