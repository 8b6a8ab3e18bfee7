//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - Terminal lifecycle and event stream
//! - CLI argument processing
//! - Layered configuration
//! - Widget-owned periodic timers

pub mod cli;
pub mod config;
pub mod ticker;
pub mod tui;
