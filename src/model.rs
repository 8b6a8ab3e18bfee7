//! Headless widget state
//!
//! Every model owns its state exclusively and changes only through
//! `update(Message)`. Nothing here renders; see `presentation::widgets`.

pub mod boot_sequence;
pub mod disclosure;
pub mod focus;
pub mod history;
pub mod progress;
pub mod selection;
pub mod stopwatch;
pub mod terminal;
pub mod toggle;
