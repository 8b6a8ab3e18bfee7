//! Themed widgets
//!
//! Each widget is a small builder over a model (or plain values) that
//! implements ratatui's `Widget`. Rendering is a pure function of the
//! builder's inputs, the [`Theme`](crate::presentation::theme::Theme) and,
//! for animated variants, the frame counter.

pub mod accordion;
pub mod badge;
pub mod boot_screen;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod dialog;
pub mod dropdown_menu;
pub mod input;
pub mod layout;
pub mod progress;
pub mod radio_group;
pub mod select;
pub mod separator;
pub mod stopwatch;
pub mod switch;
pub mod tab_bar;
pub mod terminal;
pub mod toggle;
pub mod tooltip;

pub use accordion::{Accordion, AccordionItem};
pub use badge::Badge;
pub use boot_screen::BootScreen;
pub use button::Button;
pub use card::Card;
pub use checkbox::Checkbox;
pub use dialog::Dialog;
pub use dropdown_menu::{DropdownMenu, MenuItem};
pub use input::Input;
pub use progress::ProgressBar;
pub use radio_group::RadioGroup;
pub use select::Select;
pub use separator::Separator;
pub use stopwatch::StopwatchView;
pub use switch::Switch;
pub use tab_bar::TabBar;
pub use terminal::TerminalView;
pub use toggle::ToggleButton;
pub use tooltip::Tooltip;

/// Rendered buffer rows, for assertions.
#[cfg(test)]
pub(crate) fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let width = usize::from(buffer.area.width).max(1);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}
