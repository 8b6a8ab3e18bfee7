use ratatui::style::{Color, Modifier, Style};

use crate::presentation::config::Styles;

pub const CYAN: Color = Color::Rgb(0, 255, 255);
pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
pub const VIOLET: Color = Color::Rgb(157, 78, 221);
pub const MATRIX_GREEN: Color = Color::Rgb(0, 255, 100);
pub const HOT_PINK: Color = Color::Rgb(255, 51, 102);
pub const AMBER: Color = Color::Rgb(255, 176, 0);
pub const STEEL: Color = Color::Rgb(110, 110, 140);
pub const VOID: Color = Color::Rgb(8, 8, 14);
pub const GHOST_WHITE: Color = Color::Rgb(230, 230, 240);
pub const GRID: Color = Color::Rgb(40, 40, 64);

/// Palette slots every variant is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub destructive: Color,
    pub success: Color,
    pub warning: Color,
    pub muted: Color,
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: CYAN,
            secondary: VIOLET,
            accent: MAGENTA,
            destructive: HOT_PINK,
            success: MATRIX_GREEN,
            warning: AMBER,
            muted: STEEL,
            background: VOID,
            foreground: GHOST_WHITE,
            border: GRID,
        }
    }
}

impl Theme {
    /// Default palette with every slot named in `styles` replaced by that
    /// style's foreground color. Unknown slot names are ignored.
    pub fn from_styles(styles: &Styles) -> Self {
        let mut theme = Self::default();
        for (slot, style) in styles.iter() {
            let Some(color) = style.fg else {
                continue;
            };
            match slot.as_str() {
                "primary" => theme.primary = color,
                "secondary" => theme.secondary = color,
                "accent" => theme.accent = color,
                "destructive" => theme.destructive = color,
                "success" => theme.success = color,
                "warning" => theme.warning = color,
                "muted" => theme.muted = color,
                "background" => theme.background = color,
                "foreground" => theme.foreground = color,
                "border" => theme.border = color,
                other => log::warn!("Unknown style slot in config: {other}"),
            }
        }
        theme
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn muted_text(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border of the element that has keyboard focus.
    pub fn focus_ring(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn disabled(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
    }
}
