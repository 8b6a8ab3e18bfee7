use ratatui::{
    style::{Modifier, Style},
    widgets::BorderType,
};
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use super::Theme;

/// Frames per pulse half-cycle.
pub const PULSE_FRAMES: u64 = 8;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Destructive,
    Outline,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub fn style(self, theme: &Theme) -> Style {
        let base = Style::default().bg(theme.background);
        match self {
            Self::Default => base.fg(theme.primary),
            Self::Primary => Style::default()
                .fg(theme.background)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD),
            Self::Secondary => base.fg(theme.secondary),
            Self::Destructive => Style::default()
                .fg(theme.background)
                .bg(theme.destructive)
                .add_modifier(Modifier::BOLD),
            Self::Outline => base.fg(theme.foreground),
            Self::Ghost => base.fg(theme.primary),
            Self::Link => base.fg(theme.primary).add_modifier(Modifier::UNDERLINED),
        }
    }

    pub fn border_style(self, theme: &Theme) -> Style {
        let color = match self {
            Self::Default | Self::Primary | Self::Ghost | Self::Link => theme.primary,
            Self::Secondary => theme.secondary,
            Self::Destructive => theme.destructive,
            Self::Outline => theme.border,
        };
        Style::default().fg(color)
    }

    pub fn border_type(self) -> BorderType {
        match self {
            Self::Primary | Self::Destructive => BorderType::Thick,
            Self::Outline => BorderType::Plain,
            _ => BorderType::Rounded,
        }
    }

    pub fn has_border(self) -> bool {
        !matches!(self, Self::Ghost | Self::Link)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    Sm,
    #[default]
    Default,
    Lg,
}

/// Geometry for one [`Size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    /// Rows including the border, when there is one.
    pub height: u16,
    /// Blank columns on each side of the label.
    pub padding_x: u16,
    pub bordered: bool,
    pub bold: bool,
}

impl Size {
    pub fn spec(self) -> SizeSpec {
        match self {
            Self::Sm => SizeSpec {
                height: 1,
                padding_x: 1,
                bordered: false,
                bold: false,
            },
            Self::Default => SizeSpec {
                height: 3,
                padding_x: 2,
                bordered: true,
                bold: false,
            },
            Self::Lg => SizeSpec {
                height: 3,
                padding_x: 4,
                bordered: true,
                bold: true,
            },
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
    Success,
    Warning,
}

impl BadgeVariant {
    pub fn style(self, theme: &Theme) -> Style {
        let filled = |color| {
            Style::default()
                .fg(theme.background)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        };
        match self {
            Self::Default => filled(theme.primary),
            Self::Secondary => filled(theme.secondary),
            Self::Destructive => filled(theme.destructive),
            Self::Success => filled(theme.success),
            Self::Warning => filled(theme.warning),
            Self::Outline => Style::default().fg(theme.primary),
        }
    }

    /// Outline badges have no fill, so they get brackets instead.
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::Outline => ("[", "]"),
            _ => (" ", " "),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CardVariant {
    #[default]
    Default,
    Elevated,
    Glow,
    Terminal,
}

impl CardVariant {
    pub fn border_style(self, theme: &Theme) -> Style {
        match self {
            Self::Default => theme.border(),
            Self::Elevated => Style::default().fg(theme.muted),
            Self::Glow => Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
            Self::Terminal => Style::default().fg(theme.success),
        }
    }

    pub fn border_type(self) -> BorderType {
        match self {
            Self::Default | Self::Terminal => BorderType::Plain,
            Self::Elevated => BorderType::Rounded,
            Self::Glow => BorderType::Double,
        }
    }

    pub fn body_style(self, theme: &Theme) -> Style {
        match self {
            Self::Terminal => Style::default().fg(theme.success).bg(theme.background),
            _ => theme.base(),
        }
    }

    pub fn title_prefix(self) -> &'static str {
        match self {
            Self::Terminal => ">_ ",
            _ => "",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Glow {
    #[default]
    None,
    Soft,
    Intense,
}

impl Glow {
    /// Overrides the border type when glowing.
    pub fn border_type(self, fallback: BorderType) -> BorderType {
        match self {
            Self::None => fallback,
            Self::Soft => BorderType::Rounded,
            Self::Intense => BorderType::Double,
        }
    }

    pub fn apply(self, style: Style) -> Style {
        match self {
            Self::None => style,
            Self::Soft => style.add_modifier(Modifier::BOLD),
            Self::Intense => style
                .add_modifier(Modifier::BOLD)
                .remove_modifier(Modifier::DIM),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Default,
    Success,
    Warning,
    Destructive,
}

impl Tone {
    pub fn style(self, theme: &Theme) -> Style {
        let color = match self {
            Self::Default => theme.primary,
            Self::Success => theme.success,
            Self::Warning => theme.warning,
            Self::Destructive => theme.destructive,
        };
        Style::default().fg(color)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Animation {
    #[default]
    None,
    Pulse,
    Blink,
}

impl Animation {
    /// The only frame-dependent mapping in the theme.
    pub fn apply(self, style: Style, frame: u64) -> Style {
        match self {
            Self::None => style,
            Self::Pulse if (frame / PULSE_FRAMES) % 2 == 0 => style.add_modifier(Modifier::BOLD),
            Self::Pulse => style.add_modifier(Modifier::DIM),
            Self::Blink => style.add_modifier(Modifier::SLOW_BLINK),
        }
    }
}
