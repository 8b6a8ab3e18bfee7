use std::collections::HashMap;
use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Palette slot -> style, e.g. `"primary": "bold #00ffff"`.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(slot, style)| (slot, parse_style(&style)))
            .collect();

        Ok(Styles(styles))
    }
}

/// Parse `"[modifiers...] [fg] [on bg]"`.
///
/// Colors are anything [`Color::from_str`] accepts: names (`cyan`,
/// `light-magenta`), `#rrggbb` or an indexed number. Unknown words are
/// skipped.
pub fn parse_style(line: &str) -> Style {
    let lower = line.to_lowercase();
    let (foreground, background) = match lower.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None => match lower.strip_prefix("on ") {
            Some(bg) => ("", Some(bg)),
            None => (lower.as_str(), None),
        },
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        if let Some(modifier) = parse_modifier(word) {
            style = style.add_modifier(modifier);
        } else if let Ok(color) = Color::from_str(word) {
            style = style.fg(color);
        } else {
            log::warn!("Ignoring unknown style word: {word}");
        }
    }
    if let Some(color) = background.and_then(|bg| Color::from_str(bg.trim()).ok()) {
        style = style.bg(color);
    }
    style
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    let modifier = match word {
        "bold" => Modifier::BOLD,
        "dim" => Modifier::DIM,
        "italic" => Modifier::ITALIC,
        "underline" | "underlined" => Modifier::UNDERLINED,
        "blink" | "slow_blink" => Modifier::SLOW_BLINK,
        "rapid_blink" => Modifier::RAPID_BLINK,
        "reverse" | "reversed" | "inverse" => Modifier::REVERSED,
        "hidden" => Modifier::HIDDEN,
        "strikethrough" | "crossed_out" => Modifier::CROSSED_OUT,
        _ => return None,
    };
    Some(modifier)
}
