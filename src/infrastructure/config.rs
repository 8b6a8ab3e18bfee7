use std::path::PathBuf;
use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;

use crate::model::boot_sequence::{self, BootMessage};
use crate::model::terminal;
use crate::presentation::config::{keybindings, styles};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TerminalConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_terminal_typing_speed_ms")]
    pub typing_speed_ms: u64,
    #[serde(default)]
    pub history_limit: Option<usize>,
    #[serde(default)]
    pub welcome: Vec<String>,
}

fn default_prompt() -> String {
    terminal::DEFAULT_PROMPT.to_owned()
}

fn default_terminal_typing_speed_ms() -> u64 {
    millis(terminal::DEFAULT_TYPING_SPEED)
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            typing_speed_ms: default_terminal_typing_speed_ms(),
            history_limit: None,
            welcome: Vec::new(),
        }
    }
}

impl TerminalConfig {
    pub fn typing_speed(&self) -> Duration {
        Duration::from_millis(self.typing_speed_ms)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct BootConfig {
    #[serde(default = "default_boot_typing_speed_ms")]
    pub typing_speed_ms: u64,
    #[serde(default = "default_grace_period_ms")]
    pub grace_period_ms: u64,
    #[serde(default)]
    pub messages: Vec<BootMessage>,
}

fn default_boot_typing_speed_ms() -> u64 {
    millis(boot_sequence::DEFAULT_TYPING_SPEED)
}

fn default_grace_period_ms() -> u64 {
    millis(boot_sequence::DEFAULT_GRACE_PERIOD)
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: default_boot_typing_speed_ms(),
            grace_period_ms: default_grace_period_ms(),
            messages: Vec::new(),
        }
    }
}

impl BootConfig {
    pub fn typing_speed(&self) -> Duration {
        Duration::from_millis(self.typing_speed_ms)
    }

    pub fn grace_period(&self) -> Duration {
        Duration::from_millis(self.grace_period_ms)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub boot: BootConfig,
}

impl Config {
    /// Embedded defaults only.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Embedded defaults overlaid with the first user config file found.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(utils::get_config_dir(), utils::get_data_dir())
    }

    /// User files are layered over the embedded defaults: tables merge key by
    /// key, lists (welcome lines, boot messages) are replaced whole.
    pub fn load_from(config_dir: PathBuf, data_dir: PathBuf) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("_config_dir", config_dir.to_string_lossy().into_owned())?
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5));

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        builder.build()?.try_deserialize()
    }
}
