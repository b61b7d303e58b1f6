//! # Configuration
//!
//! Doorway reads an optional TOML file (default `doorway.toml`). Every section
//! and field has a default, so an empty file is a valid configuration.
//!
//! ## Sections
//!
//! - [`GameConfig`] - player name, turn limit, console presentation
//! - [`LoggingConfig`] - diagnostic log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use doorway::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("doorway.toml").await?;
//!     println!("Log level: {}", config.logging.level);
//!
//!     Config::create_default("doorway.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## File Format
//!
//! ```toml
//! [game]
//! player_name = "Ada"
//! max_turns = 500
//! show_severity = false
//!
//! [logging]
//! level = "info"
//! file = "doorway.log"
//! ```
//!
//! Precedence: CLI args > config file > defaults.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Use this name instead of asking the player for one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    /// End the run after this many commands. Unset means no limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_turns: Option<u32>,
    /// Prefix warning and error lines with `[warn]` / `[error]` on the console.
    #[serde(default)]
    pub show_severity: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Map the configured level onto a filter. Unknown values fall back to Info.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.to_ascii_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" | "warning" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => {
                eprintln!(
                    "Invalid log level '{}', defaulting to info",
                    self.level
                );
                log::LevelFilter::Info
            }
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file {}", path))
    }

    /// True when `err` from [`Config::load`] only means the file is not there.
    pub fn is_missing(err: &anyhow::Error) -> bool {
        err.downcast_ref::<std::io::Error>()
            .map_or(false, |e| e.kind() == std::io::ErrorKind::NotFound)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.game, GameConfig::default());
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::parse("[game]\nmax_turns = 12\n").unwrap();
        assert_eq!(config.game.max_turns, Some(12));
        assert!(config.game.player_name.is_none());
        assert!(!config.game.show_severity);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_level_filter_valid() {
        let test_cases = vec![
            ("off", log::LevelFilter::Off),
            ("error", log::LevelFilter::Error),
            ("WARN", log::LevelFilter::Warn),
            ("warning", log::LevelFilter::Warn),
            ("info", log::LevelFilter::Info),
            ("Debug", log::LevelFilter::Debug),
            ("trace", log::LevelFilter::Trace),
        ];

        for (level, expected) in test_cases {
            let config = LoggingConfig {
                level: level.to_string(),
                file: None,
            };
            assert_eq!(config.level_filter(), expected, "level {}", level);
        }
    }

    #[test]
    fn test_level_filter_invalid() {
        for level in ["", "verbose", "loud"] {
            let config = LoggingConfig {
                level: level.to_string(),
                file: None,
            };
            assert_eq!(config.level_filter(), log::LevelFilter::Info);
        }
    }

    #[test]
    fn test_game_config_serde() {
        let config = GameConfig {
            player_name: Some("Ada".to_string()),
            max_turns: Some(99),
            show_severity: true,
        };

        let serialized = serde_json::to_string(&config).unwrap();
        assert!(serialized.contains("\"player_name\":\"Ada\""));
        assert!(serialized.contains("\"max_turns\":99"));

        let deserialized: GameConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(Config::parse("[game]\nmax_turns = \"many\"\n").is_err());
    }
}
