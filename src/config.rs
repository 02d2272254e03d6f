use std::path::Path;

use crate::error::ConfigError;
use crate::game::Player;

/// Game rules configuration. Board dimensions are fixed; only who opens
/// a game is configurable.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// "red" or "yellow"
    pub first_player: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_player: "red".to_string(),
        }
    }
}

/// Terminal UI configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    pub poll_interval_ms: u64,
    /// Render pieces as R/Y letters instead of Unicode discs
    pub ascii_glyphs: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
            ascii_glyphs: false,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        if !matches!(self.game.first_player.as_str(), "red" | "yellow") {
            return Err(ConfigError::Validation(format!(
                "game.first_player must be \"red\" or \"yellow\", got \"{}\"",
                self.game.first_player
            )));
        }
        Ok(())
    }

    /// The player who opens each game.
    pub fn first_player(&self) -> Player {
        match self.game.first_player.as_str() {
            "yellow" => Player::Yellow,
            _ => Player::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.first_player(), Player::Red);
        assert_eq!(config.ui.poll_interval_ms, 100);
        assert!(!config.ui.ascii_glyphs);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [game]
            first_player = "yellow"

            [ui]
            ascii_glyphs = true
            "#,
        )
        .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.first_player(), Player::Yellow);
        assert!(config.ui.ascii_glyphs);
        // Unset keys fall back to defaults
        assert_eq!(config.ui.poll_interval_ms, 100);
    }

    #[test]
    fn test_validation_rejects_zero_poll_interval() {
        let mut config = AppConfig::default();
        config.ui.poll_interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validation_rejects_unknown_player() {
        let mut config = AppConfig::default();
        config.game.first_player = "green".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }
}
