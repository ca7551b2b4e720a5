use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub opponent: OpponentConfig,
}

/// Settings for the scripted computer opponent.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    /// Play against the computer (O) instead of a second human.
    pub enabled: bool,
    /// Fixed seed for the opponent's random tier. Unset means OS entropy.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            opponent: OpponentConfig::default(),
        }
    }
}

impl Default for OpponentConfig {
    fn default() -> Self {
        OpponentConfig {
            enabled: true,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.opponent.enabled);
        assert_eq!(config.opponent.seed, None);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [opponent]
            enabled = false
            "#,
        )
        .unwrap();

        assert!(!config.opponent.enabled);
        assert_eq!(config.opponent.seed, None);
    }

    #[test]
    fn test_parse_seed() {
        let config: AppConfig = toml::from_str(
            r#"
            [opponent]
            seed = 42
            "#,
        )
        .unwrap();

        assert!(config.opponent.enabled);
        assert_eq!(config.opponent.seed, Some(42));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.opponent.enabled, config.opponent.enabled);
        assert_eq!(parsed.opponent.seed, config.opponent.seed);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default(Path::new("no-such-config.toml")).unwrap();
        assert!(config.opponent.enabled);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let result: Result<AppConfig, _> = toml::from_str("[opponent\nenabled = ?");
        assert!(result.is_err());
    }
}
