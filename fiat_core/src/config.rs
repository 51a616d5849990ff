//! Configuration file support for Fiat.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fiat/config.toml`.

use crate::types::LanguageMode;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub program: ProgramConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Display configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub language_mode: LanguageMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language_mode: LanguageMode::default(),
        }
    }
}

/// Program configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProgramConfig {
    /// Default feast id used by `begin` when none is given
    #[serde(default = "default_feast")]
    pub feast: String,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            feast: default_feast(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("fiat")
}

fn default_feast() -> String {
    "annunciation".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("fiat").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.language_mode, LanguageMode::English);
        assert_eq!(config.program.feast, "annunciation");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.display.language_mode, parsed.display.language_mode);
        assert_eq!(config.program.feast, parsed.program.feast);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[display]
language_mode = "latin_english"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.language_mode, LanguageMode::LatinEnglish);
        assert_eq!(config.program.feast, "annunciation"); // default
    }

    #[test]
    fn test_default_feast_resolves() {
        let config = Config::default();
        assert!(crate::feast::feast_by_id(&config.program.feast).is_some());
    }
}
