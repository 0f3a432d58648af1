use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parsing(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parsing(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parsing(value)
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct Config {
    pub styles: Option<StyleConfig>,
}

impl Config {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&data)?;

        Ok(config)
    }
}

/// Document styling knobs. Sizes are in points; the defaults reproduce the
/// fixed look of the classic output: Calibri body, Courier New code, small
/// italic provenance labels, 50-character separators.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct StyleConfig {
    pub body_font: String,
    pub body_size: usize,
    pub code_font: String,
    pub code_size: usize,
    pub label_size: usize,
    pub separator_width: usize,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            body_size: 11,
            code_font: "Courier New".to_string(),
            code_size: 10,
            label_size: 10,
            separator_width: 50,
        }
    }
}
