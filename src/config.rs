//! Optional TOML configuration.
//!
//! Looked up at `<config_dir>/calcpad/config.toml` unless a path is given on
//! the command line. Every field has a default, so an empty or missing file
//! yields the stock calculator.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Failure to read or interpret the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid colour {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

/// An `#rrggbb` colour from the config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor(pub u32);

impl TryFrom<String> for HexColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let parsed = value
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .map(HexColor);
        parsed.ok_or(ConfigError::InvalidColor(value))
    }
}

/// Top-level config file contents.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub window: WindowConfig,
    pub theme: ThemeConfig,
}

/// The `[window]` table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Calculator".to_string(),
        }
    }
}

/// The `[theme]` table: font and palette colours.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub font_family: String,
    pub window_background: HexColor,
    pub display_background: HexColor,
    pub text: HexColor,
    pub accent: HexColor,
    pub accent_active: HexColor,
    pub function: HexColor,
    pub function_active: HexColor,
    pub numeric: HexColor,
    pub numeric_active: HexColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            font_family: "Segoe UI".to_string(),
            window_background: HexColor(0x2b2b2b),
            display_background: HexColor(0x1e1e1e),
            text: HexColor(0xffffff),
            accent: HexColor(0xff9500),
            accent_active: HexColor(0xe08800),
            function: HexColor(0x505050),
            function_active: HexColor(0x707070),
            numeric: HexColor(0x3a3a3a),
            numeric_active: HexColor(0x555555),
        }
    }
}

impl Config {
    /// Parse config file contents.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Read and parse the file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Default location of the config file.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("calcpad").join("config.toml"))
}

/// Load the configuration.
///
/// An explicitly requested file must load. The default file is optional and a
/// broken one only produces a warning.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Config::load_from(path)
            .with_context(|| format!("could not load config file {}", path.display()));
    }

    let Some(path) = default_path().filter(|path| path.exists()) else {
        debug!("No config file found, using defaults");
        return Ok(Config::default());
    };

    match Config::load_from(&path) {
        Ok(config) => {
            debug!(path = %path.display(), "Loaded config");
            Ok(config)
        }
        Err(err) => {
            warn!("Ignoring config: {:#}", anyhow::Error::from(err));
            Ok(Config::default())
        }
    }
}
