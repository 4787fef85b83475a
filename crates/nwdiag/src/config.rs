//! Configuration types for element rendering.
//!
//! All types implement [`serde::Deserialize`] and are usually loaded from a
//! TOML file:
//!
//! ```toml
//! [style]
//! background_color = "#FEFECE"
//! border_color = "#A80036"
//! shadow = 3.0
//!
//! [symbols]
//! actor = "stickman"
//! component = "rectangle"
//! package = "rectangle"
//! ```
//!
//! - [`AppConfig`] - Top-level configuration combining style and symbol settings.
//! - [`StyleConfig`] - Colors and shadow of element boxes.
//! - [`SymbolStyles`] - How the `actor`, `component` and `package` shape names are drawn.
//!
//! # Example
//!
//! ```
//! # use nwdiag::config::AppConfig;
//! let config = AppConfig::from_toml_str("[style]\nshadow = 0.0").unwrap();
//! assert_eq!(config.style().shadow(), Some(0.0));
//! assert!(config.style().background_color().unwrap().is_none());
//! ```

use std::{fs, path::Path};

use log::info;
use serde::Deserialize;

use nwdiag_core::{color::Color, draw::SymbolStyles};

use crate::error::NwdiagError;

/// Top-level configuration combining style and symbol settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Symbol style section.
    #[serde(default)]
    symbols: SymbolStyles,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(style: StyleConfig, symbols: SymbolStyles) -> Self {
        Self { style, symbols }
    }

    /// Parses a configuration from TOML text. Missing sections use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`NwdiagError::Config`] if the text is not valid TOML or does
    /// not match the configuration layout.
    pub fn from_toml_str(content: &str) -> Result<Self, NwdiagError> {
        toml::from_str(content).map_err(|err| NwdiagError::Config(err.to_string()))
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NwdiagError::Io`] if the file cannot be read and
    /// [`NwdiagError::Config`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NwdiagError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the symbol styles used to resolve shape names.
    pub fn symbols(&self) -> &SymbolStyles {
        &self.symbols
    }
}

/// Visual styling of element boxes.
///
/// Fields that are not set fall back to the theme defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Fill [`Color`] of element boxes, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Border [`Color`] of element boxes, as a color string.
    #[serde(default)]
    border_color: Option<String>,

    /// Drop shadow depth in pixels.
    #[serde(default)]
    shadow: Option<f32>,
}

impl StyleConfig {
    /// Creates a style configuration from raw color strings.
    pub fn new(
        background_color: Option<String>,
        border_color: Option<String>,
        shadow: Option<f32>,
    ) -> Self {
        Self {
            background_color,
            border_color,
            shadow,
        }
    }

    /// Returns the parsed fill [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.background_color.as_deref())
    }

    /// Returns the parsed border [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn border_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.border_color.as_deref())
    }

    pub fn shadow(&self) -> Option<f32> {
        self.shadow
    }
}

fn parse_color(value: Option<&str>) -> Result<Option<Color>, String> {
    value.map(Color::new).transpose()
}
