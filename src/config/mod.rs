// src/config/mod.rs
pub mod types;

pub use self::types::{CatalogConfig, Config, PaletteConfig, ViewConfig};

use crate::error::{CatalogError, Result};
use crate::graph::palette::{self, Palette};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE: &str = "conceptgraph.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `conceptgraph.toml` from the working directory.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads a config file. A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no {} found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(CatalogError::io(e, path)),
        };
        Self::parse_toml(&content).map_err(|source| CatalogError::Config {
            source,
            path: path.to_path_buf(),
        })
    }

    /// Parses config text.
    ///
    /// # Errors
    /// Returns the TOML error on malformed input.
    pub fn parse_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Configured categories, or the built-in table when none are set.
    #[must_use]
    pub fn known_categories(&self) -> Vec<String> {
        if self.categories.is_empty() {
            palette::default_categories()
        } else {
            self.categories.clone()
        }
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::with_overrides(&self.palette.colors, &self.palette.default_color)
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.view.debounce_ms)
    }
}
