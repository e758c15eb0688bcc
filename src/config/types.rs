use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::graph::palette::DEFAULT_COLOR;

/// Where the collaborators' data lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_data_path")]
    pub data: PathBuf,
    #[serde(default = "default_explored_path")]
    pub explored: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data: default_data_path(),
            explored: default_explored_path(),
        }
    }
}

fn default_data_path() -> PathBuf { PathBuf::from("concepts.json") }
fn default_explored_path() -> PathBuf { PathBuf::from("explored.json") }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "default_color")]
    pub default_color: String,
    /// Per-category overrides layered on the built-in table.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            colors: HashMap::new(),
        }
    }
}

fn default_color() -> String { DEFAULT_COLOR.to_string() }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Neighborhood radius used when a concept is focused.
    #[serde(default = "default_hops")]
    pub hops: usize,
    /// Quiet period before a free-text edit is written to the query string.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            hops: default_hops(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

const fn default_hops() -> usize { 2 }
const fn default_debounce_ms() -> u64 { 300 }

/// Contents of `conceptgraph.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Known categories, in display order. Empty means the built-in table.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub view: ViewConfig,
}
