// src/graph/palette.rs
//! Category colors.

use std::collections::HashMap;

pub const DEFAULT_COLOR: &str = "#94a3b8";

/// Built-in category table, in display order.
pub const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("Methods", "#3b82f6"),
    ("Tools", "#10b981"),
    ("Principles", "#f59e0b"),
    ("Concepts", "#8b5cf6"),
    ("Frameworks", "#ec4899"),
    ("Models", "#06b6d4"),
    ("Biases", "#ef4444"),
    ("Fallacies", "#f97316"),
];

/// Maps a category to its color, falling back to a default for unknown ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<String, String>,
    fallback: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: CATEGORY_COLORS
                .iter()
                .map(|(cat, color)| ((*cat).to_string(), (*color).to_string()))
                .collect(),
            fallback: DEFAULT_COLOR.to_string(),
        }
    }
}

impl Palette {
    /// Built-in table with `overrides` layered on top.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<String, String>, fallback: &str) -> Self {
        let mut palette = Self::default();
        for (category, color) in overrides {
            palette.colors.insert(category.clone(), color.clone());
        }
        palette.fallback = fallback.to_string();
        palette
    }

    #[must_use]
    pub fn color_for(&self, category: &str) -> &str {
        self.colors.get(category).map_or(self.fallback.as_str(), String::as_str)
    }

    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

/// Category names of the built-in table.
#[must_use]
pub fn default_categories() -> Vec<String> {
    CATEGORY_COLORS.iter().map(|(cat, _)| (*cat).to_string()).collect()
}
