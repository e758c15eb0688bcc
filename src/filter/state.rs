// src/filter/state.rs
//! The user's view constraints.

use std::collections::BTreeSet;

/// Which concepts to keep relative to the explored-id set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExploredFilter {
    #[default]
    All,
    Explored,
    NotExplored,
}

impl ExploredFilter {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Explored => "explored",
            Self::NotExplored => "not-explored",
        }
    }

    /// Parses the long form used on the command line.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "all" => Some(Self::All),
            "explored" => Some(Self::Explored),
            "not-explored" => Some(Self::NotExplored),
            _ => None,
        }
    }

    /// Whether a concept passes, given whether it has been explored.
    #[must_use]
    pub fn admits(self, explored: bool) -> bool {
        match self {
            Self::All => true,
            Self::Explored => explored,
            Self::NotExplored => !explored,
        }
    }
}

/// Complete set of user-chosen view constraints.
///
/// `Default` is the unfiltered view and serializes to an empty query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub hidden_categories: BTreeSet<String>,
    pub selected_tags: BTreeSet<String>,
    pub featured_only: bool,
    pub min_connections: usize,
    pub explored_filter: ExploredFilter,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.query.trim().is_empty()
            && self.hidden_categories.is_empty()
            && self.selected_tags.is_empty()
            && !self.featured_only
            && self.min_connections == 0
            && self.explored_filter == ExploredFilter::All
    }

    /// Known categories not hidden, in known order.
    #[must_use]
    pub fn visible_categories<'a>(&self, known: &'a [String]) -> Vec<&'a str> {
        known
            .iter()
            .filter(|cat| !self.hidden_categories.contains(*cat))
            .map(String::as_str)
            .collect()
    }

    /// Flips a category between hidden and visible.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.hidden_categories.remove(category) {
            self.hidden_categories.insert(category.to_string());
        }
    }

    /// Flips a tag in or out of the required set.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
    }

    /// Resets every constraint except the free-text query.
    pub fn clear_filters(&mut self) {
        let query = std::mem::take(&mut self.query);
        *self = Self {
            query,
            ..Self::default()
        };
    }
}
