// src/explored.rs
//! The set of concept ids the user has already visited.
//!
//! Tracking lives elsewhere; this is a read-only snapshot of it.

use crate::error::{CatalogError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExploredSet {
    ids: HashSet<String>,
}

impl ExploredSet {
    #[must_use]
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads a JSON array of ids.
    ///
    /// A missing file yields `Ok(None)`: nothing has been tracked, so the
    /// explored filter must not constrain anything.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CatalogError::io(e, path)),
        };
        let ids: Vec<String> = serde_json::from_str(&raw).map_err(|e| CatalogError::parse(e, path))?;
        Ok(Some(Self::new(ids)))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
