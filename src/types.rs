// src/types.rs
//! Source records for the concept collection.
//!
//! A `ConceptRecord` is owned by whoever loaded the collection. The graph
//! engine only ever borrows it.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// A single catalogued concept as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    /// Outgoing relations as declared on the record, before any filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_concepts: Option<Vec<String>>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ConceptRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            tags: BTreeSet::new(),
            aliases: None,
            related_concepts: None,
            featured: false,
            summary: String::new(),
            icon: None,
        }
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = Some(aliases.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_related<I, S>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_concepts = Some(related.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Related ids as declared, empty when the field is absent.
    #[must_use]
    pub fn related(&self) -> &[String] {
        self.related_concepts.as_deref().unwrap_or_default()
    }

    /// Number of declared relations. Independent of any filtering.
    #[must_use]
    pub fn declared_connections(&self) -> usize {
        self.related().len()
    }

    #[must_use]
    pub fn has_all_tags(&self, required: &BTreeSet<String>) -> bool {
        required.iter().all(|tag| self.tags.contains(tag))
    }
}

/// Ordered, read-only snapshot of the concept collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptCatalog {
    concepts: Vec<ConceptRecord>,
}

impl ConceptCatalog {
    #[must_use]
    pub fn new(concepts: Vec<ConceptRecord>) -> Self {
        Self { concepts }
    }

    /// Loads a JSON array of concept records.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not a valid record array.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| CatalogError::io(e, path))?;
        let concepts: Vec<ConceptRecord> =
            serde_json::from_str(&raw).map_err(|e| CatalogError::parse(e, path))?;
        log::debug!("loaded {} concepts from {}", concepts.len(), path.display());
        Ok(Self { concepts })
    }

    #[must_use]
    pub fn concepts(&self) -> &[ConceptRecord] {
        &self.concepts
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ConceptRecord> {
        self.concepts.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}
