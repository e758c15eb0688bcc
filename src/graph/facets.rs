// src/graph/facets.rs
//! Choice lists for the filter panel.

use std::collections::HashMap;

use crate::types::ConceptRecord;

/// Every tag with the number of concepts carrying it.
/// Sorted by descending count, then name.
#[must_use]
pub fn tag_counts(concepts: &[ConceptRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for concept in concepts {
        for tag in &concept.tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(tag, n)| (tag.to_string(), n))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Concept count per known category, in known order. Empty categories are kept.
#[must_use]
pub fn category_counts(concepts: &[ConceptRecord], known: &[String]) -> Vec<(String, usize)> {
    known
        .iter()
        .map(|cat| {
            let n = concepts.iter().filter(|c| &c.category == cat).count();
            (cat.clone(), n)
        })
        .collect()
}
