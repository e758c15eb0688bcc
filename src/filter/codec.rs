// src/filter/codec.rs
//! Bidirectional mapping between `FilterState` and query-string parameters.
//!
//! Encoding omits every field that holds its default, so the unfiltered view
//! produces an empty query string. Decoding is lenient: anything it does not
//! recognize falls back to the default instead of failing.
//!
//! | key | meaning |
//! |---|---|
//! | `q` | free-text query |
//! | `hide` | comma-joined hidden categories |
//! | `tags` | comma-joined required tags |
//! | `featured` | `1` = featured only |
//! | `minDeg` | minimum declared connections |
//! | `explored` | `1` = explored only, `0` = not explored only |

use url::form_urlencoded;

use super::state::{ExploredFilter, FilterState};

pub const KEY_QUERY: &str = "q";
pub const KEY_HIDE: &str = "hide";
pub const KEY_TAGS: &str = "tags";
pub const KEY_FEATURED: &str = "featured";
pub const KEY_MIN_DEGREE: &str = "minDeg";
pub const KEY_EXPLORED: &str = "explored";

const LIST_DELIMITER: &str = ",";

/// Ordered query-string key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `application/x-www-form-urlencoded` text. A leading `?` is ignored.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.strip_prefix('?').unwrap_or(input);
        Self {
            pairs: form_urlencoded::parse(input.as_bytes()).into_owned().collect(),
        }
    }

    #[must_use]
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Value of the last occurrence of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Serializes a filter state, omitting defaults.
///
/// Hidden categories are written in `known_categories` order. When every
/// known category is hidden the full list is still written, so "show nothing"
/// survives a round trip.
#[must_use]
pub fn encode(state: &FilterState, known_categories: &[String]) -> QueryParams {
    let mut params = QueryParams::new();

    let query = state.query.trim();
    if !query.is_empty() {
        params.push(KEY_QUERY, query);
    }

    let hidden: Vec<&str> = known_categories
        .iter()
        .filter(|cat| state.hidden_categories.contains(*cat))
        .map(String::as_str)
        .collect();
    if !hidden.is_empty() {
        params.push(KEY_HIDE, join_list(hidden));
    }

    let tags: Vec<&str> = state
        .selected_tags
        .iter()
        .map(String::as_str)
        .filter(|t| !t.is_empty())
        .collect();
    if !tags.is_empty() {
        params.push(KEY_TAGS, join_list(tags));
    }

    if state.featured_only {
        params.push(KEY_FEATURED, "1");
    }
    if state.min_connections > 0 {
        params.push(KEY_MIN_DEGREE, state.min_connections.to_string());
    }
    match state.explored_filter {
        ExploredFilter::All => {}
        ExploredFilter::Explored => params.push(KEY_EXPLORED, "1"),
        ExploredFilter::NotExplored => params.push(KEY_EXPLORED, "0"),
    }

    params
}

/// Rebuilds a filter state, discarding unknown or malformed values.
#[must_use]
pub fn decode(params: &QueryParams, known_categories: &[String]) -> FilterState {
    let mut state = FilterState::new();

    if let Some(query) = params.get(KEY_QUERY) {
        state.query = query.trim().to_string();
    }

    if let Some(raw) = params.get(KEY_HIDE) {
        for token in split_list(raw) {
            if known_categories.iter().any(|cat| cat == token) {
                state.hidden_categories.insert(token.to_string());
            } else {
                log::debug!("dropping unknown category token {token:?}");
            }
        }
    }

    if let Some(raw) = params.get(KEY_TAGS) {
        state.selected_tags = split_tags(raw).map(str::to_string).collect();
    }

    state.featured_only = params.get(KEY_FEATURED) == Some("1");
    state.min_connections = params
        .get(KEY_MIN_DEGREE)
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(0);
    state.explored_filter = match params.get(KEY_EXPLORED) {
        Some("1") => ExploredFilter::Explored,
        Some("0") => ExploredFilter::NotExplored,
        _ => ExploredFilter::All,
    };

    state
}

/// `encode` followed by serialization.
#[must_use]
pub fn encode_query_string(state: &FilterState, known_categories: &[String]) -> String {
    encode(state, known_categories).to_query_string()
}

/// Parsing followed by `decode`.
#[must_use]
pub fn decode_query_string(input: &str, known_categories: &[String]) -> FilterState {
    decode(&QueryParams::parse(input), known_categories)
}

fn join_list(items: Vec<&str>) -> String {
    items.join(LIST_DELIMITER)
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Tags are free text, so only empty tokens are dropped.
fn split_tags(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(LIST_DELIMITER).filter(|t| !t.is_empty())
}
