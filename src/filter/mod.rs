// src/filter/mod.rs
//! View filter state and its query-string form.

pub mod codec;
pub mod debounce;
pub mod state;

pub use codec::{decode, decode_query_string, encode, encode_query_string, QueryParams};
pub use debounce::QueryDebouncer;
pub use state::{ExploredFilter, FilterState};
