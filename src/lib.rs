pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod explored;
pub mod filter;
pub mod graph;
pub mod reporting;
pub mod types; // Concept records and the loaded collection
pub mod view;
