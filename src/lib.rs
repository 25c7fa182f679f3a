//! Multi-source job aggregation: selector-driven listing scrapers plus a
//! structured search provider, merged into one JSON-safe result set.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod providers;
pub mod scraping;
pub mod types;
pub mod utils;
pub mod web;

pub use crate::core::{AggregationPipeline, LocationValidator};
pub use config::AppConfig;
pub use error::SourceError;
pub use types::{JobRecord, ScrapeRequest, ScrapeResponse, ScrapeStatus, Value};
