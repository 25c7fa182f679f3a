// src/core/mod.rs
pub mod http;
pub mod location;
pub mod pipeline;
pub mod sanitizer;

pub use http::HttpFetcher;
pub use location::{LocationCheck, LocationValidator};
pub use pipeline::AggregationPipeline;
pub use sanitizer::{sanitize, Sanitize};
