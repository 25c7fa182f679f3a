// src/types/request.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_RESULTS_WANTED: u32 = 50;
pub const DEFAULT_HOURS_OLD: u32 = 24;

pub fn default_site_names() -> Vec<String> {
    vec!["linkedin".to_string(), "indeed".to_string()]
}

/// One aggregation call. Built per incoming request and consumed by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub keywords: Vec<String>,
    pub location: String,
    pub results_wanted: u32,
    pub hours_old: u32,
    pub site_names: Vec<String>,
}

impl ScrapeRequest {
    pub fn new(keywords: Vec<String>, location: impl Into<String>) -> Self {
        Self {
            keywords,
            location: location.into(),
            results_wanted: DEFAULT_RESULTS_WANTED,
            hours_old: DEFAULT_HOURS_OLD,
            site_names: default_site_names(),
        }
    }

    /// Per-keyword cap for the structured source; zero is lifted to one.
    pub fn with_results_wanted(mut self, results_wanted: u32) -> Self {
        self.results_wanted = results_wanted.max(1);
        self
    }

    pub fn with_hours_old(mut self, hours_old: u32) -> Self {
        self.hours_old = hours_old;
        self
    }

    /// An empty list keeps the defaults.
    pub fn with_site_names(mut self, site_names: Vec<String>) -> Self {
        if !site_names.is_empty() {
            self.site_names = site_names;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let request = ScrapeRequest::new(vec!["Rust".to_string()], "Remote");
        assert_eq!(request.results_wanted, 50);
        assert_eq!(request.hours_old, 24);
        assert_eq!(request.site_names, vec!["linkedin", "indeed"]);
    }

    #[test]
    fn test_builder_overrides() {
        let request = ScrapeRequest::new(vec![], "Germany")
            .with_results_wanted(0)
            .with_hours_old(72)
            .with_site_names(Vec::new());
        assert_eq!(request.results_wanted, 1);
        assert_eq!(request.hours_old, 72);
        assert_eq!(request.site_names, default_site_names());
    }
}
