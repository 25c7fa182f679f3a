// src/web/types.rs
use crate::types::request::{DEFAULT_HOURS_OLD, DEFAULT_RESULTS_WANTED};
use crate::types::ScrapeRequest;
use crate::utils::split_keywords;
use rocket::form::FromForm;
use rocket::serde::Serialize;

pub const DEFAULT_KEYWORDS: &str = "Software Engineer";
pub const DEFAULT_LOCATION: &str = "Remote";

/// Query string of `GET /api/scrape`. Every field is optional.
#[derive(Debug, Default, FromForm)]
pub struct ScrapeParams {
    pub keywords: Option<String>,
    pub location: Option<String>,
    pub results: Option<u32>,
    pub hours_old: Option<u32>,
    pub sites: Option<String>,
}

impl ScrapeParams {
    pub fn into_request(self, default_sites: &[String]) -> ScrapeRequest {
        let keywords = split_keywords(self.keywords.as_deref().unwrap_or(DEFAULT_KEYWORDS));
        let sites = self
            .sites
            .as_deref()
            .map(split_keywords)
            .unwrap_or_else(|| default_sites.to_vec());

        ScrapeRequest::new(keywords, self.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string()))
            .with_results_wanted(self.results.unwrap_or(DEFAULT_RESULTS_WANTED))
            .with_hours_old(self.hours_old.unwrap_or(DEFAULT_HOURS_OLD))
            .with_site_names(sites)
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            success: false,
            error,
            error_code,
            suggestions,
        }
    }
}

pub struct ServerConfig {
    pub default_sites: Vec<String>,
}
