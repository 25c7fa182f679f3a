// src/core/pipeline.rs
//! Validate -> per-keyword fan-out -> merge -> sanitize -> classify.

use super::http::HttpFetcher;
use super::location::{LocationCheck, LocationValidator};
use super::sanitizer::Sanitize;
use crate::config::AppConfig;
use crate::providers::{HttpJobProvider, JobProvider, LinkedInProvider, StructuredSourceAdapter};
use crate::scraping::{DetailPageFetcher, SiteRegistry, SiteScraper};
use crate::types::{JobRecord, ScrapeRequest, ScrapeResponse};
use anyhow::Result;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

pub struct AggregationPipeline {
    validator: LocationValidator,
    sites: SiteRegistry,
    scraper: SiteScraper,
    structured: StructuredSourceAdapter,
}

impl AggregationPipeline {
    pub fn new(
        validator: LocationValidator,
        sites: SiteRegistry,
        scraper: SiteScraper,
        structured: StructuredSourceAdapter,
    ) -> Self {
        Self {
            validator,
            sites,
            scraper,
            structured,
        }
    }

    /// Wire every component from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.http)?;

        let provider: Arc<dyn JobProvider> = match &config.provider.endpoint {
            Some(endpoint) => {
                info!("Using remote job search service at {}", endpoint);
                Arc::new(HttpJobProvider::new(fetcher.clone(), endpoint))
            }
            None => {
                info!("Using native LinkedIn provider");
                Arc::new(LinkedInProvider::new(fetcher.clone(), &config.provider.linkedin_base_url))
            }
        };

        let structured = StructuredSourceAdapter::new(
            provider,
            DetailPageFetcher::new(fetcher.clone()),
            config.provider.description_sites.clone(),
        );

        Ok(Self::new(
            LocationValidator::new(&config.locations),
            SiteRegistry::new(config.sites.clone()),
            SiteScraper::new(fetcher),
            structured,
        ))
    }

    pub async fn run(&self, request: ScrapeRequest) -> ScrapeResponse {
        let span = info_span!("scrape", request_id = %Uuid::new_v4());
        self.run_inner(request).instrument(span).await
    }

    async fn run_inner(&self, request: ScrapeRequest) -> ScrapeResponse {
        let location = match self.validator.validate(&request.location) {
            LocationCheck::Accepted(normalized) => normalized,
            LocationCheck::Rejected(original) => {
                warn!("Rejected location '{}'", original);
                return ScrapeResponse::rejected(request.keywords, original, self.validator.valid_locations());
            }
        };

        info!(
            "Scraping {} keyword(s) in '{}' across {} site(s) + structured source",
            request.keywords.len(),
            location,
            self.sites.len()
        );

        let mut jobs = Vec::new();
        for keyword in &request.keywords {
            jobs.extend(self.scrape_keyword(keyword, &location, &request).await);
        }

        let mut response = ScrapeResponse::completed(request.keywords, location, jobs);
        response.sanitize();

        info!("Scrape finished with {} jobs", response.total_jobs());
        response
    }

    /// Listing sites (concurrently, kept in table order) followed by the structured source.
    async fn scrape_keyword(&self, keyword: &str, location: &str, request: &ScrapeRequest) -> Vec<JobRecord> {
        info!("Scraping jobs for keyword: {}", keyword);

        let per_site = join_all(self.sites.iter().map(|site| self.scraper.scrape(site, keyword))).await;
        let mut jobs: Vec<JobRecord> = per_site.into_iter().flatten().collect();

        jobs.extend(
            self.structured
                .fetch(
                    keyword,
                    location,
                    request.results_wanted,
                    request.hours_old,
                    &request.site_names,
                )
                .await,
        );

        jobs
    }
}
