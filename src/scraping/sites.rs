// src/scraping/sites.rs
//! Declarative descriptors for unstructured listing sites.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const KEYWORD_PLACEHOLDER: &str = "{keyword}";

/// How to find job items on one listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDescriptor {
    pub name: String,
    /// Listing URL; `{keyword}` is replaced with the percent-encoded keyword.
    pub url_template: String,
    pub container_selector: String,
    pub item_selector: String,
    pub link_selector: String,
}

impl SiteDescriptor {
    pub fn new(
        name: &str,
        url_template: &str,
        container_selector: &str,
        item_selector: &str,
        link_selector: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            url_template: url_template.to_string(),
            container_selector: container_selector.to_string(),
            item_selector: item_selector.to_string(),
            link_selector: link_selector.to_string(),
        }
    }

    /// Templates without a placeholder are static pages and are fetched as-is.
    pub fn listing_url(&self, keyword: &str) -> String {
        if self.url_template.contains(KEYWORD_PLACEHOLDER) {
            self.url_template
                .replace(KEYWORD_PLACEHOLDER, &urlencoding::encode(keyword))
        } else {
            self.url_template.clone()
        }
    }
}

pub fn builtin_sites() -> Vec<SiteDescriptor> {
    vec![
        SiteDescriptor::new(
            "weworkremotely",
            "https://weworkremotely.com/remote-jobs/search?term={keyword}",
            "section.jobs",
            "li.feature, li:not(.view-all)",
            "a[href*='/remote-jobs/']",
        ),
        SiteDescriptor::new(
            "remoteco",
            "https://remote.co/remote-jobs/search/?search_keywords={keyword}",
            "div.job_listings",
            "a.card, div.card",
            "a",
        ),
        SiteDescriptor::new(
            "jobspresso",
            "https://jobspresso.co/remote-work/",
            "ul.job_listings",
            "li.job_listing",
            "a",
        ),
        SiteDescriptor::new(
            "workingnomads",
            "https://www.workingnomads.com/jobs?tag={keyword}",
            "div.jobs-list",
            "div.job-wrapper",
            "h4 a, a.open-button",
        ),
    ]
}

/// Read-only descriptor table shared by every request.
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    sites: Arc<[SiteDescriptor]>,
}

impl SiteRegistry {
    pub fn new(sites: Vec<SiteDescriptor>) -> Self {
        Self {
            sites: sites.into(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SiteDescriptor> {
        self.sites.iter()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::new(builtin_sites())
    }
}
