// src/scraping/detail_fetcher.rs
use crate::core::http::HttpFetcher;
use crate::utils::element_text;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};

pub const LINKEDIN_DESCRIPTION_SELECTOR: &str = "div.show-more-less-html__markup";
pub const GENERIC_DESCRIPTION_CLASSES: [&str; 4] = ["job-description", "description", "details", "content"];

/// One way of locating a job description inside a detail page.
pub trait DescriptionStrategy: Send + Sync {
    fn name(&self) -> &str;
    fn extract(&self, document: &Html) -> Option<String>;
}

/// First element matching a fixed CSS selector.
pub struct SelectorStrategy {
    name: String,
    selector: Selector,
}

impl SelectorStrategy {
    pub fn new(selector: &str) -> Option<Self> {
        Selector::parse(selector).ok().map(|parsed| Self {
            name: selector.to_string(),
            selector: parsed,
        })
    }
}

impl DescriptionStrategy for SelectorStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract(&self, document: &Html) -> Option<String> {
        document
            .select(&self.selector)
            .map(|element| element_text(&element))
            .find(|text| !text.is_empty())
    }
}

/// First element whose class attribute contains one of the candidates,
/// case-insensitively. Candidates are tried in order.
pub struct ClassSubstringStrategy {
    candidates: Vec<String>,
    any_class: Selector,
}

impl ClassSubstringStrategy {
    pub fn new(candidates: &[&str]) -> Option<Self> {
        Some(Self {
            candidates: candidates.iter().map(|c| c.to_lowercase()).collect(),
            any_class: Selector::parse("[class]").ok()?,
        })
    }
}

impl DescriptionStrategy for ClassSubstringStrategy {
    fn name(&self) -> &str {
        "class-substring"
    }

    fn extract(&self, document: &Html) -> Option<String> {
        self.candidates.iter().find_map(|candidate| {
            document
                .select(&self.any_class)
                .filter(|element| {
                    element
                        .value()
                        .attr("class")
                        .is_some_and(|class| class.to_lowercase().contains(candidate.as_str()))
                })
                .map(|element| element_text(&element))
                .find(|text| !text.is_empty())
        })
    }
}

pub fn default_strategies() -> Vec<Box<dyn DescriptionStrategy>> {
    let mut strategies: Vec<Box<dyn DescriptionStrategy>> = Vec::new();
    if let Some(linkedin) = SelectorStrategy::new(LINKEDIN_DESCRIPTION_SELECTOR) {
        strategies.push(Box::new(linkedin));
    }
    if let Some(generic) = ClassSubstringStrategy::new(&GENERIC_DESCRIPTION_CLASSES) {
        strategies.push(Box::new(generic));
    }
    strategies
}

/// Backfills missing descriptions from a posting's own page.
pub struct DetailPageFetcher {
    fetcher: HttpFetcher,
    strategies: Vec<Box<dyn DescriptionStrategy>>,
}

impl DetailPageFetcher {
    pub fn new(fetcher: HttpFetcher) -> Self {
        Self::with_strategies(fetcher, default_strategies())
    }

    pub fn with_strategies(fetcher: HttpFetcher, strategies: Vec<Box<dyn DescriptionStrategy>>) -> Self {
        Self { fetcher, strategies }
    }

    /// Never fails: network errors, bad status and unmatched pages all give `None`.
    pub async fn fetch(&self, url: &str) -> Option<String> {
        if url.trim().is_empty() {
            return None;
        }

        let body = match self.fetcher.get_text(url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to fetch job details from {}: {}", url, e);
                return None;
            }
        };

        let description = self.extract(&body);
        match &description {
            Some(text) => info!("Fetched description ({} chars) from {}", text.len(), url),
            None => debug!("No description found on {}", url),
        }
        description
    }

    pub fn extract(&self, body: &str) -> Option<String> {
        let document = Html::parse_document(body);
        self.strategies.iter().find_map(|strategy| {
            let found = strategy.extract(&document);
            if found.is_some() {
                debug!("Description matched by strategy '{}'", strategy.name());
            }
            found
        })
    }
}
