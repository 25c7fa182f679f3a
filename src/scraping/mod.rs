// src/scraping/mod.rs
pub mod detail_fetcher;
pub mod site_scraper;
pub mod sites;

pub use detail_fetcher::{DescriptionStrategy, DetailPageFetcher};
pub use site_scraper::SiteScraper;
pub use sites::{SiteDescriptor, SiteRegistry};
