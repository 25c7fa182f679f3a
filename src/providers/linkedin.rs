// src/providers/linkedin.rs
//! Native provider for LinkedIn's public guest job search.

use super::{JobProvider, ProviderQuery, ProviderTable};
use crate::core::http::HttpFetcher;
use crate::error::{SourceError, SourceResult};
use crate::types::Value;
use crate::utils::element_text;
use async_trait::async_trait;
use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use url::Url;

pub const SITE_NAME: &str = "linkedin";
const SEARCH_PATH: &str = "/jobs-guest/jobs/api/seeMoreJobPostings/search";

pub struct LinkedInProvider {
    fetcher: HttpFetcher,
    base_url: String,
}

impl LinkedInProvider {
    pub fn new(fetcher: HttpFetcher, base_url: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self, query: &ProviderQuery) -> SourceResult<Url> {
        let raw = format!("{}{}", self.base_url, SEARCH_PATH);
        let mut params = vec![
            ("keywords", query.search_term.clone()),
            ("location", query.location.clone()),
            ("start", "0".to_string()),
        ];
        if query.hours_old > 0 {
            params.push(("f_TPR", format!("r{}", u64::from(query.hours_old) * 3600)));
        }

        Url::parse_with_params(&raw, &params).map_err(|source| SourceError::Url { url: raw, source })
    }

    fn parse_cards(&self, body: &str, limit: usize) -> SourceResult<ProviderTable> {
        let selectors = CardSelectors::new()?;
        let document = Html::parse_document(body);

        let records: Vec<BTreeMap<String, Value>> = document
            .select(&selectors.card)
            .filter_map(|card| self.parse_card(card, &selectors))
            .take(limit)
            .collect();

        Ok(ProviderTable::from_records(records))
    }

    fn parse_card(&self, card: ElementRef, selectors: &CardSelectors) -> Option<BTreeMap<String, Value>> {
        let title = first_text(card, &selectors.title)?;

        let job_id = card
            .value()
            .attr("data-entity-urn")
            .and_then(|urn| urn.rsplit(':').next())
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        let job_url = match &job_id {
            Some(id) => Some(format!("{}/jobs/view/{}", self.base_url, id)),
            None => card
                .select(&selectors.link)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(|href| href.split('?').next().unwrap_or(href).to_string()),
        };

        let date_posted = card
            .select(&selectors.date)
            .next()
            .and_then(|time| time.value().attr("datetime"))
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
            .map(|date| Value::Text(date.format("%Y-%m-%d").to_string()))
            .unwrap_or(Value::Missing);

        let mut record = BTreeMap::new();
        record.insert(
            "id".to_string(),
            job_id.map(|id| Value::Text(format!("li-{}", id))).unwrap_or(Value::Missing),
        );
        record.insert("site".to_string(), Value::from(SITE_NAME));
        record.insert("title".to_string(), Value::Text(title));
        record.insert(
            "company".to_string(),
            first_text(card, &selectors.company).map(Value::Text).unwrap_or(Value::Missing),
        );
        record.insert(
            "location".to_string(),
            first_text(card, &selectors.location).map(Value::Text).unwrap_or(Value::Missing),
        );
        record.insert("job_url".to_string(), Value::from(job_url));
        record.insert("date_posted".to_string(), date_posted);
        record.insert("description".to_string(), Value::Missing);
        Some(record)
    }
}

struct CardSelectors {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    link: Selector,
    date: Selector,
}

impl CardSelectors {
    fn new() -> SourceResult<Self> {
        Ok(Self {
            card: selector("div.base-search-card")?,
            title: selector("h3.base-search-card__title")?,
            company: selector("h4.base-search-card__subtitle")?,
            location: selector("span.job-search-card__location")?,
            link: selector("a.base-card__full-link")?,
            date: selector("time")?,
        })
    }
}

fn selector(raw: &str) -> SourceResult<Selector> {
    Selector::parse(raw).map_err(|e| SourceError::Selector {
        selector: raw.to_string(),
        message: e.to_string(),
    })
}

fn first_text(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(|element| element_text(&element))
        .filter(|text| !text.is_empty())
}

#[async_trait]
impl JobProvider for LinkedInProvider {
    fn name(&self) -> &str {
        SITE_NAME
    }

    async fn search(&self, query: &ProviderQuery) -> SourceResult<ProviderTable> {
        for site in query.site_name.iter().filter(|s| !s.eq_ignore_ascii_case(SITE_NAME)) {
            warn!("No native provider for site '{}', skipping", site);
        }
        if !query.site_name.iter().any(|s| s.eq_ignore_ascii_case(SITE_NAME)) {
            debug!("LinkedIn not requested, nothing to search");
            return Ok(ProviderTable::default());
        }

        let url = self.search_url(query)?;
        let body = self.fetcher.get_text(url.as_str()).await?;
        let table = self.parse_cards(&body, query.results_wanted as usize)?;

        info!("LinkedIn returned {} jobs for '{}'", table.len(), query.search_term);
        Ok(table)
    }
}
