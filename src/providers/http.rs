// src/providers/http.rs
//! Remote tabular search service speaking JSON.

use super::{JobProvider, ProviderQuery, ProviderTable};
use crate::core::http::HttpFetcher;
use crate::error::SourceResult;
use crate::types::Value;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::info;

const SEARCH_ENDPOINT: &str = "/search";

/// Either a split-orient table or a list of row objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum SearchPayload {
    Split {
        columns: Vec<String>,
        data: Vec<Vec<Value>>,
    },
    Records(Vec<BTreeMap<String, Value>>),
}

pub struct HttpJobProvider {
    fetcher: HttpFetcher,
    base_url: String,
}

impl HttpJobProvider {
    pub fn new(fetcher: HttpFetcher, base_url: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn parse(body: &str) -> SourceResult<ProviderTable> {
        let payload: SearchPayload = serde_json::from_str(body)?;
        Ok(match payload {
            SearchPayload::Split { columns, data } => ProviderTable::new(columns, data),
            SearchPayload::Records(records) => ProviderTable::from_records(records),
        })
    }
}

#[async_trait]
impl JobProvider for HttpJobProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn search(&self, query: &ProviderQuery) -> SourceResult<ProviderTable> {
        let url = format!("{}{}", self.base_url, SEARCH_ENDPOINT);
        info!("Calling job search service: {} ('{}')", url, query.search_term);

        let body = self.fetcher.post_json(&url, query).await?;
        Self::parse(&body)
    }
}
