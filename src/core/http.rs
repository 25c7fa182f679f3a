// src/core/http.rs
//! Shared HTTP client for listing pages, detail pages and provider calls.

use crate::config::HttpConfig;
use crate::error::{SourceError, SourceResult};
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// GET a page body. Non-2xx is an error; nothing is retried.
    pub async fn get_text(&self, url: &str) -> SourceResult<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SourceError::Request {
                url: url.to_string(),
                source,
            })?;

        Self::read_body(url, response).await
    }

    /// POST a JSON body and return the raw response text.
    pub async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> SourceResult<String> {
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|source| SourceError::Request {
                url: url.to_string(),
                source,
            })?;

        Self::read_body(url, response).await
    }

    async fn read_body(url: &str, response: reqwest::Response) -> SourceResult<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| SourceError::Request {
            url: url.to_string(),
            source,
        })
    }
}
