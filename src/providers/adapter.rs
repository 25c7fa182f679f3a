// src/providers/adapter.rs
use super::{JobProvider, ProviderQuery};
use crate::scraping::DetailPageFetcher;
use crate::types::JobRecord;
use std::sync::Arc;
use tracing::{info, warn};

/// Runs the structured provider for one keyword and shapes its rows into job records.
pub struct StructuredSourceAdapter {
    provider: Arc<dyn JobProvider>,
    details: DetailPageFetcher,
    description_sites: Vec<String>,
}

impl StructuredSourceAdapter {
    pub fn new(provider: Arc<dyn JobProvider>, details: DetailPageFetcher, description_sites: Vec<String>) -> Self {
        Self {
            provider,
            details,
            description_sites,
        }
    }

    /// Provider failures are logged and turn into an empty list.
    pub async fn fetch(
        &self,
        keyword: &str,
        location: &str,
        results_wanted: u32,
        hours_old: u32,
        site_names: &[String],
    ) -> Vec<JobRecord> {
        let query = ProviderQuery {
            site_name: site_names.to_vec(),
            search_term: keyword.to_string(),
            location: location.to_string(),
            results_wanted,
            hours_old,
        };

        let table = match self.provider.search(&query).await {
            Ok(table) => table,
            Err(e) => {
                warn!("Error scraping jobs for '{}' via {}: {}", keyword, self.provider.name(), e);
                return Vec::new();
            }
        };

        if table.is_empty() {
            info!("No jobs found for '{}'", keyword);
            return Vec::new();
        }

        let mut jobs: Vec<JobRecord> = table.into_records().into_iter().map(JobRecord::from_row).collect();

        for job in jobs.iter_mut() {
            if !job.needs_description() || !self.omits_descriptions(&job.site) {
                continue;
            }
            if let Some(url) = job.job_url.as_deref() {
                job.description = self.details.fetch(url).await;
            }
        }

        info!("Found {} jobs for '{}'", jobs.len(), keyword);
        jobs
    }

    fn omits_descriptions(&self, site: &str) -> bool {
        self.description_sites
            .iter()
            .any(|s| s.eq_ignore_ascii_case(site))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;
    use crate::core::http::HttpFetcher;
    use crate::error::{SourceError, SourceResult};
    use crate::providers::ProviderTable;
    use crate::types::Value;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubProvider {
        table: Option<ProviderTable>,
        seen: Mutex<Vec<ProviderQuery>>,
    }

    #[async_trait]
    impl JobProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn search(&self, query: &ProviderQuery) -> SourceResult<ProviderTable> {
            self.seen.lock().unwrap().push(query.clone());
            self.table
                .clone()
                .ok_or_else(|| SourceError::Provider("invalid search arguments".to_string()))
        }
    }

    fn adapter(table: Option<ProviderTable>) -> (Arc<StubProvider>, StructuredSourceAdapter) {
        let provider = Arc::new(StubProvider {
            table,
            seen: Mutex::new(Vec::new()),
        });
        let details = DetailPageFetcher::new(HttpFetcher::new(&HttpConfig::default()).unwrap());
        let adapter = StructuredSourceAdapter::new(provider.clone(), details, vec!["linkedin".to_string()]);
        (provider, adapter)
    }

    fn columns() -> Vec<String> {
        ["site", "title", "job_url", "description", "salary_source"]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_provider_error_yields_empty() {
        let (_, adapter) = adapter(None);
        let jobs = adapter
            .fetch("Rust", "Remote", 10, 24, &["linkedin".to_string()])
            .await;
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn test_passes_query_through() {
        let (provider, adapter) = adapter(Some(ProviderTable::default()));
        adapter
            .fetch("Rust", "Germany", 7, 48, &["indeed".to_string()])
            .await;

        let seen = provider.seen.lock().unwrap();
        assert_eq!(
            seen[0],
            ProviderQuery {
                site_name: vec!["indeed".to_string()],
                search_term: "Rust".to_string(),
                location: "Germany".to_string(),
                results_wanted: 7,
                hours_old: 48,
            }
        );
    }

    #[tokio::test]
    async fn test_backfills_only_description_sites() {
        let mut server = mockito::Server::new_async().await;
        let linkedin_page = server
            .mock("GET", "/jobs/view/1")
            .with_status(200)
            .with_body(r#"<div class="show-more-less-html__markup">Great role</div>"#)
            .expect(1)
            .create_async()
            .await;
        let indeed_page = server
            .mock("GET", "/viewjob/2")
            .with_status(200)
            .with_body(r#"<div class="description">Should not be fetched</div>"#)
            .expect(0)
            .create_async()
            .await;

        let table = ProviderTable::new(
            columns(),
            vec![
                vec![
                    Value::from("linkedin"),
                    Value::from("Backend Engineer"),
                    Value::Text(format!("{}/jobs/view/1", server.url())),
                    Value::Missing,
                    Value::Missing,
                ],
                vec![
                    Value::from("indeed"),
                    Value::from("Backend Engineer"),
                    Value::Text(format!("{}/viewjob/2", server.url())),
                    Value::Float(f64::NAN),
                    Value::from("direct_data"),
                ],
            ],
        );
        let (_, adapter) = adapter(Some(table));

        let jobs = adapter
            .fetch("Backend Engineer", "Remote", 10, 24, &["linkedin".to_string(), "indeed".to_string()])
            .await;

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].description.as_deref(), Some("Great role"));
        assert_eq!(jobs[1].description, None);
        assert_eq!(jobs[1].extra.get("salary_source"), Some(&Value::from("direct_data")));
        linkedin_page.assert_async().await;
        indeed_page.assert_async().await;
    }
}
