// src/types/response.rs
use super::job::JobRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrapeStatus {
    Success,
    NoResults,
    Error,
}

/// Outcome of one aggregation run.
///
/// Only constructible through [`ScrapeResponse::completed`] and
/// [`ScrapeResponse::rejected`], which keep `total_jobs` equal to the job count
/// and the status consistent with the contents.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeResponse {
    status: ScrapeStatus,
    total_jobs: usize,
    keywords: Vec<String>,
    location: String,
    jobs: Vec<JobRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_locations: Option<Vec<String>>,
}

impl ScrapeResponse {
    pub fn completed(keywords: Vec<String>, location: String, jobs: Vec<JobRecord>) -> Self {
        let status = if jobs.is_empty() {
            ScrapeStatus::NoResults
        } else {
            ScrapeStatus::Success
        };

        Self {
            status,
            total_jobs: jobs.len(),
            keywords,
            location,
            jobs,
            error: None,
            message: None,
            valid_locations: None,
        }
    }

    pub fn rejected(keywords: Vec<String>, location: String, valid_locations: Vec<String>) -> Self {
        let message = format!(
            "Location '{}' is not supported. Use one of the valid locations.",
            location
        );

        Self {
            status: ScrapeStatus::Error,
            total_jobs: 0,
            keywords,
            location,
            jobs: Vec::new(),
            error: Some("invalid_location".to_string()),
            message: Some(message),
            valid_locations: Some(valid_locations),
        }
    }

    pub fn status(&self) -> ScrapeStatus {
        self.status
    }

    pub fn total_jobs(&self) -> usize {
        self.total_jobs
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn valid_locations(&self) -> Option<&[String]> {
        self.valid_locations.as_deref()
    }

    pub(crate) fn jobs_mut(&mut self) -> &mut Vec<JobRecord> {
        &mut self.jobs
    }
}
