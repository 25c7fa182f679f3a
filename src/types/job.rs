// src/types/job.rs
use super::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const UNKNOWN_COMPANY: &str = "Unknown";
pub const REMOTE_LOCATION: &str = "Remote";

/// Uniform job posting shared by every source.
///
/// The named fields are the core schema; anything else a provider sends is
/// carried in `extra` and flattened back next to them on output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobRecord {
    pub site: String,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_url: Option<String>,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl JobRecord {
    /// Record scraped from an unstructured listing page.
    pub fn scraped(site: &str, title: String, job_url: Option<String>, raw_text: String) -> Self {
        Self {
            site: site.to_string(),
            title,
            company: Some(UNKNOWN_COMPANY.to_string()),
            location: Some(REMOTE_LOCATION.to_string()),
            job_url,
            description: None,
            raw_text: Some(raw_text),
            extra: BTreeMap::new(),
        }
    }

    /// Build a record from one provider row, lifting the core columns out and
    /// keeping every other column untouched.
    pub fn from_row(mut row: BTreeMap<String, Value>) -> Self {
        let mut take = |key: &str| row.remove(key).and_then(Value::into_text);

        let site = take("site").unwrap_or_default();
        let title = take("title").unwrap_or_default();
        let company = take("company");
        let location = take("location");
        let job_url = take("job_url").filter(|u| !u.trim().is_empty());
        let description = take("description").filter(|d| !d.trim().is_empty());

        Self {
            site,
            title,
            company,
            location,
            job_url,
            description,
            raw_text: None,
            extra: row,
        }
    }

    pub fn needs_description(&self) -> bool {
        self.description.is_none() && self.job_url.is_some()
    }
}
