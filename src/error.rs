// src/error.rs
use thiserror::Error;

/// Failure of a single (keyword, source) fetch. Always recovered by the caller.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    #[error("invalid url `{url}`: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("malformed provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("provider error: {0}")]
    Provider(String),
}

pub type SourceResult<T> = Result<T, SourceError>;
