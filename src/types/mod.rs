// src/types/mod.rs
pub mod job;
pub mod request;
pub mod response;
pub mod value;

pub use job::JobRecord;
pub use request::ScrapeRequest;
pub use response::{ScrapeResponse, ScrapeStatus};
pub use value::Value;
