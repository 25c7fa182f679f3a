// src/web/handlers/scrape_handlers.rs
use crate::core::AggregationPipeline;
use crate::types::ScrapeResponse;
use crate::web::types::{ScrapeParams, ServerConfig};

use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

pub async fn scrape_handler(
    params: ScrapeParams,
    pipeline: &State<AggregationPipeline>,
    config: &State<ServerConfig>,
) -> Json<ScrapeResponse> {
    let request = params.into_request(&config.default_sites);

    info!(
        "Scrape request: keywords={:?} location='{}' results={} hours_old={}",
        request.keywords, request.location, request.results_wanted, request.hours_old
    );

    Json(pipeline.run(request).await)
}
