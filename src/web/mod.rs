// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::config::ListenConfig;
use crate::core::AggregationPipeline;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, routes, Request, Response, State};
use tracing::info;

/// Adds CORS headers to `/api` responses. Only GET and preflight are advertised.
pub struct Cors {
    allowed_origin: String,
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS headers for the scrape API",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        if !request.uri().path().as_str().starts_with("/api") {
            return;
        }
        response.set_header(Header::new("Access-Control-Allow-Origin", self.allowed_origin.clone()));
        response.set_header(Header::new("Access-Control-Allow-Methods", "GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));
        response.set_header(Header::new("Access-Control-Max-Age", "86400"));
    }
}

#[get("/scrape?<params..>")]
pub async fn scrape(
    params: ScrapeParams,
    pipeline: &State<AggregationPipeline>,
    config: &State<ServerConfig>,
) -> Json<crate::types::ScrapeResponse> {
    handlers::scrape_handler(params, pipeline, config).await
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Resource not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["Available endpoints: GET /api/scrape, GET /api/health".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

pub fn build_rocket(
    pipeline: AggregationPipeline,
    default_sites: Vec<String>,
    listen: &ListenConfig,
) -> rocket::Rocket<rocket::Build> {
    let figment = rocket::Config::figment()
        .merge(("address", listen.address.clone()))
        .merge(("port", listen.port));

    rocket::custom(figment)
        .attach(Cors {
            allowed_origin: listen.allowed_origin.clone(),
        })
        .manage(pipeline)
        .manage(ServerConfig { default_sites })
        .register("/api", catchers![not_found, internal_error])
        .mount("/api", routes![scrape, health, options])
}

pub async fn start_web_server(
    pipeline: AggregationPipeline,
    default_sites: Vec<String>,
    listen: &ListenConfig,
) -> Result<()> {
    info!("Starting job aggregator API on http://{}:{}", listen.address, listen.port);

    build_rocket(pipeline, default_sites, listen)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket server failed: {}", e))?;

    Ok(())
}
