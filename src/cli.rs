// src/cli.rs
use crate::config::AppConfig;
use crate::core::AggregationPipeline;
use crate::types::request::{DEFAULT_HOURS_OLD, DEFAULT_RESULTS_WANTED};
use crate::types::{JobRecord, ScrapeRequest, ScrapeResponse};
use crate::utils::split_keywords;
use crate::web::start_web_server;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use tracing::info;

#[derive(Parser)]
#[command(name = "job-aggregator")]
#[command(about = "Aggregate job postings for keywords from several job sources")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Scrape once and print the result to stdout
    Scrape {
        /// Comma-separated keywords, e.g. "Software Engineer,Python Developer"
        keywords: String,
        #[arg(default_value = "Remote")]
        location: String,
        #[arg(default_value_t = DEFAULT_RESULTS_WANTED)]
        results: u32,
        #[arg(default_value_t = DEFAULT_HOURS_OLD)]
        hours_old: u32,
        /// Comma-separated structured-source sites (defaults from config)
        #[arg(long)]
        sites: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

pub async fn handle_command(cli: Cli, mut config: AppConfig) -> Result<()> {
    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            let pipeline = AggregationPipeline::from_config(&config)?;
            start_web_server(pipeline, config.provider.search_sites(), &config.server).await
        }

        Command::Scrape {
            keywords,
            location,
            results,
            hours_old,
            sites,
            format,
        } => {
            let site_names = sites
                .as_deref()
                .map(split_keywords)
                .unwrap_or_else(|| config.provider.search_sites());

            let request = ScrapeRequest::new(split_keywords(&keywords), location)
                .with_results_wanted(results)
                .with_hours_old(hours_old)
                .with_site_names(site_names);

            let pipeline = AggregationPipeline::from_config(&config)?;
            let response = pipeline.run(request).await;
            info!("{} jobs collected", response.total_jobs());

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            match format {
                OutputFormat::Json => write_json(&mut out, &response)?,
                OutputFormat::Csv => write_csv(&mut out, response.jobs())?,
            }
            out.flush().context("Failed to flush stdout")
        }
    }
}

pub fn write_json<W: Write>(out: &mut W, response: &ScrapeResponse) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, response).context("Failed to serialize response")?;
    writeln!(out).context("Failed to write output")
}

/// Core columns only; provider-specific fields stay in the JSON output.
pub fn write_csv<W: Write>(out: &mut W, jobs: &[JobRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(["site", "title", "company", "location", "job_url", "description"])
        .context("Failed to write CSV header")?;

    for job in jobs {
        writer
            .write_record([
                job.site.as_str(),
                job.title.as_str(),
                job.company.as_deref().unwrap_or(""),
                job.location.as_deref().unwrap_or(""),
                job.job_url.as_deref().unwrap_or(""),
                job.description.as_deref().unwrap_or(""),
            ])
            .context("Failed to write CSV row")?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scrape_args() {
        let cli = Cli::parse_from(["job-aggregator", "scrape", "Rust,Go", "Germany", "10", "--format", "csv"]);
        let Command::Scrape {
            keywords,
            location,
            results,
            hours_old,
            format,
            sites,
        } = cli.command
        else {
            panic!("expected scrape command");
        };
        assert_eq!(keywords, "Rust,Go");
        assert_eq!(location, "Germany");
        assert_eq!(results, 10);
        assert_eq!(hours_old, 24);
        assert_eq!(format, OutputFormat::Csv);
        assert_eq!(sites, None);
    }

    #[test]
    fn test_write_csv() {
        let jobs = vec![JobRecord::scraped(
            "weworkremotely",
            "Rust, Senior".to_string(),
            Some("https://example.com/1".to_string()),
            "Rust, Senior".to_string(),
        )];
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &jobs).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("site,title,company,location,job_url,description"));
        assert_eq!(
            lines.next(),
            Some("weworkremotely,\"Rust, Senior\",Unknown,Remote,https://example.com/1,")
        );
    }

    #[test]
    fn test_write_json() {
        let response = ScrapeResponse::completed(vec!["Rust".to_string()], "Remote".to_string(), vec![]);
        let mut buffer = Vec::new();
        write_json(&mut buffer, &response).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["status"], "no_results");
    }
}
