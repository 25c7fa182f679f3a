// src/scraping/site_scraper.rs
//! One extraction engine driven by per-site selector descriptors.

use super::sites::SiteDescriptor;
use crate::core::http::HttpFetcher;
use crate::error::{SourceError, SourceResult};
use crate::types::JobRecord;
use crate::utils::{element_fields, element_text};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

#[derive(Clone)]
pub struct SiteScraper {
    fetcher: HttpFetcher,
}

impl SiteScraper {
    pub fn new(fetcher: HttpFetcher) -> Self {
        Self { fetcher }
    }

    /// Scrape one site for one keyword. Failures are logged and yield no jobs.
    pub async fn scrape(&self, site: &SiteDescriptor, keyword: &str) -> Vec<JobRecord> {
        match self.try_scrape(site, keyword).await {
            Ok(jobs) => {
                info!("Found {} jobs on {} for '{}'", jobs.len(), site.name, keyword);
                jobs
            }
            Err(e) => {
                warn!("Error scraping {} for '{}': {}", site.name, keyword, e);
                Vec::new()
            }
        }
    }

    async fn try_scrape(&self, site: &SiteDescriptor, keyword: &str) -> SourceResult<Vec<JobRecord>> {
        let page_url = site.listing_url(keyword);
        let body = self.fetcher.get_text(&page_url).await?;
        extract_listing(site, &page_url, &body)
    }
}

/// Parse a fetched listing page into job records.
pub fn extract_listing(site: &SiteDescriptor, page_url: &str, body: &str) -> SourceResult<Vec<JobRecord>> {
    let container_selector = parse_selector(&site.container_selector)?;
    let item_selector = parse_selector(&site.item_selector)?;
    let link_selector = parse_selector(&site.link_selector)?;
    let base = origin_of(page_url)?;

    let document = Html::parse_document(body);
    let container = document.select(&container_selector).next().unwrap_or_else(|| {
        debug!(
            "{}: container '{}' not found, using whole document",
            site.name, site.container_selector
        );
        document.root_element()
    });

    let mut jobs = Vec::new();
    for item in container.select(&item_selector) {
        match extract_item(site, &base, item, &link_selector) {
            Ok(Some(job)) => jobs.push(job),
            Ok(None) => debug!("{}: item without link element skipped", site.name),
            Err(e) => warn!("{}: dropping item: {}", site.name, e),
        }
    }

    Ok(jobs)
}

fn extract_item(
    site: &SiteDescriptor,
    base: &Url,
    item: ElementRef,
    link_selector: &Selector,
) -> SourceResult<Option<JobRecord>> {
    // `select` only walks descendants, so an anchor item is its own link
    let link = if link_selector.matches(&item) {
        item
    } else {
        match item.select(link_selector).next() {
            Some(link) => link,
            None => return Ok(None),
        }
    };

    let job_url = link
        .value()
        .attr("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(|href| resolve_url(base, href))
        .transpose()?;

    Ok(Some(JobRecord::scraped(
        &site.name,
        element_text(&link),
        job_url,
        element_fields(&item),
    )))
}

/// Resolve `href` against the scheme and host of the page it came from.
pub fn resolve_url(base: &Url, href: &str) -> SourceResult<String> {
    base.join(href)
        .map(String::from)
        .map_err(|source| SourceError::Url {
            url: href.to_string(),
            source,
        })
}

/// `https://host[:port]/` of a page URL.
fn origin_of(page_url: &str) -> SourceResult<Url> {
    let mut base = Url::parse(page_url).map_err(|source| SourceError::Url {
        url: page_url.to_string(),
        source,
    })?;
    base.set_path("/");
    base.set_query(None);
    base.set_fragment(None);
    Ok(base)
}

fn parse_selector(selector: &str) -> SourceResult<Selector> {
    Selector::parse(selector).map_err(|e| SourceError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;
    use crate::scraping::sites::builtin_sites;

    fn site(template: &str) -> SiteDescriptor {
        SiteDescriptor::new("example", template, "ul.jobs", "li", "a.title")
    }

    #[test]
    fn test_relative_url_resolution() {
        let base = origin_of("https://example.com/jobs?q=x").unwrap();
        assert_eq!(resolve_url(&base, "/post/123").unwrap(), "https://example.com/post/123");
        assert_eq!(resolve_url(&base, "post/123").unwrap(), "https://example.com/post/123");
        assert_eq!(
            resolve_url(&base, "https://other.org/a").unwrap(),
            "https://other.org/a"
        );
    }

    #[test]
    fn test_extract_listing() {
        let body = r#"
            <html><body>
              <ul class="nav"><li><a class="title" href="/about">About</a></li></ul>
              <ul class="jobs">
                <li><a class="title" href="/post/123"> Rust Engineer </a><span>Acme Corp</span></li>
                <li><span>Sponsored banner</span></li>
                <li><a class="title" href="https://jobs.other.org/9">Go Developer</a></li>
              </ul>
            </body></html>"#;

        let jobs = extract_listing(&site("https://example.com/jobs?q={keyword}"), "https://example.com/jobs?q=x", body)
            .unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].site, "example");
        assert_eq!(jobs[0].title, "Rust Engineer");
        assert_eq!(jobs[0].job_url.as_deref(), Some("https://example.com/post/123"));
        assert_eq!(jobs[0].company.as_deref(), Some("Unknown"));
        assert_eq!(jobs[0].location.as_deref(), Some("Remote"));
        assert_eq!(jobs[0].description, None);
        assert_eq!(jobs[0].raw_text.as_deref(), Some("Rust Engineer | Acme Corp"));
        assert_eq!(jobs[1].job_url.as_deref(), Some("https://jobs.other.org/9"));
    }

    #[test]
    fn test_missing_container_falls_back_to_document() {
        let body = r#"<div><li><a class="title" href="/a">One</a></li></div>"#;
        let jobs = extract_listing(&site("https://example.com/"), "https://example.com/", body).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_url.as_deref(), Some("https://example.com/a"));
    }

    #[test]
    fn test_link_without_href_has_no_url() {
        let body = r#"<ul class="jobs"><li><a class="title">No link</a></li></ul>"#;
        let jobs = extract_listing(&site("https://example.com/"), "https://example.com/", body).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_url, None);
    }

    #[test]
    fn test_anchor_item_is_its_own_link() {
        let remoteco = builtin_sites()
            .into_iter()
            .find(|site| site.name == "remoteco")
            .unwrap();
        let body = r#"
            <div class="job_listings">
              <a class="card" href="/job/1">Rust Dev</a>
              <div class="card"><a href="/job/2">Go Dev</a><span>Full-time</span></div>
            </div>"#;

        let jobs = extract_listing(&remoteco, "https://remote.co/remote-jobs/search/?search_keywords=rust", body)
            .unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Rust Dev");
        assert_eq!(jobs[0].job_url.as_deref(), Some("https://remote.co/job/1"));
        assert_eq!(jobs[1].title, "Go Dev");
        assert_eq!(jobs[1].job_url.as_deref(), Some("https://remote.co/job/2"));
    }

    #[test]
    fn test_bad_href_drops_only_that_item() {
        let body = r#"
            <ul class="jobs">
              <li><a class="title" href="http://[bad">Broken</a></li>
              <li><a class="title" href="/ok">Ok</a></li>
            </ul>"#;

        let jobs = extract_listing(&site("https://example.com/"), "https://example.com/", body).unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Ok");
        assert_eq!(jobs[0].job_url.as_deref(), Some("https://example.com/ok"));
    }

    #[test]
    fn test_invalid_selector_is_source_error() {
        let bad = SiteDescriptor::new("bad", "https://example.com/", "ul[", "li", "a");
        let err = extract_listing(&bad, "https://example.com/", "<ul></ul>").unwrap_err();
        assert!(matches!(err, SourceError::Selector { .. }));
    }

    #[tokio::test]
    async fn test_scrape_failure_yields_empty() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", mockito::Matcher::Regex(r"^/jobs".to_string()))
            .with_status(503)
            .create_async()
            .await;

        let scraper = SiteScraper::new(HttpFetcher::new(&HttpConfig::default()).unwrap());
        let jobs = scraper
            .scrape(&site(&format!("{}/jobs?q={{keyword}}", server.url())), "Rust")
            .await;
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn test_scrape_fetches_keyword_page() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", mockito::Matcher::Regex(r"^/jobs".to_string()))
            .match_query(mockito::Matcher::UrlEncoded(
                "q".to_string(),
                "Backend Engineer".to_string(),
            ))
            .with_status(200)
            .with_body(r#"<ul class="jobs"><li><a class="title" href="/post/1">Backend Engineer</a></li></ul>"#)
            .create_async()
            .await;

        let scraper = SiteScraper::new(HttpFetcher::new(&HttpConfig::default()).unwrap());
        let jobs = scraper
            .scrape(&site(&format!("{}/jobs?q={{keyword}}", server.url())), "Backend Engineer")
            .await;

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_url, Some(format!("{}/post/1", server.url())));
    }
}
