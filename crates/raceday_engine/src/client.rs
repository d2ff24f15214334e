//! Site client: an injected fetcher plus a base URL, the engine's only
//! I/O surface.

use std::sync::Arc;

use scraper::Html;
use url::Url;

use crate::calendar::collect_race_urls;
use crate::decode::decode_html;
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::homepage::Homepage;
use crate::site::{self, calendar_query};
use crate::types::{FailureKind, FetchError, ScrapeError};

/// Client over the results site.
///
/// The fetcher is caller-owned and shared, so session lifetime and
/// connection reuse follow the caller, not individual calls.
pub struct SiteClient {
    fetcher: Arc<dyn Fetcher>,
    base_url: String,
}

impl SiteClient {
    /// Client against the production site with default fetch settings.
    pub fn new() -> Result<Self, FetchError> {
        let fetcher = ReqwestFetcher::new(FetchSettings::default())?;
        Ok(Self::with_fetcher(Arc::new(fetcher)))
    }

    /// Client over a caller-supplied fetcher.
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            base_url: site::BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host. Tests use this to talk to a
    /// local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch and parse the homepage into a queryable snapshot.
    pub async fn homepage(&self) -> Result<Homepage, ScrapeError> {
        let document = self.fetch_document(site::HOMEPAGE_PATH).await?;
        Ok(Homepage::from_document(document))
    }

    /// All race URLs listed in the calendar for `date` (`YYYY-MM-DD`, or
    /// empty for the site's default date), deduplicated and sorted.
    ///
    /// Network failures propagate to the caller untranslated.
    pub async fn race_urls_for_date(&self, date: &str) -> Result<Vec<String>, ScrapeError> {
        let document = self.fetch_document(&calendar_query(date)).await?;
        let urls = collect_race_urls(&document);
        log::info!("calendar {date:?}: {} race urls", urls.len());
        Ok(urls)
    }

    async fn fetch_document(&self, path: &str) -> Result<Html, ScrapeError> {
        let url = join_base(&self.base_url, path)?;
        let output = self.fetcher.fetch(&url).await?;
        let html = decode_html(&output.bytes, output.content_type.as_deref())?;
        Ok(Html::parse_document(&html))
    }
}

fn join_base(base_url: &str, path: &str) -> Result<String, FetchError> {
    Url::parse(base_url)
        .and_then(|base| base.join(path))
        .map(String::from)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
}
