//! Raceday engine: typed extraction of race-status records from the
//! HTML pages of a cycling-results site that exposes no API.
mod calendar;
mod client;
mod decode;
mod fetch;
mod homepage;
mod node;
mod site;
mod types;

/// Parsed-document type of the public API; `collect_race_urls` and the
/// extractors operate over it.
pub use scraper::Html;

pub use calendar::collect_race_urls;
pub use client::SiteClient;
pub use decode::{decode_html, DecodeError};
pub use fetch::{FetchOutput, FetchSettings, Fetcher, ReqwestFetcher};
pub use homepage::Homepage;
pub use site::{calendar_query, BASE_URL, RACE_PATH_PREFIX};
pub use types::{
    FailureKind, FetchError, FinishedRace, LiveRace, ScrapeError, TodayReport, UpcomingFinish,
};
