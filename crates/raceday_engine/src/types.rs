use std::fmt;

use serde::Serialize;

/// A race currently broadcasting live on the homepage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveRace {
    /// Raw site-relative href of the live ticker page, as found in the markup.
    pub url: String,
    pub name: String,
    /// Constant tag, always "live".
    pub status: String,
    /// Free text: remaining distance or rider count, e.g. "12 km".
    pub togo: String,
}

/// A race expected to finish shortly, taken from the homepage table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingFinish {
    pub url: String,
    pub name: String,
    /// Free-text estimated time of arrival.
    pub eta: String,
    pub category: String,
    #[serde(rename = "class")]
    pub race_class: String,
}

/// A race that finished today or yesterday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinishedRace {
    pub url: String,
    pub name: String,
    pub category: String,
}

/// Aggregate of every homepage extraction over one document snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodayReport {
    pub live_races: Vec<LiveRace>,
    pub next_to_finish: Vec<UpcomingFinish>,
    pub finished_races: Vec<FinishedRace>,
    pub yesterday_races: Vec<FinishedRace>,
}

/// Transport-level failure from the fetch boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Failure of a fetch-and-extract operation. Extraction itself never
/// fails; only the transport and the byte decoder can.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] crate::decode::DecodeError),
}
