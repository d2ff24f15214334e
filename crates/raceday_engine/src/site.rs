//! Fixed URLs and path constants of the target site.
//!
//! None of these are user-configurable; they describe the site's layout.

/// Base URL; page paths and calendar queries are joined onto it.
pub const BASE_URL: &str = "https://www.procyclingstats.com/";

/// Relative path of the homepage carrying the live and results widgets.
pub(crate) const HOMEPAGE_PATH: &str = "index.php";

/// Href prefix that identifies race detail pages.
pub const RACE_PATH_PREFIX: &str = "race/";

/// Build the calendar query for one date (UCI calendar, fixed filters).
///
/// `date` is `YYYY-MM-DD`, or empty for the site's default date. It is
/// passed through unvalidated; the site decides what a malformed date
/// means, typically an empty result set.
pub fn calendar_query(date: &str) -> String {
    format!("races.php?p=uci&s=today&date={date}&nation=&cat=&filter=Filter")
}
