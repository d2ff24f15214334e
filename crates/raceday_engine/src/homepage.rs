//! Extractors over one homepage document snapshot.

use scraper::{ElementRef, Html};

use crate::node::{attr_of, next_sibling_with_class, select_all, select_first, text_of};
use crate::types::{FinishedRace, LiveRace, TodayReport, UpcomingFinish};

/// Selector for the live-status list.
const LIVE_ITEMS: &str = "ul.hp3-livestats li.live";
/// Selector for the body of the next-to-finish table.
const NEXT_TO_FINISH_BODY: &str = "table.next-to-finish tbody";
/// Section headings labelling the homepage result blocks.
const SECTION_HEADINGS: &str = "h3.black-info-title";
/// Class fragment marking a results list; paired with its heading by a
/// forward sibling walk, not a descendant selector.
const RESULTS_LIST_CLASS: &str = "hp2-results";
/// Items inside a results list.
const RESULT_ITEMS: &str = "li.race";
/// Race link inside a result item. The anchor must be a direct child of
/// its wrapper; deeper anchors point at rider profiles, not races.
const RESULT_LINK: &str = "div > a[href^='race/']";

const RESULTS_TODAY_LABEL: &str = "Results today";
const RESULTS_YESTERDAY_LABEL: &str = "Results yesterday";

// Column positions in the next-to-finish table. The extractor trusts
// column order, not headers; a site layout change lands here.
const COL_ETA: usize = 1;
const COL_RACE: usize = 3;
const COL_CATEGORY: usize = 4;
const COL_CLASS: usize = 5;
const MIN_COLUMNS: usize = 4;

/// One parsed homepage snapshot.
///
/// Every extraction method is read-only and total: a document missing the
/// expected markup yields empty output, never an error.
pub struct Homepage {
    document: Html,
}

impl Homepage {
    /// Parse from caller-supplied markup.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    pub(crate) fn from_document(document: Html) -> Self {
        Self { document }
    }

    fn root(&self) -> ElementRef<'_> {
        self.document.root_element()
    }

    /// Races currently running live, in document order.
    pub fn live_races(&self) -> Vec<LiveRace> {
        let mut races = Vec::new();
        for item in select_all(self.root(), LIVE_ITEMS) {
            // No anchor means no race identity; drop the item.
            let Some(anchor) = select_first(item, "a") else {
                continue;
            };
            races.push(LiveRace {
                url: attr_of(anchor, "href"),
                name: select_first(item, "span.title")
                    .map(text_of)
                    .unwrap_or_default(),
                status: "live".to_string(),
                togo: select_first(item, "div.togo")
                    .map(text_of)
                    .unwrap_or_default(),
            });
        }
        races
    }

    /// Races expected to finish shortly, in table order.
    ///
    /// Rows with fewer than four cells carry no race and are skipped
    /// whole; no partial record is emitted.
    pub fn next_to_finish(&self) -> Vec<UpcomingFinish> {
        let mut races = Vec::new();
        let Some(body) = select_first(self.root(), NEXT_TO_FINISH_BODY) else {
            return races;
        };
        for row in select_all(body, "tr") {
            let cells = select_all(row, "td");
            if cells.len() < MIN_COLUMNS {
                continue;
            }
            let Some(anchor) = select_first(cells[COL_RACE], "a") else {
                continue;
            };
            races.push(UpcomingFinish {
                url: attr_of(anchor, "href"),
                name: text_of(anchor),
                eta: text_of(cells[COL_ETA]),
                category: cells
                    .get(COL_CATEGORY)
                    .map(|cell| text_of(*cell))
                    .unwrap_or_default(),
                race_class: cells
                    .get(COL_CLASS)
                    .map(|cell| text_of(*cell))
                    .unwrap_or_default(),
            });
        }
        races
    }

    /// Races that finished today.
    pub fn finished_races(&self) -> Vec<FinishedRace> {
        self.results_section(RESULTS_TODAY_LABEL)
    }

    /// Races that finished yesterday.
    pub fn yesterday_races(&self) -> Vec<FinishedRace> {
        self.results_section(RESULTS_YESTERDAY_LABEL)
    }

    /// Run every extractor against this snapshot.
    pub fn report(&self) -> TodayReport {
        let report = TodayReport {
            live_races: self.live_races(),
            next_to_finish: self.next_to_finish(),
            finished_races: self.finished_races(),
            yesterday_races: self.yesterday_races(),
        };
        log::info!(
            "homepage: {} live, {} upcoming, {} today, {} yesterday",
            report.live_races.len(),
            report.next_to_finish.len(),
            report.finished_races.len(),
            report.yesterday_races.len()
        );
        report
    }

    fn results_section(&self, label: &str) -> Vec<FinishedRace> {
        let mut races = Vec::new();
        let Some(list) = self.locate_results_list(label) else {
            return races;
        };
        for item in select_all(list, RESULT_ITEMS) {
            let Some(link) = select_first(item, RESULT_LINK) else {
                continue;
            };
            races.push(FinishedRace {
                url: attr_of(link, "href"),
                name: select_first(link, "b").map(text_of).unwrap_or_default(),
                category: select_first(item, "span.category")
                    .map(text_of)
                    .unwrap_or_default(),
            });
        }
        races
    }

    /// Find the results list belonging to the first heading whose text
    /// contains `label`, by walking that heading's forward siblings.
    fn locate_results_list(&self, label: &str) -> Option<ElementRef<'_>> {
        let heading = select_all(self.root(), SECTION_HEADINGS)
            .into_iter()
            .find(|heading| heading.text().collect::<String>().contains(label))?;
        next_sibling_with_class(heading, "ul", RESULTS_LIST_CLASS)
    }
}
