use pretty_assertions::assert_eq;
use raceday_engine::{FinishedRace, Homepage, LiveRace, UpcomingFinish};

fn page(body: &str) -> Homepage {
    Homepage::parse(&format!("<html><head></head><body>{body}</body></html>"))
}

const LIVE_LIST: &str = "<ul class=\"hp3-livestats\">\
    <li class=\"live\">\
        <a href=\"race/x/2026/stage-2/live\"><span class=\"title\">Stage 2</span></a>\
        <div class=\"togo\">12km</div>\
    </li>\
</ul>";

#[test]
fn live_race_item_yields_full_record() {
    let homepage = page(LIVE_LIST);
    assert_eq!(
        homepage.live_races(),
        vec![LiveRace {
            url: "race/x/2026/stage-2/live".to_string(),
            name: "Stage 2".to_string(),
            status: "live".to_string(),
            togo: "12km".to_string(),
        }]
    );
}

#[test]
fn document_without_live_container_yields_empty() {
    let homepage = page("<p>nothing to see</p>");
    assert_eq!(homepage.live_races(), vec![]);
}

#[test]
fn live_item_without_anchor_is_dropped() {
    let homepage = page(
        "<ul class=\"hp3-livestats\">\
         <li class=\"live\"><span class=\"title\">No link</span></li>\
         <li class=\"finished\"><a href=\"race/y/2026\">wrong class</a></li>\
         </ul>",
    );
    assert_eq!(homepage.live_races(), vec![]);
}

#[test]
fn live_item_missing_title_and_togo_defaults_to_empty() {
    let homepage = page(
        "<ul class=\"hp3-livestats\">\
         <li class=\"live\"><a href=\"race/z/2026/live\"></a></li>\
         </ul>",
    );
    assert_eq!(
        homepage.live_races(),
        vec![LiveRace {
            url: "race/z/2026/live".to_string(),
            name: String::new(),
            status: "live".to_string(),
            togo: String::new(),
        }]
    );
}

const NEXT_TO_FINISH_TABLE: &str = "<table class=\"next-to-finish\"><tbody>\
    <tr>\
        <td>1</td><td>16:30</td><td>flag</td>\
        <td><a href=\"race/tour-de-france/2026/stage-5\">Tour de France | Stage 5</a></td>\
        <td>ME</td><td>2.UWT</td>\
    </tr>\
    <tr><td>2</td><td>16:45</td><td>flag</td></tr>\
    <tr><td>3</td><td>17:00</td><td>flag</td><td>no link here</td></tr>\
    <tr>\
        <td>4</td><td>17:15</td><td>flag</td>\
        <td><a href=\"race/short-row/2026\">Short Row</a></td>\
    </tr>\
</tbody></table>";

#[test]
fn next_to_finish_parses_positional_columns() {
    let homepage = page(NEXT_TO_FINISH_TABLE);
    assert_eq!(
        homepage.next_to_finish(),
        vec![
            UpcomingFinish {
                url: "race/tour-de-france/2026/stage-5".to_string(),
                name: "Tour de France | Stage 5".to_string(),
                eta: "16:30".to_string(),
                category: "ME".to_string(),
                race_class: "2.UWT".to_string(),
            },
            // The four-cell row still qualifies; the optional trailing
            // columns default to empty.
            UpcomingFinish {
                url: "race/short-row/2026".to_string(),
                name: "Short Row".to_string(),
                eta: "17:15".to_string(),
                category: String::new(),
                race_class: String::new(),
            },
        ]
    );
}

#[test]
fn next_to_finish_without_table_yields_empty() {
    let homepage = page("<table class=\"other\"><tbody><tr><td>x</td></tr></tbody></table>");
    assert_eq!(homepage.next_to_finish(), vec![]);
}

const RESULTS_SECTIONS: &str = "<h3 class=\"black-info-title\">Results today</h3>\
    some stray text\
    <div class=\"spacer\"></div>\
    <ul class=\"list hp2-results\">\
        <li class=\"race\">\
            <div><a href=\"race/uae-tour-women/2026/stage-1\"><b>UAE Tour Women</b></a></div>\
            <span class=\"category\">WE</span>\
        </li>\
        <li class=\"race\">\
            <div><a href=\"race/gp-foo/2026\"></a></div>\
        </li>\
        <li class=\"race\">\
            <div><a href=\"rider/some-rider\"><b>Not a race link</b></a></div>\
        </li>\
        <li class=\"race\">\
            <div><span><a href=\"race/nested/2026\"><b>Nested anchor</b></a></span></div>\
        </li>\
    </ul>\
    <h3 class=\"black-info-title\">Results yesterday</h3>\
    <ul class=\"list hp2-results\">\
        <li class=\"race\">\
            <div><a href=\"race/omloop/2026\"><b>Omloop</b></a></div>\
            <span class=\"category\">ME</span>\
        </li>\
    </ul>";

#[test]
fn finished_races_walks_siblings_to_results_list() {
    let homepage = page(RESULTS_SECTIONS);
    assert_eq!(
        homepage.finished_races(),
        vec![
            FinishedRace {
                url: "race/uae-tour-women/2026/stage-1".to_string(),
                name: "UAE Tour Women".to_string(),
                category: "WE".to_string(),
            },
            // Anchor present but no <b>: name defaults to empty.
            FinishedRace {
                url: "race/gp-foo/2026".to_string(),
                name: String::new(),
                category: String::new(),
            },
        ]
    );
}

#[test]
fn yesterday_races_uses_its_own_heading() {
    let homepage = page(RESULTS_SECTIONS);
    assert_eq!(
        homepage.yesterday_races(),
        vec![FinishedRace {
            url: "race/omloop/2026".to_string(),
            name: "Omloop".to_string(),
            category: "ME".to_string(),
        }]
    );
}

#[test]
fn missing_heading_yields_empty_without_error() {
    let homepage = page("<h3 class=\"black-info-title\">Something else</h3>");
    assert_eq!(homepage.finished_races(), vec![]);
    assert_eq!(homepage.yesterday_races(), vec![]);
}

#[test]
fn heading_without_following_list_yields_empty() {
    let homepage = page(
        "<h3 class=\"black-info-title\">Results today</h3>\
         <p>list never arrives</p>",
    );
    assert_eq!(homepage.finished_races(), vec![]);
}

#[test]
fn only_first_matching_heading_is_inspected() {
    let homepage = page(
        "<h3 class=\"black-info-title\">Results today</h3>\
         <ul class=\"hp2-results\">\
            <li class=\"race\"><div><a href=\"race/first/2026\"><b>First</b></a></div></li>\
         </ul>\
         <h3 class=\"black-info-title\">Results today</h3>\
         <ul class=\"hp2-results\">\
            <li class=\"race\"><div><a href=\"race/second/2026\"><b>Second</b></a></div></li>\
         </ul>",
    );
    let races = homepage.finished_races();
    assert_eq!(races.len(), 1);
    assert_eq!(races[0].url, "race/first/2026");
}

#[test]
fn section_locator_is_idempotent() {
    let homepage = page(RESULTS_SECTIONS);
    assert_eq!(homepage.finished_races(), homepage.finished_races());
    assert_eq!(homepage.yesterday_races(), homepage.yesterday_races());
}

#[test]
fn report_aggregates_all_extractors() {
    raceday_logging::initialize_for_tests();

    let homepage = page(&format!(
        "{LIVE_LIST}{NEXT_TO_FINISH_TABLE}{RESULTS_SECTIONS}"
    ));
    let report = homepage.report();
    assert_eq!(report.live_races, homepage.live_races());
    assert_eq!(report.next_to_finish, homepage.next_to_finish());
    assert_eq!(report.finished_races, homepage.finished_races());
    assert_eq!(report.yesterday_races, homepage.yesterday_races());
    assert_eq!(report.live_races.len(), 1);
    assert_eq!(report.next_to_finish.len(), 2);
}
