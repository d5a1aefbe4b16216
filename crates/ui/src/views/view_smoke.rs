use services::WeekFetch;
use tracker_core::model::{ProgressEntry, WeekResult};

use super::test_harness::{StubOutcome, setup_home_harness, setup_table_harness};
use crate::views::FetchState;
use crate::vm::map_week_vm;

fn entry(name: &str, steamid: &str) -> ProgressEntry {
    ProgressEntry {
        account_name: name.into(),
        steamid: steamid.into(),
        drop_farmed: false,
        case_name: None,
        additional_drop: None,
        case_value: None,
        progress_id: None,
        week_start: "2025-04-16".into(),
    }
}

fn farmed_entry(name: &str, steamid: &str) -> ProgressEntry {
    ProgressEntry {
        drop_farmed: true,
        case_name: Some("Kilowatt Case".into()),
        additional_drop: Some("sticker".into()),
        case_value: Some(12.5),
        progress_id: Some("661f0c2e9d1b".into()),
        ..entry(name, steamid)
    }
}

#[test]
fn loading_state_renders_placeholder_without_banner_or_footer() {
    let mut harness = setup_table_harness(FetchState::Loading);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Loading..."), "missing placeholder in {html}");
    assert!(!html.contains("error-banner"), "banner must stay hidden in {html}");
    assert!(!html.contains("Week Total Value"), "footer must stay hidden in {html}");
}

#[test]
fn empty_state_renders_the_no_progress_row() {
    let mut harness = setup_table_harness(FetchState::Empty);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("No progress found for this week."),
        "missing empty row in {html}"
    );
    assert!(!html.contains("error-banner"), "banner must stay hidden in {html}");
    assert!(!html.contains("Week Total Value"), "footer must stay hidden in {html}");
}

#[test]
fn error_state_shows_banner_message_and_fixed_error_row() {
    let mut harness = setup_table_harness(FetchState::Error("db down".into()));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("error-banner"), "missing banner in {html}");
    assert!(html.contains("db down"), "missing banner message in {html}");
    assert!(html.contains("Error loading data."), "missing error row in {html}");
}

#[test]
fn ready_state_renders_rows_in_order_with_footer() {
    let result = WeekResult {
        entries: vec![
            farmed_entry("zeta", "76561198000000001"),
            entry("alpha", "76561198000000002"),
        ],
        total_value: Some(12.5),
    };
    let mut harness = setup_table_harness(FetchState::Ready(map_week_vm(&result)));
    harness.rebuild();
    let html = harness.render();

    let zeta = html.find("zeta").expect("first row rendered");
    let alpha = html.find("alpha").expect("second row rendered");
    assert!(zeta < alpha, "rows out of server order in {html}");

    assert!(
        html.contains("https://steamcommunity.com/profiles/76561198000000001"),
        "missing profile link in {html}"
    );
    assert!(html.contains("Yes"), "missing farmed label in {html}");
    assert!(html.contains("Kilowatt Case"), "missing case name in {html}");
    assert!(html.contains("12.50"), "missing formatted value in {html}");
    assert!(html.contains("Week Total Value"), "missing footer in {html}");
    assert!(!html.contains("error-banner"), "banner must stay hidden in {html}");
}

#[test]
fn ready_state_without_aggregate_keeps_the_footer_hidden() {
    let result = WeekResult {
        entries: vec![entry("alpha", "76561198000000002")],
        total_value: None,
    };
    let mut harness = setup_table_harness(FetchState::Ready(map_week_vm(&result)));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("alpha"), "missing row in {html}");
    assert!(!html.contains("Week Total Value"), "footer must stay hidden in {html}");
}

#[test]
fn row_without_progress_record_has_no_edit_control() {
    let result = WeekResult {
        entries: vec![entry("alpha", "76561198000000002")],
        total_value: None,
    };
    let mut harness = setup_table_harness(FetchState::Ready(map_week_vm(&result)));
    harness.rebuild();
    let html = harness.render();

    assert!(!html.contains("btn-edit"), "unexpected edit control in {html}");
}

#[test]
fn row_with_progress_record_has_an_edit_control() {
    let result = WeekResult {
        entries: vec![farmed_entry("zeta", "76561198000000001")],
        total_value: None,
    };
    let mut harness = setup_table_harness(FetchState::Ready(map_week_vm(&result)));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("btn-edit"), "missing edit control in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_both_week_sections_and_the_panel() {
    let result = WeekResult {
        entries: vec![farmed_entry("main", "76561198000000001")],
        total_value: Some(12.5),
    };
    let mut harness = setup_home_harness(StubOutcome::Fetch(WeekFetch::Rows(result)));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Current Week"), "missing current week in {html}");
    assert!(html.contains("Last Week"), "missing last week in {html}");
    assert!(html.contains("Other Weeks"), "missing panel in {html}");
    assert!(html.contains("main"), "missing fetched row in {html}");
    // The other-week table has not been asked for anything yet.
    assert!(
        html.contains("Pick a Wednesday to load a week."),
        "missing idle placeholder in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_error_state() {
    let mut harness = setup_home_harness(StubOutcome::Fail("db down".into()));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("error-banner"), "missing banner in {html}");
    assert!(html.contains("db down"), "missing message in {html}");
    assert!(html.contains("Error loading data."), "missing error row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_empty_weeks() {
    let mut harness = setup_home_harness(StubOutcome::Fetch(WeekFetch::Empty));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("No progress found for this week."),
        "missing empty row in {html}"
    );
}
