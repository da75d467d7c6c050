//! E2E tests for merging several daily sar files into one dataset:
//! date ordering, day-boundary gaps, range expansion and mixed kernel families.

mod helpers;

use chrono::NaiveDate;

use helpers::{Flavor, TestHarness};
use sg_parser::{expand_range, parse_batch};
use sg_protocol::{Category, Metric};

/// Three consecutive RHEL 7 days merge in date order with one segment per day.
#[test]
fn e2e_three_days_merge_in_order() {
    let mut h = TestHarness::new();
    h.add_day(Flavor::Rhel7, "web01", 6)
        .add_day(Flavor::Rhel7, "web01", 4)
        .add_day(Flavor::Rhel7, "web01", 5);

    let report = h.parse();
    assert!(report.failures.is_empty());
    assert_eq!(report.dataset.dates(), vec!["21-03-04", "21-03-05", "21-03-06"]);
    assert_eq!(
        report.dataset.label().as_deref(),
        Some("web01__21-03-04_to_21-03-06")
    );

    let segments = report.dataset.segments(Metric::CpuUser);
    assert_eq!(segments.len(), 3);
    for (segment, day) in segments.iter().zip([4, 5, 6]) {
        assert_eq!(segment.len(), 2);
        let expected = NaiveDate::from_ymd_opt(2021, 3, day)
            .unwrap()
            .and_hms_opt(0, 10, 1)
            .unwrap();
        assert_eq!(segment[0].timestamp, expected);
    }

    let flat = report.dataset.flatten(Metric::CpuUser);
    assert_eq!(flat.len(), 6);
    assert!(flat.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}

/// Parsing the same files in any order yields the same dataset.
#[test]
fn e2e_input_order_does_not_matter() {
    let mut forward = TestHarness::new();
    forward
        .add_day(Flavor::Rhel6, "db02", 1)
        .add_day(Flavor::Rhel6, "db02", 2)
        .add_day(Flavor::Rhel6, "db02", 3);

    let mut reversed_paths = forward.paths.clone();
    reversed_paths.reverse();

    let a = forward.parse();
    let b = parse_batch(&forward.source, &reversed_paths);
    assert_eq!(a.dataset, b.dataset);
}

/// Re-parsing the same archive is deterministic.
#[test]
fn e2e_parse_is_idempotent() {
    let mut h = TestHarness::new();
    h.add_day(Flavor::Rhel5, "legacy01", 10)
        .add_day(Flavor::Rhel7, "legacy01", 11);
    assert_eq!(h.parse().dataset, h.parse().dataset);
}

/// A range crossing the month end expands through sar31 and back to sar01.
#[test]
fn e2e_range_wraps_month_end() {
    let mut h = TestHarness::new();
    h.add_dated(Flavor::Rhel7, "web01", 30, 3)
        .add_dated(Flavor::Rhel7, "web01", 31, 3)
        .add_dated(Flavor::Rhel7, "web01", 1, 4);

    let paths = expand_range(&helpers::sar_path(30), &helpers::sar_path(1)).unwrap();
    assert_eq!(paths, h.paths);

    let report = parse_batch(&h.source, &paths);
    assert_eq!(report.dataset.dates(), vec!["21-03-30", "21-03-31", "21-04-01"]);
    assert_eq!(report.dataset.segments(Metric::MemFree).len(), 3);
}

/// A range over a gap in the archive parses what exists and records the rest.
#[test]
fn e2e_range_with_missing_day() {
    let mut h = TestHarness::new();
    h.add_day(Flavor::Rhel7, "web01", 7)
        .add_day(Flavor::Rhel7, "web01", 9);

    let paths = expand_range(&helpers::sar_path(7), &helpers::sar_path(9)).unwrap();
    let report = parse_batch(&h.source, &paths);
    assert_eq!(report.parsed_count(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, helpers::sar_path(8));
    assert_eq!(report.dataset.segments(Metric::LoadAvg1).len(), 2);
}

/// One day from each supported kernel family merges into a complete dataset.
#[test]
fn e2e_mixed_kernel_families() {
    let mut h = TestHarness::new();
    h.add_day(Flavor::Rhel5, "mixed01", 4)
        .add_day(Flavor::Rhel6, "mixed01", 5)
        .add_day(Flavor::Rhel7, "mixed01", 6);

    let report = h.parse();
    assert!(report.failures.is_empty());
    assert_eq!(report.parsed_count(), 3);

    for metric in Metric::ALL {
        let segments = report.dataset.segments(metric);
        assert_eq!(segments.len(), 3, "{metric} should appear on every day");
        assert!(segments.iter().all(|s| s.len() == 2), "{metric}");
    }

    let rhel5 = report.dataset.get("21-03-04").unwrap();
    assert_eq!(rhel5.cpu_count, "");
    assert_eq!(rhel5.metrics_in(Category::Swap).len(), 2);

    let rhel6 = report.dataset.get("21-03-05").unwrap();
    assert_eq!(rhel6.samples(Metric::CpuIdle)[1].value, 90.10);

    // Header identity comes from the latest day.
    assert_eq!(report.dataset.cpu_count(), "2 CPU");
}

/// Restart markers survive the merge with their full timestamp.
#[test]
fn e2e_restarts_collected_across_days() {
    let mut h = TestHarness::new();
    h.add_day(Flavor::Rhel6, "db02", 5)
        .add_day(Flavor::Rhel7, "db02", 6)
        .add_day(Flavor::Rhel6, "db02", 7);

    let restarts = h.parse().dataset.restarts();
    let times: Vec<String> = restarts.iter().map(|t| t.to_string()).collect();
    assert_eq!(times, vec!["2021-03-05 00:40:01", "2021-03-07 00:40:01"]);
}

/// A duplicate date keeps the later file and is reported.
#[test]
fn e2e_duplicate_date_last_file_wins() {
    let mut h = TestHarness::new();
    h.add_day(Flavor::Rhel7, "web01", 4);
    h.add_raw(
        "/archive/sar04",
        &sg_parser::mock::rhel6_log("web01-restored", "2021-03-04"),
    );

    let report = h.parse();
    assert_eq!(report.parsed_count(), 1);
    assert_eq!(report.replaced, vec!["/archive/sar04"]);
    assert_eq!(report.dataset.hostname(), "web01-restored");
    assert_eq!(report.dataset.restarts().len(), 1);
}
