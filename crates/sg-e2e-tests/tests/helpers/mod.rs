//! Shared test harness for E2E integration tests.
//!
//! Builds a `MockSarSource` holding a run of consecutive daily sar files so
//! the parser, batch driver and report crate can be exercised together.

#![allow(dead_code)]

use sg_parser::{BatchReport, MockSarSource, mock, parse_batch};
use sg_report::config::{RangeConfig, ReportConfig};

/// Directory the harness files live under.
pub const SA_DIR: &str = "/var/log/sa/";

/// Which sample generator a harness day uses.
#[derive(Debug, Clone, Copy)]
pub enum Flavor {
    Rhel7,
    Rhel6,
    Rhel5,
}

/// Mock sar archive plus the paths it was populated with.
pub struct TestHarness {
    pub source: MockSarSource,
    pub paths: Vec<String>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            source: MockSarSource::new(),
            paths: Vec::new(),
        }
    }

    /// Add `sarDD` for day `day` of March 2021 recorded on `host`.
    pub fn add_day(&mut self, flavor: Flavor, host: &str, day: u32) -> &mut Self {
        self.add_dated(flavor, host, day, 3)
    }

    /// Add `sarDD` for `day` of `month` 2021, header date in the flavor's format.
    pub fn add_dated(&mut self, flavor: Flavor, host: &str, day: u32, month: u32) -> &mut Self {
        let path = sar_path(day);
        let text = match flavor {
            Flavor::Rhel7 => mock::rhel7_log(host, &format!("{month:02}/{day:02}/2021")),
            Flavor::Rhel6 => mock::rhel6_log(host, &format!("2021-{month:02}-{day:02}")),
            Flavor::Rhel5 => mock::rhel5_log(host, &format!("{month:02}/{day:02}/21")),
        };
        self.source.add_text(path.clone(), &text);
        self.paths.push(path);
        self
    }

    /// Add a file with arbitrary contents.
    pub fn add_raw(&mut self, path: &str, text: &str) -> &mut Self {
        self.source.add_text(path, text);
        self.paths.push(path.to_string());
        self
    }

    /// Run the batch driver over every added path, in insertion order.
    pub fn parse(&self) -> BatchReport {
        parse_batch(&self.source, &self.paths)
    }

    /// Report config listing every added path.
    pub fn config(&self) -> ReportConfig {
        ReportConfig {
            files: self.paths.clone(),
            range: None,
            output: None,
        }
    }

    /// Report config for a `sarNN` range under `SA_DIR`.
    pub fn range_config(from: u32, to: u32) -> ReportConfig {
        ReportConfig {
            files: Vec::new(),
            range: Some(RangeConfig {
                from: sar_path(from),
                to: sar_path(to),
            }),
            output: None,
        }
    }
}

pub fn sar_path(day: u32) -> String {
    format!("{SA_DIR}sar{day:02}")
}
