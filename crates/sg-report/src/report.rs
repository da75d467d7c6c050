//! JSON hand-off document consumed by chart renderers.

use std::io::Write;

use serde::{Deserialize, Serialize};

use sg_parser::{BatchReport, SarSource};
use sg_protocol::{Category, Dataset};

use crate::config::ReportConfig;

/// A file the batch skipped, with its error rendered as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureEntry {
    pub path: String,
    pub error: String,
}

/// Everything a renderer needs: naming stem, host identity, per-day series
/// and the files that were skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoffDocument {
    /// `host__first_to_last`; None when no file parsed.
    pub label: Option<String>,
    pub hostname: String,
    pub cpu_count: String,
    #[serde(flatten)]
    pub dataset: Dataset,
    #[serde(default)]
    pub failures: Vec<FailureEntry>,
}

impl From<BatchReport> for HandoffDocument {
    fn from(report: BatchReport) -> Self {
        let failures = report
            .failures
            .into_iter()
            .map(|f| FailureEntry {
                path: f.path,
                error: f.error.to_string(),
            })
            .collect();

        Self {
            label: report.dataset.label(),
            hostname: report.dataset.hostname().to_string(),
            cpu_count: report.dataset.cpu_count().to_string(),
            dataset: report.dataset,
            failures,
        }
    }
}

impl HandoffDocument {
    /// Log one summary line per parsed day.
    pub fn log_summary(&self) {
        for day in self.dataset.days() {
            let categories: Vec<&str> = Category::ALL
                .iter()
                .filter(|c| !day.metrics_in(**c).is_empty())
                .map(|c| c.as_str())
                .collect();
            tracing::info!(
                date = %day.date,
                hostname = %day.hostname,
                samples = day.sample_count(),
                restarts = day.restarts.len(),
                categories = %categories.join(","),
                "day summary"
            );
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the document to `output`, or to stdout when None.
    pub fn write(&self, output: Option<&str>) -> anyhow::Result<()> {
        let json = self.to_json()?;
        match output {
            Some(path) => {
                std::fs::write(path, json)?;
                tracing::info!(path, "hand-off written");
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(json.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}

/// Parse every configured file from `source` and build the hand-off.
///
/// Fails only when no file at all could be parsed.
pub fn run(config: &ReportConfig, source: &dyn SarSource) -> anyhow::Result<HandoffDocument> {
    let paths = config.input_paths()?;
    tracing::info!(file_count = paths.len(), "starting sar batch");

    let report = sg_parser::parse_batch(source, &paths);
    tracing::info!(
        parsed = report.parsed_count(),
        failed = report.failures.len(),
        replaced = report.replaced.len(),
        "sar batch complete"
    );

    if report.is_total_failure() {
        anyhow::bail!("none of the {} sar files could be parsed", paths.len());
    }

    Ok(HandoffDocument::from(report))
}
