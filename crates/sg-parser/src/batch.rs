//! Per-file parse pass and the batch driver that merges files into a dataset.

use sg_protocol::{Dataset, DaySeries};

use crate::assemble::assemble;
use crate::error::{SarError, SarResult};
use crate::header::parse_header;
use crate::scanner::scan;
use crate::source::SarSource;
use crate::types::LogHeader;

/// Parse the full contents of one sar file.
///
/// The header line picks the kernel family; the remaining lines are scanned
/// and assembled into one day. Nothing is kept on error.
pub fn parse_lines(lines: &[String]) -> SarResult<DaySeries> {
    let (first, body) = lines
        .split_first()
        .ok_or_else(|| SarError::MalformedHeader("empty file".into()))?;
    let header = parse_header(first)?;
    parse_body(&header, body)
}

/// Scan and assemble the lines that follow an already-parsed header.
pub fn parse_body(header: &LogHeader, body: &[String]) -> SarResult<DaySeries> {
    let capture = scan(header.kernel, 2, body.iter().map(String::as_str));
    assemble(header, &capture)
}

/// Read and parse one file from `source`.
pub fn parse_file(source: &dyn SarSource, path: &str) -> SarResult<DaySeries> {
    let lines = source.read_lines(path)?;
    let day = parse_lines(&lines)?;
    tracing::info!(
        path,
        date = %day.date,
        hostname = %day.hostname,
        samples = day.sample_count(),
        restarts = day.restarts.len(),
        "sar file parsed"
    );
    Ok(day)
}

/// A file that contributed nothing to the dataset, and why.
#[derive(Debug)]
pub struct FileFailure {
    pub path: String,
    pub error: SarError,
}

/// Outcome of parsing a list of files.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub dataset: Dataset,
    pub failures: Vec<FileFailure>,
    /// Paths whose day replaced an earlier file's day with the same date.
    pub replaced: Vec<String>,
}

impl BatchReport {
    pub fn parsed_count(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_total_failure(&self) -> bool {
        self.dataset.is_empty() && !self.failures.is_empty()
    }
}

/// Parse every path in order, skipping files that fail.
///
/// A bad file never aborts the batch: its error is logged and recorded in
/// the report, and the remaining files are still parsed.
pub fn parse_batch<S: AsRef<str>>(source: &dyn SarSource, paths: &[S]) -> BatchReport {
    let mut report = BatchReport::default();

    for path in paths {
        let path = path.as_ref();
        tracing::info!(path, "processing sar file");

        match parse_file(source, path) {
            Ok(day) => {
                let date = day.date.clone();
                if report.dataset.insert(day).is_some() {
                    tracing::warn!(path, %date, "date already parsed from another file, replacing");
                    report.replaced.push(path.to_string());
                }
            }
            Err(error) => {
                tracing::warn!(path, %error, "skipping sar file");
                report.failures.push(FileFailure {
                    path: path.to_string(),
                    error,
                });
            }
        }
    }

    report
}
