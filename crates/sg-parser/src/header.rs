//! First-line detector: hostname, CPU count, kernel family and log date.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{SarError, SarResult};
use crate::normalize;
use crate::types::{KernelFamily, LogHeader};

// Linux 3.10.0-957.el7.x86_64 (web01) 	03/04/2021 	_x86_64_	(4 CPU)
static RE_HOSTNAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((.*?)\)").unwrap());

static RE_CPU_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([0-9]+ CPU)\)$").unwrap());

// First whitespace-preceded d-d-d or d/d/d token.
static RE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s([0-9]+[-/][0-9]+[-/][0-9]+)").unwrap());

/// Parse the header line of a sar file.
///
/// An unrecognized kernel is reported as `UnsupportedKernel` so the caller
/// can skip the file; a missing hostname or date is `MalformedHeader`.
pub fn parse_header(line: &str) -> SarResult<LogHeader> {
    let line = line.trim_end();

    let hostname = RE_HOSTNAME
        .captures(line)
        .map(|c| c[1].to_string())
        .ok_or_else(|| SarError::MalformedHeader(format!("no hostname in: {line}")))?;

    let kernel =
        KernelFamily::detect(line).ok_or_else(|| SarError::UnsupportedKernel(line.to_string()))?;

    let cpu_count = RE_CPU_COUNT
        .captures(line)
        .map(|c| c[1].to_string())
        .unwrap_or_default();

    let token = RE_DATE
        .captures(line)
        .map(|c| c[1].to_string())
        .ok_or_else(|| SarError::MalformedHeader(format!("no date in: {line}")))?;
    let date = normalize::date(&token)?;

    Ok(LogHeader {
        hostname,
        cpu_count,
        kernel,
        date,
    })
}
