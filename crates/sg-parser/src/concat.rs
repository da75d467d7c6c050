//! Expands a `sarNN` .. `sarMM` pair into the day-of-month files between them.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{SarError, SarResult};

static RE_SAR_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)sar([0-9]+)$").unwrap());

/// Highest day-of-month suffix before a range wraps back to 1.
pub const LAST_DAY: u32 = 31;

fn split(path: &str) -> SarResult<(&str, u32)> {
    let caps = RE_SAR_PATH
        .captures(path)
        .ok_or_else(|| SarError::InvalidRange(format!("not a sarNN path: {path}")))?;
    let prefix = caps.get(1).map_or("", |m| m.as_str());
    let day = caps[2]
        .parse::<u32>()
        .map_err(|_| SarError::InvalidRange(format!("bad day suffix: {path}")))?;
    if day == 0 || day > LAST_DAY {
        return Err(SarError::InvalidRange(format!("day out of range: {path}")));
    }
    Ok((prefix, day))
}

/// Every `sarNN` path from `from` to `to` inclusive.
///
/// When `to` is below `from` the range crosses a month end: it runs up to
/// `sar31` and continues from `sar01`.
pub fn expand_range(from: &str, to: &str) -> SarResult<Vec<String>> {
    let (from_prefix, start) = split(from)?;
    let (to_prefix, end) = split(to)?;
    if from_prefix != to_prefix {
        return Err(SarError::InvalidRange(format!(
            "different directories: {from_prefix} vs {to_prefix}"
        )));
    }

    let days: Vec<u32> = if start <= end {
        (start..=end).collect()
    } else {
        (start..=LAST_DAY).chain(1..=end).collect()
    };

    Ok(days
        .into_iter()
        .map(|d| format!("{from_prefix}sar{d:02}"))
        .collect())
}
