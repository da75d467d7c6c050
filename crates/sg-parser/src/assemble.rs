//! Turns captured rows into numeric series for one day.

use sg_protocol::{Category, DaySeries, Metric, Sample};

use crate::error::{SarError, SarResult};
use crate::normalize;
use crate::scanner::{Capture, CapturedRow};
use crate::types::{KernelFamily, LogHeader};

/// Column names for `metric`, preferred spelling for `kernel` first.
pub fn column_names(metric: Metric, kernel: KernelFamily) -> &'static [&'static str] {
    let legacy = kernel == KernelFamily::Rhel5;
    match metric {
        Metric::CpuUser if legacy => &["%user", "%usr"],
        Metric::CpuUser => &["%usr", "%user"],
        Metric::CpuNice => &["%nice"],
        Metric::CpuSystem if legacy => &["%system", "%sys"],
        Metric::CpuSystem => &["%sys", "%system"],
        Metric::CpuIowait => &["%iowait"],
        Metric::CpuIdle => &["%idle"],
        Metric::ProcessesPerSec => &["proc/s"],
        Metric::ContextSwitchesPerSec => &["cswch/s"],
        Metric::RunQueue => &["runq-sz"],
        Metric::ProcessList => &["plist-sz"],
        Metric::LoadAvg1 => &["ldavg-1"],
        Metric::LoadAvg5 => &["ldavg-5"],
        Metric::LoadAvg15 => &["ldavg-15"],
        Metric::MemFree => &["kbmemfree"],
        Metric::MemUsed => &["kbmemused"],
        Metric::MemCached => &["kbcached"],
        Metric::SwapFree => &["kbswpfree"],
        Metric::SwapUsed => &["kbswpused"],
        Metric::PageSwapIn => &["pswpin/s"],
        Metric::PageSwapOut => &["pswpout/s"],
        Metric::DentryUnused => &["dentunusd"],
        Metric::FileHandles if legacy => &["file-sz", "file-nr"],
        Metric::FileHandles => &["file-nr", "file-sz"],
        Metric::Inodes if legacy => &["inode-sz", "inode-nr"],
        Metric::Inodes => &["inode-nr", "inode-sz"],
        Metric::TcpSockets => &["tcpsck"],
        Metric::UdpSockets => &["udpsck"],
        Metric::BlocksRead => &["bread/s"],
        Metric::BlocksWritten => &["bwrtn/s"],
    }
}

/// Which captured category a metric is read from.
///
/// RHEL 5 prints swap usage inside the memory section.
pub fn source_category(metric: Metric, kernel: KernelFamily) -> Category {
    match metric.category() {
        Category::Swap if kernel.swap_in_memory_section() => Category::Memory,
        category => category,
    }
}

/// Build the day series for one file from its header and captured sections.
///
/// Any unparseable time or value fails the whole file.
pub fn assemble(header: &LogHeader, capture: &Capture) -> SarResult<DaySeries> {
    let mut day = DaySeries::new(&header.date, &header.hostname, &header.cpu_count);

    for metric in Metric::ALL {
        let source = source_category(metric, header.kernel);
        let names = column_names(metric, header.kernel);

        for pass in capture.passes_for(source) {
            let Some(pos) = pass.columns.resolve(names) else {
                tracing::debug!(
                    %metric,
                    header_line = pass.header_line,
                    "column absent from section header"
                );
                continue;
            };
            for row in &pass.rows {
                let timestamp = row_timestamp(&header.date, row)?;
                let value = row_value(row, pos, names[0])?;
                day.push(metric, Sample::new(timestamp, value));
            }
        }
    }

    for marker in &capture.restarts {
        let ts = normalize::timestamp(&header.date, &marker.time).ok_or_else(|| {
            SarError::row(marker.line, format!("bad restart time: {}", marker.time))
        })?;
        day.restarts.push(ts);
    }

    Ok(day)
}

fn row_timestamp(date: &str, row: &CapturedRow) -> SarResult<chrono::NaiveDateTime> {
    let time = row.tokens.first().map(String::as_str).unwrap_or_default();
    normalize::timestamp(date, time)
        .ok_or_else(|| SarError::row(row.line, format!("bad time of day: {time:?}")))
}

fn row_value(row: &CapturedRow, pos: usize, column: &str) -> SarResult<f64> {
    let field = row
        .tokens
        .get(pos)
        .ok_or_else(|| SarError::row(row.line, format!("missing {column} column")))?;
    field
        .parse::<f64>()
        .map_err(|_| SarError::row(row.line, format!("bad {column} value: {field:?}")))
}
