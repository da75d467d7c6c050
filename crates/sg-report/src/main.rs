//! sg-report: parses a batch of sar logs and writes the JSON hand-off.
//!
//! Usage: `sg-report [config.toml]` (defaults to `sargraph.toml`).

use tracing_subscriber::EnvFilter;

use sg_parser::FileSarSource;
use sg_report::config::ReportConfig;
use sg_report::report;

fn main() -> anyhow::Result<()> {
    // stdout carries the hand-off document when no output path is set
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "sg-report starting");

    // ── Load config ─────────────────────────────────────────────
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sargraph.toml".to_string());

    let config = ReportConfig::from_file(&config_path)?;
    tracing::info!(
        path = %config_path,
        files = config.files.len(),
        has_range = config.range.is_some(),
        "config loaded"
    );

    // ── Parse and hand off ──────────────────────────────────────
    let doc = report::run(&config, &FileSarSource)?;
    doc.log_summary();
    doc.write(config.output.as_deref())?;

    tracing::info!(label = ?doc.label, "sg-report finished");
    Ok(())
}
