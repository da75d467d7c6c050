//! Parser for sar (System Activity Reporter) text logs.
//!
//! Reads the header line to detect the kernel family, scans the body with a
//! section state machine, and assembles the captured rows into one
//! [`sg_protocol::DaySeries`] per file. [`batch::parse_batch`] merges many
//! files into a date-sorted [`sg_protocol::Dataset`], skipping bad files.

pub mod assemble;
pub mod batch;
pub mod columns;
pub mod concat;
pub mod error;
pub mod header;
pub mod mock;
pub mod normalize;
pub mod scanner;
pub mod source;
pub mod types;

// Re-export key types for convenience
pub use batch::{BatchReport, FileFailure, parse_batch, parse_file, parse_lines};
pub use concat::expand_range;
pub use error::{SarError, SarResult};
pub use header::parse_header;
pub use mock::MockSarSource;
pub use source::{FileSarSource, SarSource};
pub use types::{KernelFamily, LogHeader};
