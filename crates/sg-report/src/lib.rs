//! Library crate behind the `sg-report` binary.
//!
//! Exposes config loading and the hand-off document so `sg-e2e-tests` can
//! drive a full batch against a mock source.

pub mod config;
pub mod report;
