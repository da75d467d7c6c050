//! Test-only crate: see `tests/` for the cross-crate suites.
