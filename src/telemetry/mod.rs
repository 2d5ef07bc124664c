//! Error reporting
//!
//! Captured errors are written to one or more sinks:
//! - File (JSONL) - appends under `<path>/errors/`
//! - Stdout - prints a one-line summary
//! - HTTP - POSTs the report to a configured endpoint

pub mod reporter;

pub use reporter::{ErrorReporter, TelemetryReporter};
