//! `pantry-report`: offline pantry report.
//!
//! Reads a JSON snapshot of pantry items plus the current ambient
//! conditions, estimates every item and renders a report with urgency and
//! insights. The binary in `main.rs` wires this to env config and stdout.

pub mod config;
pub mod report;
pub mod snapshot;

pub use config::ReportConfig;
pub use report::{ItemReport, Report, build_report};
pub use snapshot::{Snapshot, SnapshotItem};
