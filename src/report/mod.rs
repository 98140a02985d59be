//! Plain-text column reports
//!
//! One file per profiled column listing every distinct value with its count
//! and share of the data rows, preceded by provenance header lines.

pub mod column;
pub mod metadata;

use std::path::{Path, PathBuf};

pub use column::{column_report_path, render_column_report, write_column_report};
pub use metadata::{ReportMetadata, TIMESTAMP_FORMAT, format_timestamp};

use crate::inference::ProfileReport;

/// Error during report writing
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to write report '{}': {reason}", .path.display())]
    Write { path: PathBuf, reason: String },
}

/// Write a report for every column of `report` into `outdir`
pub fn write_column_reports(
    outdir: &Path,
    report: &ProfileReport,
    metadata: &ReportMetadata,
) -> Result<Vec<PathBuf>, ReportError> {
    report
        .columns
        .iter()
        .map(|profile| write_column_report(outdir, profile, metadata))
        .collect()
}
