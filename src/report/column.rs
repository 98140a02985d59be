//! Per-column value report

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use super::ReportError;
use super::metadata::ReportMetadata;
use crate::inference::{ColumnProfile, derive_report_basename};

/// Report file path for a column: `<outdir>/<position>_<basename>.tsv`
pub fn column_report_path(outdir: &Path, profile: &ColumnProfile) -> PathBuf {
    let basename = derive_report_basename(&profile.column.name);
    outdir.join(format!("{}_{}.tsv", profile.column.position, basename))
}

/// Render the report text for one column
pub fn render_column_report(profile: &ColumnProfile, metadata: &ReportMetadata) -> String {
    let mut out = metadata.header_lines();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Column name: '{}'", profile.column.name);
    let _ = writeln!(out, "Column position: '{}'", profile.column.position);
    let _ = writeln!(out, "Number of data rows: '{}'", profile.row_count);
    let _ = writeln!(
        out,
        "Here are the unique '{}' values:",
        profile.distinct_count()
    );

    for (value, count) in profile.frequencies.iter() {
        let _ = writeln!(
            out,
            "value: '{}'; count: {}; percentage: {:.2}",
            value,
            count,
            profile.percentage(count)
        );
    }

    out
}

/// Write the report for one column into `outdir`, returning its path
pub fn write_column_report(
    outdir: &Path,
    profile: &ColumnProfile,
    metadata: &ReportMetadata,
) -> Result<PathBuf, ReportError> {
    let path = column_report_path(outdir, profile);
    let content = render_column_report(profile, metadata);

    std::fs::write(&path, content).map_err(|e| ReportError::Write {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    tracing::info!(path = %path.display(), "Wrote column report file");
    Ok(path)
}
