//! CLI error type

use std::path::PathBuf;

use schema_profiler::{ExportError, ImportError, InfileError, ProfilerError, ReportError};

/// Errors surfaced by CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Infile(#[from] InfileError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Profiler(#[from] ProfilerError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Failed to create output directory '{}': {reason}", .path.display())]
    OutputDir { path: PathBuf, reason: String },
}
