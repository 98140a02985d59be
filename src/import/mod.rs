//! Import functionality
//!
//! Reads delimited source files for profiling:
//! - TSV (tab-separated, header row first)
//!
//! `.csv` files are recognized but not yet supported.

pub mod tsv;

use std::fmt;
use std::path::Path;

pub use tsv::{TsvReader, TsvRow};

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Support does not exist for files with extension '{0}'")]
    UnsupportedFormat(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> Self {
        ImportError::IoError(e.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        if e.is_io_error() {
            ImportError::IoError(e.to_string())
        } else {
            ImportError::ParseError(e.to_string())
        }
    }
}

/// Recognized source file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Tsv,
    Csv,
}

impl SourceFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        match extension.to_ascii_lowercase().as_str() {
            "tsv" => Ok(SourceFormat::Tsv),
            "csv" => Ok(SourceFormat::Csv),
            "" => Err(ImportError::UnsupportedFormat(String::new())),
            _ => Err(ImportError::UnsupportedFormat(format!(".{extension}"))),
        }
    }

    /// Whether the profiler can read this format
    pub fn is_supported(&self) -> bool {
        matches!(self, SourceFormat::Tsv)
    }

    /// Resolve the format of `path`, failing on anything unreadable
    pub fn require_supported(path: &Path) -> Result<Self, ImportError> {
        let format = Self::from_path(path)?;
        if !format.is_supported() {
            tracing::error!(
                path = %path.display(),
                format = %format,
                "NOT YET IMPLEMENTED - unable to process file"
            );
            return Err(ImportError::UnsupportedFormat(format!(".{format}")));
        }
        Ok(format)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Tsv => f.write_str("tsv"),
            SourceFormat::Csv => f.write_str("csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(
            SourceFormat::from_path(Path::new("data/samples.tsv")).unwrap(),
            SourceFormat::Tsv
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("SAMPLES.TSV")).unwrap(),
            SourceFormat::Tsv
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("samples.csv")).unwrap(),
            SourceFormat::Csv
        );
    }

    #[test]
    fn test_unsupported_extensions() {
        assert!(matches!(
            SourceFormat::from_path(Path::new("samples.xlsx")),
            Err(ImportError::UnsupportedFormat(ext)) if ext == ".xlsx"
        ));
        assert!(matches!(
            SourceFormat::from_path(Path::new("samples")),
            Err(ImportError::UnsupportedFormat(ext)) if ext.is_empty()
        ));
        assert!(matches!(
            SourceFormat::require_supported(Path::new("samples.csv")),
            Err(ImportError::UnsupportedFormat(ext)) if ext == ".csv"
        ));
        assert!(SourceFormat::require_supported(Path::new("samples.tsv")).is_ok());
    }
}
