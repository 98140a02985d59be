//! Provenance stamped onto every generated artifact

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp layout used in artifact headers and default directory names
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H%M%S";

/// Who produced an artifact, when, and from what
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Executable that produced the artifact
    pub method_created: String,
    pub date_created: String,
    /// Invoking user, empty when unknown
    pub created_by: String,
    pub infile: PathBuf,
    pub logfile: Option<PathBuf>,
}

impl ReportMetadata {
    /// Capture the current process, time and user
    pub fn capture(infile: &Path, logfile: Option<&Path>) -> Self {
        let method_created = std::env::current_exe()
            .map(|exe| exe.display().to_string())
            .unwrap_or_else(|_| env!("CARGO_PKG_NAME").to_string());

        Self {
            method_created,
            date_created: format_timestamp(&Local::now()),
            created_by: std::env::var("USER").unwrap_or_default(),
            infile: infile.to_path_buf(),
            logfile: logfile.map(Path::to_path_buf),
        }
    }

    /// `## key: value` header lines, newline-terminated
    pub fn header_lines(&self) -> String {
        let logfile = self
            .logfile
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "None".to_string());

        format!(
            "## method-created: {}\n\
             ## date-created: {}\n\
             ## created-by: {}\n\
             ## infile: {}\n\
             ## logfile: {}\n",
            self.method_created,
            self.date_created,
            self.created_by,
            self.infile.display(),
            logfile,
        )
    }
}

pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> ReportMetadata {
        ReportMetadata {
            method_created: "/usr/bin/schema-profiler".into(),
            date_created: "2024-03-05-140709".into(),
            created_by: "analyst".into(),
            infile: PathBuf::from("/data/samples.tsv"),
            logfile: Some(PathBuf::from("/tmp/out/schema-profiler.log")),
        }
    }

    #[test]
    fn test_header_lines() {
        let header = fixed().header_lines();
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(
            lines,
            vec![
                "## method-created: /usr/bin/schema-profiler",
                "## date-created: 2024-03-05-140709",
                "## created-by: analyst",
                "## infile: /data/samples.tsv",
                "## logfile: /tmp/out/schema-profiler.log",
            ]
        );
    }

    #[test]
    fn test_missing_logfile() {
        let mut meta = fixed();
        meta.logfile = None;
        assert!(meta.header_lines().ends_with("## logfile: None\n"));
    }

    #[test]
    fn test_timestamp_format() {
        let time = Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        assert_eq!(format_timestamp(&time), "2024-03-05-140709");
    }

    #[test]
    fn test_capture() {
        let meta = ReportMetadata::capture(Path::new("in.tsv"), None);
        assert_eq!(meta.infile, PathBuf::from("in.tsv"));
        assert_eq!(meta.date_created.len(), "2024-03-05-140709".len());
    }
}
