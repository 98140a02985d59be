//! Input file status checks
//!
//! Every problem with a file is collected before failing so the user sees all
//! of them at once.

use std::fmt;
use std::path::{Path, PathBuf};

/// A single problem found with an input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfileProblem {
    /// No path was given
    NotDefined,
    /// Nothing exists at the path
    DoesNotExist,
    /// The path exists but is not a regular file
    NotRegularFile,
    /// The file is zero bytes long
    NoContent,
    /// The file name does not end with the required extension
    WrongExtension(String),
    /// File metadata could not be read
    Unreadable(String),
}

impl fmt::Display for InfileProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfileProblem::NotDefined => f.write_str("is not defined"),
            InfileProblem::DoesNotExist => f.write_str("does not exist"),
            InfileProblem::NotRegularFile => f.write_str("is not a regular file"),
            InfileProblem::NoContent => f.write_str("has no content"),
            InfileProblem::WrongExtension(ext) => {
                write!(f, "does not have filename extension '{ext}'")
            }
            InfileProblem::Unreadable(reason) => write!(f, "could not be inspected: {reason}"),
        }
    }
}

/// Error returned when an input file fails its status checks
#[derive(Debug, Clone, thiserror::Error)]
#[error("Detected problems with input file '{}': {}", .path.display(), join_problems(.problems))]
pub struct InfileError {
    pub path: PathBuf,
    pub problems: Vec<InfileProblem>,
}

fn join_problems(problems: &[InfileProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check that `path` names an existing, non-empty regular file, optionally
/// with the given extension (compared against the end of the file name).
pub fn check_infile_status(path: &Path, extension: Option<&str>) -> Result<(), InfileError> {
    let problems = infile_problems(path, extension);
    if problems.is_empty() {
        return Ok(());
    }

    for problem in &problems {
        tracing::error!(path = %path.display(), "'{}' {}", path.display(), problem);
    }
    Err(InfileError {
        path: path.to_path_buf(),
        problems,
    })
}

/// All problems with `path`; empty when the file passes
pub fn infile_problems(path: &Path, extension: Option<&str>) -> Vec<InfileProblem> {
    let mut problems = Vec::new();

    if path.as_os_str().is_empty() {
        problems.push(InfileProblem::NotDefined);
        return problems;
    }

    if !path.exists() {
        problems.push(InfileProblem::DoesNotExist);
        return problems;
    }

    match std::fs::metadata(path) {
        Ok(metadata) => {
            if !metadata.is_file() {
                problems.push(InfileProblem::NotRegularFile);
            }
            if metadata.len() == 0 {
                problems.push(InfileProblem::NoContent);
            }
        }
        Err(e) => problems.push(InfileProblem::Unreadable(e.to_string())),
    }

    if let Some(ext) = extension
        && !path.to_string_lossy().ends_with(ext)
    {
        problems.push(InfileProblem::WrongExtension(ext.to_string()));
    }

    problems
}
