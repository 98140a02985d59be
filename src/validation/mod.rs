//! Validation functionality
//!
//! Provides pre-flight checks for:
//! - Input files (existence, type, content, extension)

pub mod infile;

pub use infile::{InfileError, InfileProblem, check_infile_status, infile_problems};
