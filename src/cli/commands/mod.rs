//! CLI command implementations

pub mod headers;
pub mod profile;
