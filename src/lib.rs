//! Schema Profiler - infer record schemas from tab-delimited data
//!
//! Provides:
//! - Column profiling (distinct values, datatypes, enum detection)
//! - TSV import and source format detection
//! - Input file pre-flight checks
//! - Per-column value reports
//! - Schema document export for record-class renderers

pub mod export;
pub mod import;
pub mod inference;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use export::{ExportError, ExportFormat, ExportResult, SchemaDocument, SchemaExporter};
pub use import::{ImportError, SourceFormat, TsvReader};
pub use inference::{
    ColumnProfile, ColumnProfiler, Datatype, EnumLookup, ProfileReport, ProfilerConfig,
    ProfilerError, SchemaLookup,
};
pub use report::{ReportError, ReportMetadata};
pub use validation::{InfileError, check_infile_status};
