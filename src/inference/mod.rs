//! Column profiling and schema inference for tab-delimited data
//!
//! This module reads a header row and the data rows below it, then derives
//! everything a record-class generator needs to know about each column.
//!
//! ## Features
//!
//! - **Name derivation** - Attribute, class and enum member identifiers from raw text
//! - **Value statistics** - Distinct values and occurrence counts in first-seen order
//! - **Type inference** - `int`, `float` or `str` per column
//! - **Enum detection** - Columns with few distinct values become enumerated types
//!
//! ## Example
//!
//! ```rust
//! use schema_profiler::inference::{ColumnProfiler, Datatype, ProfilerConfig};
//!
//! let data = "Color\tCount\nRed\t1\nBlue\t2\n";
//! let config = ProfilerConfig::builder().max_equality_values(5).build();
//! let mut profiler = ColumnProfiler::with_config(config);
//!
//! let report = profiler.profile_reader(data.as_bytes(), "colors.tsv")?;
//! assert_eq!(report.lookup.get("count").unwrap().datatype, Datatype::Int);
//! assert_eq!(report.enum_lookup.member_value("Color", "RED"), Some("Red"));
//! # Ok::<(), schema_profiler::inference::ProfilerError>(())
//! ```

mod config;
mod datatype;
mod error;
mod naming;
mod profiler;
mod types;

pub use config::{DEFAULT_MAX_EQUALITY_VALUES, ProfilerConfig, ProfilerConfigBuilder};
pub use datatype::{Datatype, DatatypeVerdict, determine_datatype};
pub use error::ProfilerError;
pub use naming::{
    derive_attribute_name, derive_class_name, derive_enum_member_name, derive_report_basename,
};
pub use profiler::ColumnProfiler;
pub use types::{
    AttributeEntry, Column, ColumnProfile, EnumLookup, ProfileReport, SchemaLookup,
    ValueFrequency,
};
