//! Schema document exporter
//!
//! Bundles the schema lookup and enum lookup with provenance so an external
//! renderer can produce the record class, its field validators and the enum
//! catalog.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::export::{ExportError, ExportFormat, ExportResult};
use crate::inference::{EnumLookup, ProfileReport, SchemaLookup};
use crate::report::ReportMetadata;

/// Base name of the exported document inside the output directory
pub const SCHEMA_DOCUMENT_STEM: &str = "schema";

/// Everything the renderer needs for one input file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub metadata: ReportMetadata,
    /// Label of the file family, used in generated docstrings
    pub file_type: Option<String>,
    pub lookup: SchemaLookup,
    pub enum_lookup: EnumLookup,
}

impl SchemaDocument {
    pub fn new(report: &ProfileReport, metadata: ReportMetadata, file_type: Option<&str>) -> Self {
        Self {
            metadata,
            file_type: file_type.map(str::to_string),
            lookup: report.lookup.clone(),
            enum_lookup: report.enum_lookup.clone(),
        }
    }
}

/// Exporter for schema documents.
pub struct SchemaExporter;

impl SchemaExporter {
    /// Serialize a document in the given format.
    pub fn export(
        document: &SchemaDocument,
        format: ExportFormat,
    ) -> Result<ExportResult, ExportError> {
        let content = match format {
            ExportFormat::Json => serde_json::to_string_pretty(document)?,
            ExportFormat::Yaml => serde_yaml::to_string(document)?,
        };

        Ok(ExportResult {
            content,
            format: format.to_string(),
        })
    }

    /// Path the document is written to inside `outdir`
    pub fn output_path(outdir: &Path, format: ExportFormat) -> PathBuf {
        outdir.join(format!("{}.{}", SCHEMA_DOCUMENT_STEM, format.extension()))
    }

    /// Serialize and write a document into `outdir`, returning its path
    pub fn write(
        document: &SchemaDocument,
        outdir: &Path,
        format: ExportFormat,
    ) -> Result<PathBuf, ExportError> {
        let result = Self::export(document, format)?;
        let path = Self::output_path(outdir, format);

        std::fs::write(&path, format!("{}\n", result.content.trim_end()))?;
        tracing::info!(path = %path.display(), format = %format, "Wrote schema document");
        Ok(path)
    }
}
