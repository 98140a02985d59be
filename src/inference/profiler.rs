//! Column profiling engine

use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;

use super::config::ProfilerConfig;
use super::datatype::{Datatype, determine_datatype};
use super::error::ProfilerError;
use super::naming::{derive_attribute_name, derive_enum_member_name};
use super::types::{
    AttributeEntry, Column, ColumnProfile, EnumLookup, ProfileReport, SchemaLookup,
    ValueFrequency,
};
use crate::import::TsvReader;

/// Column profiling engine
///
/// Reads a header row, counts distinct values per column in a single scan,
/// infers each column's datatype and collects enum catalogs for columns with
/// few distinct values.
#[derive(Debug, Clone, Default)]
pub struct ColumnProfiler {
    config: ProfilerConfig,
    /// Column name -> attribute name, filled by the header parser
    attribute_names: IndexMap<String, String>,
}

impl ColumnProfiler {
    /// Create a profiler with default configuration
    pub fn new() -> Self {
        Self::with_config(ProfilerConfig::default())
    }

    /// Create a profiler with custom configuration
    pub fn with_config(config: ProfilerConfig) -> Self {
        Self {
            config,
            attribute_names: IndexMap::new(),
        }
    }

    /// Attribute name derived for `column_name` by the last header parse
    pub fn attribute_name(&self, column_name: &str) -> Option<&str> {
        self.attribute_names.get(column_name).map(String::as_str)
    }

    /// Parse the header row into column name -> 0-based position.
    ///
    /// A repeated header name keeps its first slot but takes the later
    /// position.
    pub fn parse_header<R: Read>(
        &mut self,
        reader: &mut TsvReader<R>,
        source: &str,
    ) -> Result<IndexMap<String, usize>, ProfilerError> {
        let Some(fields) = reader.read_header()? else {
            tracing::error!(source, "Input has no header row");
            return Err(ProfilerError::MissingHeader(source.to_string()));
        };

        let mut lookup = IndexMap::new();
        self.attribute_names.clear();

        for (position, field) in fields.into_iter().enumerate() {
            let attribute_name = derive_attribute_name(&field);
            self.attribute_names.insert(field.clone(), attribute_name);
            lookup.insert(field, position);
        }

        tracing::info!(source, columns = lookup.len(), "Processed header row");
        Ok(lookup)
    }

    /// Parse the header and return the derived columns in header order
    pub fn read_columns<R: Read>(
        &mut self,
        reader: &mut TsvReader<R>,
        source: &str,
    ) -> Result<Vec<Column>, ProfilerError> {
        let header = self.parse_header(reader, source)?;
        Ok(header
            .into_iter()
            .map(|(name, position)| Column::new(name, position))
            .collect())
    }

    /// Profile a TSV file on disk
    pub fn profile_path(&mut self, path: &Path) -> Result<ProfileReport, ProfilerError> {
        let source = path.display().to_string();
        tracing::info!(source = %source, "Profiling columns");
        let mut reader = TsvReader::from_path(path)?;
        self.profile(&mut reader, &source)
    }

    /// Profile TSV text from any reader
    pub fn profile_reader<R: Read>(
        &mut self,
        reader: R,
        source: &str,
    ) -> Result<ProfileReport, ProfilerError> {
        let mut reader = TsvReader::new(reader);
        self.profile(&mut reader, source)
    }

    fn profile<R: Read>(
        &mut self,
        reader: &mut TsvReader<R>,
        source: &str,
    ) -> Result<ProfileReport, ProfilerError> {
        let columns = self.read_columns(reader, source)?;
        let (frequencies, data_rows) = scan_columns(reader, &columns)?;
        tracing::info!(source, data_rows, "Scanned data rows");
        self.build_report(columns, frequencies, data_rows)
    }

    fn build_report(
        &self,
        columns: Vec<Column>,
        frequencies: Vec<ValueFrequency>,
        data_rows: usize,
    ) -> Result<ProfileReport, ProfilerError> {
        let mut lookup = SchemaLookup::new();
        let mut enum_lookup = EnumLookup::new();
        let mut profiles = Vec::with_capacity(columns.len());

        for (column, frequencies) in columns.into_iter().zip(frequencies) {
            tracing::info!(
                column = %column.name,
                attribute = %column.attribute_name,
                position = column.position,
                "Processing column"
            );

            let inserted = lookup.insert_if_absent(
                &column.attribute_name,
                AttributeEntry {
                    datatype: Datatype::Str,
                    column_name: column.name.clone(),
                    column_position: column.position + 1,
                    class_name: column.class_name.clone(),
                    uniq_values: None,
                },
            );
            if !inserted {
                tracing::warn!(
                    column = %column.name,
                    attribute = %column.attribute_name,
                    "Attribute name already claimed by an earlier column; its entry will be updated"
                );
            }

            let values: Vec<&str> = frequencies.values().collect();
            let datatype = determine_datatype(&values, &column.name)?.into_datatype();
            let is_enum = self.config.is_enum_eligible(frequencies.distinct_count());

            let mut enum_members = Vec::new();
            if let Some(entry) = lookup.get_mut(&column.attribute_name) {
                entry.datatype = datatype;

                if is_enum {
                    tracing::info!(
                        attribute = %column.attribute_name,
                        column = %column.name,
                        distinct = frequencies.distinct_count(),
                        "Column is enum-eligible"
                    );
                    enum_members =
                        load_enum_members(&frequencies, &mut enum_lookup, &entry.class_name);
                    entry.uniq_values = Some(values.iter().map(|v| v.to_string()).collect());
                }
            }

            profiles.push(ColumnProfile {
                row_count: frequencies.total(),
                column,
                frequencies,
                datatype,
                is_enum,
                enum_members,
            });
        }

        Ok(ProfileReport {
            columns: profiles,
            lookup,
            enum_lookup,
            data_rows,
        })
    }
}

/// Count values for every column in one pass over the data rows
fn scan_columns<R: Read>(
    reader: &mut TsvReader<R>,
    columns: &[Column],
) -> Result<(Vec<ValueFrequency>, usize), ProfilerError> {
    let mut frequencies = vec![ValueFrequency::new(); columns.len()];
    let mut data_rows = 0;

    for row in reader.rows() {
        let row = row?;
        data_rows += 1;

        for (column, freq) in columns.iter().zip(frequencies.iter_mut()) {
            let value = row.get(column.position).ok_or_else(|| {
                tracing::error!(
                    line = row.line,
                    column = %column.name,
                    "Row is shorter than the header"
                );
                ProfilerError::MissingField {
                    line: row.line,
                    found: row.len(),
                    column: column.name.clone(),
                    position: column.position,
                }
            })?;
            freq.record(value);
        }
    }

    Ok((frequencies, data_rows))
}

/// Add a member per distinct value to the class's enum namespace
fn load_enum_members(
    frequencies: &ValueFrequency,
    enum_lookup: &mut EnumLookup,
    class_name: &str,
) -> Vec<String> {
    enum_lookup.namespace(class_name);

    let mut members = Vec::with_capacity(frequencies.distinct_count());
    for value in frequencies.values() {
        let member = derive_enum_member_name(value, class_name);
        tracing::debug!(member = %member, value, "Derived enum member");

        if let Some(previous) =
            enum_lookup.insert_member(class_name, member.clone(), value.to_string())
            && previous != value
        {
            tracing::warn!(
                class = class_name,
                member = %member,
                previous = %previous,
                value,
                "Enum member name collision; keeping the latest value"
            );
        }
        members.push(member);
    }
    members
}
