//! Profiling data model

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::datatype::Datatype;
use super::naming::{derive_attribute_name, derive_class_name};

/// A header column with its derived identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Raw header text
    pub name: String,
    /// 0-based position in the row
    pub position: usize,
    /// Field name derived from the header
    pub attribute_name: String,
    /// Type name derived from the header
    pub class_name: String,
}

impl Column {
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        let name = name.into();
        Self {
            attribute_name: derive_attribute_name(&name),
            class_name: derive_class_name(&name),
            name,
            position,
        }
    }
}

/// Occurrence counts per distinct value, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueFrequency {
    counts: IndexMap<String, usize>,
}

impl ValueFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `value`
    pub fn record(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_string(), 1);
            }
        }
    }

    pub fn count(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    pub fn distinct_count(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct values in first-seen order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// `(value, count)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(v, c)| (v.as_str(), *c))
    }
}

/// Everything learned about one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProfile {
    pub column: Column,
    pub frequencies: ValueFrequency,
    /// Data rows that contributed a value to this column
    pub row_count: usize,
    pub datatype: Datatype,
    /// Distinct count is within the configured threshold
    pub is_enum: bool,
    /// Enum member symbols in first-seen order, empty unless `is_enum`
    pub enum_members: Vec<String>,
}

impl ColumnProfile {
    pub fn distinct_count(&self) -> usize {
        self.frequencies.distinct_count()
    }

    /// Share of data rows holding `count` occurrences, in percent
    pub fn percentage(&self, count: usize) -> f64 {
        if self.row_count == 0 {
            0.0
        } else {
            count as f64 / self.row_count as f64 * 100.0
        }
    }
}

/// One entry of the schema lookup handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeEntry {
    pub datatype: Datatype,
    pub column_name: String,
    /// 1-based column position
    pub column_position: usize,
    pub class_name: String,
    /// Distinct raw values, present only for enum-eligible columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniq_values: Option<Vec<String>>,
}

/// Attribute name to schema entry, in header order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaLookup {
    attributes: IndexMap<String, AttributeEntry>,
}

impl SchemaLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, attribute_name: &str) -> Option<&AttributeEntry> {
        self.attributes.get(attribute_name)
    }

    pub(crate) fn get_mut(&mut self, attribute_name: &str) -> Option<&mut AttributeEntry> {
        self.attributes.get_mut(attribute_name)
    }

    /// Insert an entry unless the attribute already exists.
    ///
    /// Returns `false` when an earlier column already claimed the name.
    pub(crate) fn insert_if_absent(&mut self, attribute_name: &str, entry: AttributeEntry) -> bool {
        if self.attributes.contains_key(attribute_name) {
            return false;
        }
        self.attributes.insert(attribute_name.to_string(), entry);
        true
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeEntry)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Class name to (member symbol to raw value)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnumLookup {
    classes: IndexMap<String, IndexMap<String, String>>,
}

impl EnumLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a namespace exists for `class_name`
    pub(crate) fn namespace(&mut self, class_name: &str) -> &mut IndexMap<String, String> {
        self.classes.entry(class_name.to_string()).or_default()
    }

    /// Add a member, returning the raw value it replaced if the symbol was taken
    pub(crate) fn insert_member(
        &mut self,
        class_name: &str,
        member: String,
        value: String,
    ) -> Option<String> {
        self.namespace(class_name).insert(member, value)
    }

    pub fn members(&self, class_name: &str) -> Option<&IndexMap<String, String>> {
        self.classes.get(class_name)
    }

    pub fn member_value(&self, class_name: &str, member: &str) -> Option<&str> {
        self.classes
            .get(class_name)
            .and_then(|members| members.get(member))
            .map(String::as_str)
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Result of a full profiling pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport {
    /// Per-column profiles in header order
    pub columns: Vec<ColumnProfile>,
    pub lookup: SchemaLookup,
    pub enum_lookup: EnumLookup,
    /// Non-empty data rows read
    pub data_rows: usize,
}
