//! Tab-separated reader
//!
//! Fields may be double-quoted; rows may have differing field counts so the
//! profiler can report short rows itself.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use super::ImportError;

/// One data row together with its 1-based line number
#[derive(Debug, Clone)]
pub struct TsvRow {
    pub line: u64,
    pub fields: StringRecord,
}

impl TsvRow {
    /// Field at a 0-based position
    pub fn get(&self, position: usize) -> Option<&str> {
        self.fields.get(position)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Reader over tab-separated text with a header row
pub struct TsvReader<R> {
    inner: csv::Reader<R>,
}

impl TsvReader<File> {
    /// Open a TSV file
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> TsvReader<R> {
    pub fn new(reader: R) -> Self {
        let inner = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        Self { inner }
    }

    /// Read the header row; `None` when the input holds no rows at all
    pub fn read_header(&mut self) -> Result<Option<Vec<String>>, ImportError> {
        let mut record = StringRecord::new();
        if !self.inner.read_record(&mut record)? {
            return Ok(None);
        }
        Ok(Some(record.iter().map(str::to_string).collect()))
    }

    /// Remaining rows, zero-length rows skipped
    pub fn rows(&mut self) -> impl Iterator<Item = Result<TsvRow, ImportError>> + '_ {
        self.inner.records().filter_map(|result| match result {
            Ok(fields) if fields.is_empty() => None,
            Ok(fields) => {
                let line = fields.position().map(|p| p.line()).unwrap_or_default();
                Some(Ok(TsvRow { line, fields }))
            }
            Err(e) => Some(Err(ImportError::from(e))),
        })
    }
}
