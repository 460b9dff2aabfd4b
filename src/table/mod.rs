//! Food-composition table
//!
//! Loading, normalization, and lookup over the static source table. Built
//! once per source and shared read-only afterwards.

pub mod columns;
pub mod normalize;
pub mod numeric;
pub mod reader;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NotFoundError, SourceFormatError};
use crate::models::FoodRecord;

pub use columns::{ColumnSpec, FieldLabels, FieldPositions};
pub use normalize::normalize;

/// How to read and map one source table
#[derive(Debug, Clone)]
pub struct TableSpec {
    /// Cell delimiter; observed sources use ',' or ';'
    pub delimiter: char,
    pub columns: ColumnSpec,
}

impl Default for TableSpec {
    fn default() -> Self {
        Self {
            delimiter: ',',
            columns: ColumnSpec::default(),
        }
    }
}

/// The normalized lookup table, immutable after construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodTable {
    records: Vec<FoodRecord>,
}

impl FoodTable {
    pub fn from_records(records: Vec<FoodRecord>) -> Self {
        Self { records }
    }

    /// Read and normalize a source file.
    ///
    /// A missing file or non-UTF-8 content surfaces as `SourceFormatError`
    /// with the underlying cause attached.
    pub fn load_path(path: impl AsRef<Path>, spec: &TableSpec) -> Result<Self, SourceFormatError> {
        let bytes = std::fs::read(path)?;
        let raw = std::str::from_utf8(&bytes).map_err(SourceFormatError::Encoding)?;
        normalize(raw, spec)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    /// Case-insensitive substring search on the food name.
    ///
    /// An empty or whitespace-only query returns nothing rather than the
    /// whole table; an unmatched query returns an empty result, not an error.
    pub fn search(&self, query: &str) -> Vec<&FoodRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// First record whose name matches exactly
    pub fn get_exact(&self, name: &str) -> Result<&FoodRecord, NotFoundError> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| NotFoundError(name.to_string()))
    }
}
