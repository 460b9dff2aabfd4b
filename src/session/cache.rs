//! Table cache
//!
//! The table load is the one expensive operation, so it is computed at most
//! once per distinct source input. The memoization is an explicit value keyed
//! by a fingerprint of the raw bytes plus the table spec, not a hidden
//! framework decorator; a changed source invalidates the cached table.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::sync::Arc;

use crate::error::SourceFormatError;
use crate::table::{normalize, ColumnSpec, FoodTable, TableSpec};

/// Memoized food table, keyed by source fingerprint
#[derive(Debug, Default)]
pub struct TableCache {
    cached: Option<(u64, Arc<FoodTable>)>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a file, reusing the cached table when the bytes and spec
    /// have not changed
    pub fn load_path(
        &mut self,
        path: impl AsRef<Path>,
        spec: &TableSpec,
    ) -> Result<Arc<FoodTable>, SourceFormatError> {
        let bytes = std::fs::read(path)?;
        let raw = std::str::from_utf8(&bytes).map_err(SourceFormatError::Encoding)?;
        self.load_str(raw, spec)
    }

    /// Load from raw text, reusing the cached table on a fingerprint hit
    pub fn load_str(
        &mut self,
        raw: &str,
        spec: &TableSpec,
    ) -> Result<Arc<FoodTable>, SourceFormatError> {
        let key = fingerprint(raw, spec);
        if let Some((cached_key, table)) = &self.cached {
            if *cached_key == key {
                tracing::debug!("table cache hit for fingerprint {:016x}", key);
                return Ok(Arc::clone(table));
            }
        }

        tracing::info!("table cache miss, normalizing source ({} bytes)", raw.len());
        let table = Arc::new(normalize(raw, spec)?);
        self.cached = Some((key, Arc::clone(&table)));
        Ok(table)
    }

    /// Drop the cached table, forcing the next load to rebuild
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

/// Hash of the raw source plus the parts of the spec that affect the output
fn fingerprint(raw: &str, spec: &TableSpec) -> u64 {
    let mut hasher = DefaultHasher::new();
    raw.hash(&mut hasher);
    spec.delimiter.hash(&mut hasher);
    match &spec.columns {
        ColumnSpec::Labeled { labels, fallback } => {
            0u8.hash(&mut hasher);
            for set in [&labels.name, &labels.kcal, &labels.carb, &labels.prot, &labels.gord] {
                set.hash(&mut hasher);
            }
            fallback.map(|p| (p.name, p.kcal, p.carb, p.prot, p.gord)).hash(&mut hasher);
        }
        ColumnSpec::Positional(p) => {
            1u8.hash(&mut hasher);
            (p.name, p.kcal, p.carb, p.prot, p.gord).hash(&mut hasher);
        }
    }
    hasher.finish()
}
