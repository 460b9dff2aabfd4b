//! Source normalization
//!
//! Turns raw delimited text into a clean `FoodTable`: resolve columns, coerce
//! the four macro cells, drop rows without a name. Deterministic for a given
//! input and spec.

use crate::error::SourceFormatError;
use crate::models::{FoodRecord, Macros};

use super::numeric::coerce_macro_value;
use super::reader::read_rows;
use super::{FoodTable, TableSpec};

/// Build a `FoodTable` from raw source text
pub fn normalize(raw: &str, spec: &TableSpec) -> Result<FoodTable, SourceFormatError> {
    let rows = read_rows(raw, spec.delimiter)?;
    let resolved = spec.columns.resolve(&rows[0])?;

    let data_rows = if resolved.has_header { &rows[1..] } else { &rows[..] };
    let positions = resolved.positions;

    let mut records = Vec::with_capacity(data_rows.len());
    let mut dropped = 0usize;
    for (row_index, row) in data_rows.iter().enumerate() {
        let name = cell(row, positions.name).trim();
        if name.is_empty() {
            tracing::warn!("row {} has no name, dropping it", row_index + 1);
            dropped += 1;
            continue;
        }

        records.push(FoodRecord::new(
            name,
            Macros {
                kcal: coerce_macro_value(cell(row, positions.kcal)),
                carb: coerce_macro_value(cell(row, positions.carb)),
                prot: coerce_macro_value(cell(row, positions.prot)),
                gord: coerce_macro_value(cell(row, positions.gord)),
            },
        ));
    }

    tracing::info!(
        "normalized table: {} records, {} rows dropped",
        records.len(),
        dropped
    );
    Ok(FoodTable::from_records(records))
}

/// Missing cells (short rows) read as empty, which coerce to 0.0
fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}
