//! Header and column resolution
//!
//! The same logical table ships with unstable headers: exact label text
//! varies, carries accents or stray whitespace, or the header row is missing
//! entirely. One configurable strategy replaces the per-deployment copies of
//! this logic: match trimmed labels first, fall back to fixed ordinals.

use std::collections::HashMap;

use crate::error::{Field, SourceFormatError};

/// Ordinal column index per logical field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPositions {
    pub name: usize,
    pub kcal: usize,
    pub carb: usize,
    pub prot: usize,
    pub gord: usize,
}

impl FieldPositions {
    pub fn get(&self, field: Field) -> usize {
        match field {
            Field::Name => self.name,
            Field::Kcal => self.kcal,
            Field::Carb => self.carb,
            Field::Prot => self.prot,
            Field::Gord => self.gord,
        }
    }
}

impl Default for FieldPositions {
    /// The column order every observed source shares: name, kcal, carb, prot, gord
    fn default() -> Self {
        Self { name: 0, kcal: 1, carb: 2, prot: 3, gord: 4 }
    }
}

/// Candidate header labels per logical field, compared after trimming
#[derive(Debug, Clone)]
pub struct FieldLabels {
    pub name: Vec<String>,
    pub kcal: Vec<String>,
    pub carb: Vec<String>,
    pub prot: Vec<String>,
    pub gord: Vec<String>,
}

impl FieldLabels {
    fn get(&self, field: Field) -> &[String] {
        match field {
            Field::Name => &self.name,
            Field::Kcal => &self.kcal,
            Field::Carb => &self.carb,
            Field::Prot => &self.prot,
            Field::Gord => &self.gord,
        }
    }
}

impl Default for FieldLabels {
    /// Labels seen across the TACO-derived sources this tool targets
    fn default() -> Self {
        let labels = |v: &[&str]| v.iter().map(|s| s.to_string()).collect();
        Self {
            name: labels(&["Alimento", "alimento", "Descrição dos alimentos", "nome"]),
            kcal: labels(&["Energia (kcal)", "Energia", "Kcal", "kcal"]),
            carb: labels(&["Carboidrato (g)", "Carboidrato", "Carb", "carb"]),
            prot: labels(&["Proteína (g)", "Proteína", "Prot", "prot"]),
            gord: labels(&["Lipídeos (g)", "Lipídeos", "Gordura", "Gord", "gord"]),
        }
    }
}

/// How raw columns map to logical fields
#[derive(Debug, Clone)]
pub enum ColumnSpec {
    /// First row is a header; resolve by trimmed label, then by fallback
    /// position for any field the labels miss
    Labeled {
        labels: FieldLabels,
        fallback: Option<FieldPositions>,
    },
    /// No header row; fixed ordinals only
    Positional(FieldPositions),
}

impl Default for ColumnSpec {
    fn default() -> Self {
        ColumnSpec::Labeled {
            labels: FieldLabels::default(),
            fallback: Some(FieldPositions::default()),
        }
    }
}

/// A fully resolved field -> column-index mapping for one source
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColumns {
    pub positions: FieldPositions,
    /// Whether the first data row is a header that must be skipped
    pub has_header: bool,
}

impl ColumnSpec {
    /// Resolve the mapping against the first row of the source.
    ///
    /// Fails with `SourceFormatError::MissingColumn` naming the first field
    /// that neither a label nor a fallback position can supply.
    pub fn resolve(&self, first_row: &[String]) -> Result<ResolvedColumns, SourceFormatError> {
        match self {
            ColumnSpec::Positional(positions) => Ok(ResolvedColumns {
                positions: *positions,
                has_header: false,
            }),
            ColumnSpec::Labeled { labels, fallback } => {
                // Strip a UTF-8 BOM so the first label still matches exactly
                let by_label: HashMap<&str, usize> = first_row
                    .iter()
                    .enumerate()
                    .map(|(idx, cell)| (cell.trim_start_matches('\u{feff}').trim(), idx))
                    .collect();

                let mut resolved = [0usize; 5];
                for (slot, field) in Field::ALL.iter().enumerate() {
                    let from_label = labels
                        .get(*field)
                        .iter()
                        .find_map(|candidate| by_label.get(candidate.trim()).copied());
                    let index = match from_label {
                        Some(idx) => idx,
                        None => match fallback {
                            Some(positions) => {
                                tracing::warn!(
                                    "header has no label for field '{}', using fallback column {}",
                                    field,
                                    positions.get(*field)
                                );
                                positions.get(*field)
                            }
                            None => return Err(SourceFormatError::MissingColumn(*field)),
                        },
                    };
                    resolved[slot] = index;
                }

                Ok(ResolvedColumns {
                    positions: FieldPositions {
                        name: resolved[0],
                        kcal: resolved[1],
                        carb: resolved[2],
                        prot: resolved[3],
                        gord: resolved[4],
                    },
                    has_header: true,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_exact_labels() {
        let spec = ColumnSpec::default();
        let row = header(&["Alimento", "Energia (kcal)", "Carboidrato (g)", "Proteína (g)", "Lipídeos (g)"]);
        let resolved = spec.resolve(&row).unwrap();
        assert!(resolved.has_header);
        assert_eq!(resolved.positions, FieldPositions::default());
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        let spec = ColumnSpec::default();
        let row = header(&["  Alimento ", " Energia (kcal)", "Carboidrato (g) ", "Proteína (g)", " Lipídeos (g) "]);
        assert!(spec.resolve(&row).is_ok());
    }

    #[test]
    fn test_resolve_reordered_columns_by_label() {
        let spec = ColumnSpec::Labeled {
            labels: FieldLabels::default(),
            fallback: None,
        };
        let row = header(&["Energia (kcal)", "Alimento", "Proteína (g)", "Carboidrato (g)", "Lipídeos (g)"]);
        let resolved = spec.resolve(&row).unwrap();
        assert_eq!(resolved.positions.name, 1);
        assert_eq!(resolved.positions.kcal, 0);
        assert_eq!(resolved.positions.prot, 2);
        assert_eq!(resolved.positions.carb, 3);
    }

    #[test]
    fn test_unknown_labels_fall_back_to_positions() {
        let spec = ColumnSpec::default();
        let row = header(&["Food", "Energy", "Carbs", "Protein", "Fat"]);
        let resolved = spec.resolve(&row).unwrap();
        assert!(resolved.has_header);
        assert_eq!(resolved.positions, FieldPositions::default());
    }

    #[test]
    fn test_missing_column_without_fallback_names_field() {
        let spec = ColumnSpec::Labeled {
            labels: FieldLabels::default(),
            fallback: None,
        };
        let row = header(&["Alimento", "Energia (kcal)", "Carboidrato (g)", "Proteína (g)"]);
        match spec.resolve(&row) {
            Err(SourceFormatError::MissingColumn(field)) => assert_eq!(field, Field::Gord),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_positional_mode_skips_no_header() {
        let spec = ColumnSpec::Positional(FieldPositions::default());
        let row = header(&["Banana", "89", "22,8", "1,1", "0,3"]);
        let resolved = spec.resolve(&row).unwrap();
        assert!(!resolved.has_header);
    }
}
