//! Error types
//!
//! Three-way taxonomy: source-format failures abort the table load, quantity
//! and lookup failures reject a single action and leave the ledger untouched.

use thiserror::Error;

/// The logical field a source column maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Kcal,
    Carb,
    Prot,
    Gord,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Kcal => "kcal",
            Field::Carb => "carb",
            Field::Prot => "prot",
            Field::Gord => "gord",
        }
    }

    /// All fields, in record order
    pub const ALL: [Field; 5] = [Field::Name, Field::Kcal, Field::Carb, Field::Prot, Field::Gord];
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The raw source could not be turned into a food table.
///
/// Unrecoverable: surfaced to the caller, nothing else proceeds. Cell-level
/// numeric parse failures are deliberately NOT represented here; they default
/// to zero during normalization.
#[derive(Debug, Error)]
pub enum SourceFormatError {
    #[error("cannot read source: {0}")]
    Io(#[from] std::io::Error),

    #[error("source is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("source has no rows")]
    Empty,

    #[error("no column resolves to required field '{0}'")]
    MissingColumn(Field),
}

/// A requested portion quantity was zero, negative, or not a finite number.
#[derive(Debug, Error)]
#[error("quantity must be a positive number of grams, got {0}")]
pub struct InvalidQuantityError(pub f64);

/// An exact-name lookup found no matching food record.
#[derive(Debug, Error)]
#[error("no food named '{0}' in the table")]
pub struct NotFoundError(pub String);

/// Umbrella error for the session-level surface
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    SourceFormat(#[from] SourceFormatError),

    #[error(transparent)]
    InvalidQuantity(#[from] InvalidQuantityError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Result type for session-level operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_names_field() {
        let err = SourceFormatError::MissingColumn(Field::Kcal);
        assert!(err.to_string().contains("kcal"));
    }

    #[test]
    fn test_io_cause_retained() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = SourceFormatError::from(io);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_umbrella_conversions() {
        let err: Error = InvalidQuantityError(-1.0).into();
        assert!(matches!(err, Error::InvalidQuantity(_)));
        let err: Error = NotFoundError("Arroz".to_string()).into();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
