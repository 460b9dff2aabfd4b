//! Macro diario library
//!
//! Core functionality for personal macro-nutrient tracking: normalize a
//! food-composition table, scale portions, and keep a per-session diary.

pub mod build_info;
pub mod error;
pub mod models;
pub mod session;
pub mod table;

pub use error::{Error, Field, InvalidQuantityError, NotFoundError, Result, SourceFormatError};
pub use models::{FoodRecord, LogEntry, Macros, REFERENCE_GRAMS};
pub use session::{Ledger, Session, TableCache};
pub use table::{ColumnSpec, FieldLabels, FieldPositions, FoodTable, TableSpec};
