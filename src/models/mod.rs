//! Data models
//!
//! Plain structs shared by the table and session layers.

mod food_record;
mod log_entry;
mod macros;

pub use food_record::{FoodRecord, REFERENCE_GRAMS};
pub use log_entry::{format_time, LogEntry};
pub use macros::Macros;
