//! Session state
//!
//! One user session: a shared read-only food table plus that session's own
//! ledger. The session object is created at session start and dropped at
//! session end; it is passed explicitly into every call rather than living
//! in hidden global state. Concurrent sessions can share one `Arc<FoodTable>`
//! because the table is immutable after construction.

use std::sync::Arc;

use chrono::NaiveTime;

use crate::error::Result;
use crate::models::{FoodRecord, LogEntry, Macros};
use crate::table::FoodTable;

use super::Ledger;

/// One user's session: shared table, private ledger
#[derive(Debug, Clone)]
pub struct Session {
    table: Arc<FoodTable>,
    ledger: Ledger,
}

impl Session {
    pub fn new(table: Arc<FoodTable>) -> Self {
        Self {
            table,
            ledger: Ledger::new(),
        }
    }

    pub fn table(&self) -> &FoodTable {
        &self.table
    }

    /// Case-insensitive substring search over the table
    pub fn search(&self, query: &str) -> Vec<&FoodRecord> {
        self.table.search(query)
    }

    /// Look up a food by exact name, scale its macros to a weighed portion,
    /// and append the result to the ledger.
    ///
    /// On any failure the ledger is left unchanged.
    pub fn add_weighed(
        &mut self,
        food_name: &str,
        grams: f64,
        time: NaiveTime,
    ) -> Result<&LogEntry> {
        let record = self.table.get_exact(food_name)?;
        let macros = record.portion(grams)?;
        let name = record.name.clone();
        Ok(self.ledger.append(LogEntry::weighed(time, name, grams, macros)))
    }

    /// Append an entry with user-supplied, already-scaled macros.
    ///
    /// Negative inputs clamp to zero so the ledger invariant holds.
    pub fn add_manual(
        &mut self,
        food_name: &str,
        macros: Macros,
        time: NaiveTime,
    ) -> &LogEntry {
        self.ledger
            .append(LogEntry::manual(time, food_name, macros.clamped()))
    }

    /// Running field-wise totals for the session
    pub fn totals(&self) -> Macros {
        self.ledger.totals()
    }

    /// Entries in the order they were added
    pub fn entries(&self) -> &[LogEntry] {
        self.ledger.entries()
    }

    /// Empty the ledger; the table stays loaded
    pub fn clear(&mut self) {
        self.ledger.clear();
    }
}
