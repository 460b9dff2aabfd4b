//! Session ledger
//!
//! Append-only list of logged entries for one session. Entries are never
//! edited in place; the only bulk operation is an explicit clear.

use serde::{Deserialize, Serialize};

use crate::models::{LogEntry, Macros};

/// Ordered log of consumed items for the current session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<LogEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry at the end; never reorders or deduplicates
    pub fn append(&mut self, entry: LogEntry) -> &LogEntry {
        self.entries.push(entry);
        // push guarantees a last element
        &self.entries[self.entries.len() - 1]
    }

    /// Field-wise sums across all entries; empty ledger sums to zero
    pub fn totals(&self) -> Macros {
        self.entries.iter().map(|e| e.macros).sum()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_empty_totals_are_zero() {
        assert_eq!(Ledger::new().totals(), Macros::zero());
    }

    #[test]
    fn test_totals_sum_field_wise() {
        let mut ledger = Ledger::new();
        ledger.append(LogEntry::weighed(at(8, 0), "Pão francês", 50.0, Macros::new(150.0, 29.0, 4.0, 1.5)));
        ledger.append(LogEntry::manual(at(12, 30), "Marmita", Macros::new(520.0, 60.0, 30.0, 18.0)));
        let totals = ledger.totals();
        assert_eq!(totals.kcal, 670.0);
        assert_eq!(totals.carb, 89.0);
        assert_eq!(totals.prot, 34.0);
        assert_eq!(totals.gord, 19.5);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut ledger = Ledger::new();
        ledger.append(LogEntry::manual(at(20, 0), "Jantar", Macros::zero()));
        ledger.append(LogEntry::manual(at(8, 0), "Café", Macros::zero()));
        let names: Vec<_> = ledger.entries().iter().map(|e| e.food_name.as_str()).collect();
        assert_eq!(names, vec!["Jantar", "Café"]);
    }

    #[test]
    fn test_clear_empties_regardless_of_contents() {
        let mut ledger = Ledger::new();
        ledger.append(LogEntry::manual(at(8, 0), "Café", Macros::new(2.0, 0.2, 0.0, 0.0)));
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.totals(), Macros::zero());
    }
}
