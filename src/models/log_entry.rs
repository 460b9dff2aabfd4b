//! Log entry model
//!
//! One consumed item in the session diary, with macros already scaled to the
//! portion that was eaten. Entries are never edited after they are appended.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::Macros;

/// A logged consumption entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Wall-clock time of the meal, "HH:MM"
    pub time: String,
    pub food_name: String,
    /// Portion mass in grams; `None` for manually entered, already-scaled items
    pub quantity_grams: Option<f64>,
    /// Macro values scaled to the portion
    pub macros: Macros,
}

impl LogEntry {
    /// Entry derived from a table record and a weighed portion
    pub fn weighed(time: NaiveTime, food_name: impl Into<String>, grams: f64, macros: Macros) -> Self {
        Self {
            time: format_time(time),
            food_name: food_name.into(),
            quantity_grams: Some(grams),
            macros,
        }
    }

    /// Entry with user-supplied macros and no portion mass
    pub fn manual(time: NaiveTime, food_name: impl Into<String>, macros: Macros) -> Self {
        Self {
            time: format_time(time),
            food_name: food_name.into(),
            quantity_grams: None,
            macros,
        }
    }
}

/// Render a time as the stored "HH:MM" string
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        let t = NaiveTime::from_hms_opt(7, 5, 59).unwrap();
        assert_eq!(format_time(t), "07:05");
    }

    #[test]
    fn test_weighed_entry() {
        let t = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
        let e = LogEntry::weighed(t, "Feijão preto", 80.0, Macros::new(61.0, 11.2, 3.6, 0.4));
        assert_eq!(e.time, "12:30");
        assert_eq!(e.quantity_grams, Some(80.0));
    }

    #[test]
    fn test_manual_entry_has_no_quantity() {
        let t = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
        let e = LogEntry::manual(t, "Marmita", Macros::new(520.0, 60.0, 30.0, 18.0));
        assert_eq!(e.quantity_grams, None);
    }

    #[test]
    fn test_serde_round_trip() {
        let t = NaiveTime::from_hms_opt(9, 15, 0).unwrap();
        let e = LogEntry::weighed(t, "Banana", 120.0, Macros::new(110.4, 28.1, 1.6, 0.1));
        let json = serde_json::to_string(&e).unwrap();
        let back: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
