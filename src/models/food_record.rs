//! Food record model
//!
//! One row of the normalized food-composition table. Immutable after
//! construction; macro values are reported per the reference mass.

use serde::{Deserialize, Serialize};

use crate::error::InvalidQuantityError;
use super::Macros;

/// The mass basis source tables report macro values against, in grams
pub const REFERENCE_GRAMS: f64 = 100.0;

/// A food with its macro values per reference quantity (100 g)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,
    pub per_100g: Macros,
}

impl FoodRecord {
    pub fn new(name: impl Into<String>, per_100g: Macros) -> Self {
        Self { name: name.into(), per_100g }
    }

    /// Macro values for a portion of `grams`, against the standard 100 g basis
    pub fn portion(&self, grams: f64) -> Result<Macros, InvalidQuantityError> {
        self.portion_from(grams, REFERENCE_GRAMS)
    }

    /// Macro values for a portion of `grams`, against an explicit reference mass.
    ///
    /// No rounding happens here; values are stored exact and rounded only at
    /// display time so recomputed totals never accumulate rounding error.
    pub fn portion_from(
        &self,
        grams: f64,
        reference_grams: f64,
    ) -> Result<Macros, InvalidQuantityError> {
        if !grams.is_finite() || grams <= 0.0 {
            return Err(InvalidQuantityError(grams));
        }
        if !reference_grams.is_finite() || reference_grams <= 0.0 {
            return Err(InvalidQuantityError(reference_grams));
        }
        Ok(self.per_100g.scale(grams / reference_grams))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> FoodRecord {
        FoodRecord::new("Rice, cooked", Macros::new(130.0, 28.0, 2.7, 0.3))
    }

    #[test]
    fn test_portion_doubles_at_200g() {
        let m = rice().portion(200.0).unwrap();
        assert_eq!(m.kcal, 260.0);
        assert_eq!(m.carb, 56.0);
        assert_eq!(m.prot, 5.4);
        assert_eq!(m.gord, 0.6);
    }

    #[test]
    fn test_portion_150g() {
        let m = rice().portion(150.0).unwrap();
        assert!((m.kcal - 195.0).abs() < 1e-9);
        assert!((m.carb - 42.0).abs() < 1e-9);
        assert!((m.prot - 4.05).abs() < 1e-9);
        assert!((m.gord - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_portion_rejects_zero_and_negative() {
        assert!(rice().portion(0.0).is_err());
        assert!(rice().portion(-50.0).is_err());
    }

    #[test]
    fn test_portion_rejects_non_finite() {
        assert!(rice().portion(f64::NAN).is_err());
        assert!(rice().portion(f64::INFINITY).is_err());
    }

    #[test]
    fn test_portion_custom_reference() {
        // Values reported per 50 g, asking for 100 g doubles them
        let m = rice().portion_from(100.0, 50.0).unwrap();
        assert_eq!(m.kcal, 260.0);
    }

    #[test]
    fn test_portion_rejects_bad_reference() {
        assert!(rice().portion_from(100.0, 0.0).is_err());
    }
}
