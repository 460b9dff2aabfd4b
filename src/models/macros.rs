//! Shared macro-nutrient data structure
//!
//! Used across food records, log entries, and daily totals.

use serde::{Deserialize, Serialize};

/// Macro-nutrient values, typically per 100 g of food
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub kcal: f64,
    pub carb: f64, // grams
    pub prot: f64, // grams
    pub gord: f64, // grams (fat)
}

impl Macros {
    /// Create a new Macros with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn new(kcal: f64, carb: f64, prot: f64, gord: f64) -> Self {
        Self { kcal, carb, prot, gord }
    }

    /// Scale all four values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            kcal: self.kcal * multiplier,
            carb: self.carb * multiplier,
            prot: self.prot * multiplier,
            gord: self.gord * multiplier,
        }
    }

    /// Add another Macros to this one
    pub fn add(&self, other: &Macros) -> Self {
        Self {
            kcal: self.kcal + other.kcal,
            carb: self.carb + other.carb,
            prot: self.prot + other.prot,
            gord: self.gord + other.gord,
        }
    }

    /// Clamp negative values to zero, keeping the rest intact
    pub fn clamped(&self) -> Self {
        Self {
            kcal: self.kcal.max(0.0),
            carb: self.carb.max(0.0),
            prot: self.prot.max(0.0),
            gord: self.gord.max(0.0),
        }
    }
}

impl std::ops::Add for Macros {
    type Output = Macros;

    fn add(self, other: Macros) -> Macros {
        Macros::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Macros {
    type Output = Macros;

    fn mul(self, multiplier: f64) -> Macros {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Macros::zero(), |acc, m| acc + m)
    }
}
