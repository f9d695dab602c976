//! Fractional Kelly stake sizing.
//!
//! Full Kelly maximizes long-term growth but carries brutal variance, so
//! the report always shows a scaled-down row next to it (half Kelly by
//! default). The multiplier applies to the fraction, never to the
//! expected value: the scaled fraction's growth numbers are recomputed
//! through the evaluator.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Scales the optimal fraction and converts fractions to stakes.
#[derive(Debug, Clone, Copy)]
pub struct StakeSizer {
    /// Kelly fraction multiplier (0.5 = half Kelly).
    multiplier: f64,
}

impl StakeSizer {
    /// Create a sizer with the given multiplier.
    ///
    /// # Panics
    /// Panics unless the multiplier lies in (0, 1].
    pub fn new(multiplier: f64) -> Self {
        assert!(
            multiplier > 0.0 && multiplier <= 1.0,
            "Kelly multiplier must be in (0, 1]"
        );
        Self { multiplier }
    }

    /// The configured multiplier.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// The scaled-down fraction.
    pub fn scaled_fraction(&self, full_fraction: f64) -> f64 {
        full_fraction * self.multiplier
    }

    /// Wager amount for a bankroll at the given fraction, rounded to
    /// cents. Non-finite inputs size to zero rather than propagating
    /// garbage into a money amount.
    pub fn stake(&self, bankroll: f64, fraction: f64) -> Decimal {
        let bank = Decimal::from_f64(bankroll).unwrap_or(Decimal::ZERO);
        let frac = Decimal::from_f64(fraction).unwrap_or(Decimal::ZERO);
        (bank * frac).round_dp(2)
    }
}

impl Default for StakeSizer {
    /// Half Kelly.
    fn default() -> Self {
        Self { multiplier: 0.5 }
    }
}
