//! Expected log-growth evaluation.
//!
//! The growth rate of a bankroll wagering a fraction `f` on a set of
//! weighted outcomes is
//!
//! ```text
//! G(f) = sum_i p_i * ln(1 + b_i * f)
//! ```
//!
//! and the per-round expected growth factor is `E(f) = exp(G(f))`.
//! The solver drives the first derivative of G to zero; the reporting
//! and chart layers evaluate G and E directly at arbitrary fractions.
//!
//! All functions here are pure and deterministic: identical inputs give
//! bit-identical results. The log-domain precondition `1 + b_i * f > 0`
//! is NOT guarded; out-of-domain fractions produce NaN or infinities,
//! which the solver detects and surfaces as a typed error.

use super::outcome::OutcomeSet;

/// Pure evaluator over a fixed (net return, probability) term list.
///
/// Probabilities are normalized once at construction; the evaluator is
/// then valid for any fraction, not just the solver's fixed point.
#[derive(Debug, Clone)]
pub struct GrowthModel {
    /// (net_return, probability) per outcome.
    terms: Vec<(f64, f64)>,
}

impl GrowthModel {
    /// Build the evaluator from a validated outcome set.
    pub fn new(outcomes: &OutcomeSet) -> Self {
        let probs = outcomes.probabilities();
        let terms = outcomes
            .outcomes()
            .iter()
            .zip(probs)
            .map(|(o, p)| (o.net_return, p))
            .collect();
        Self { terms }
    }

    /// G(f) = sum_i p_i * ln(1 + b_i * f)
    pub fn log_growth(&self, fraction: f64) -> f64 {
        self.terms
            .iter()
            .map(|(b, p)| p * (1.0 + b * fraction).ln())
            .sum()
    }

    /// E(f) = exp(G(f)), the expected growth factor per round.
    pub fn expected_value(&self, fraction: f64) -> f64 {
        self.log_growth(fraction).exp()
    }

    /// First derivative: G'(f) = sum_i p_i * b_i / (1 + b_i * f).
    ///
    /// At f = 0 this reduces to the expected net return sum p_i * b_i.
    pub fn marginal(&self, fraction: f64) -> f64 {
        self.terms
            .iter()
            .map(|(b, p)| p * b / (1.0 + b * fraction))
            .sum()
    }

    /// Second derivative: G''(f) = sum_i -b_i^2 * p_i / (1 + b_i * f)^2.
    ///
    /// Strictly negative wherever defined, unless every return is zero.
    pub fn curvature(&self, fraction: f64) -> f64 {
        self.terms
            .iter()
            .map(|(b, p)| {
                let denom = 1.0 + b * fraction;
                -(b * b * p) / (denom * denom)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::Outcome;

    fn model(pairs: &[(f64, f64)]) -> GrowthModel {
        let outcomes = pairs
            .iter()
            .map(|&(net_return, weight)| Outcome { net_return, weight })
            .collect();
        GrowthModel::new(&OutcomeSet::new(outcomes).unwrap())
    }

    #[test]
    fn test_growth_at_zero_fraction() {
        let m = model(&[(1.0, 0.6), (-1.0, 0.4)]);
        // ln(1) terms: betting nothing grows nothing.
        assert_eq!(m.log_growth(0.0), 0.0);
        assert_eq!(m.expected_value(0.0), 1.0);
    }

    #[test]
    fn test_known_even_money_values() {
        let m = model(&[(1.0, 0.6), (-1.0, 0.4)]);
        // G(0.2) = 0.6 ln(1.2) + 0.4 ln(0.8)
        let expected = 0.6 * 1.2f64.ln() + 0.4 * 0.8f64.ln();
        assert!((m.log_growth(0.2) - expected).abs() < 1e-15);
        assert!((m.expected_value(0.2) - expected.exp()).abs() < 1e-15);
    }

    #[test]
    fn test_marginal_at_zero_is_expected_return() {
        let m = model(&[(2.0, 0.3), (-1.0, 0.7)]);
        // sum p b = 0.3*2 - 0.7 = -0.1
        assert!((m.marginal(0.0) - (-0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_marginal_vanishes_at_optimum() {
        // Even money with p = 0.6 has its optimum at f = 2p - 1 = 0.2.
        let m = model(&[(1.0, 0.6), (-1.0, 0.4)]);
        assert!(m.marginal(0.2).abs() < 1e-12);
    }

    #[test]
    fn test_curvature_is_negative() {
        let m = model(&[(1.0, 0.6), (-1.0, 0.4)]);
        assert!(m.curvature(0.0) < 0.0);
        assert!(m.curvature(0.2) < 0.0);
    }

    #[test]
    fn test_evaluator_is_idempotent() {
        let m = model(&[(0.9, 2.0), (-0.4, 1.0), (0.1, 1.5)]);
        for f in [0.0, 0.05, 0.31, 0.77] {
            assert_eq!(m.log_growth(f).to_bits(), m.log_growth(f).to_bits());
            assert_eq!(
                m.expected_value(f).to_bits(),
                m.expected_value(f).to_bits()
            );
        }
    }

    #[test]
    fn test_out_of_domain_fraction_is_nan() {
        // 1 + (-1.0) * 2.0 < 0: the log is undefined by design.
        let m = model(&[(1.0, 0.6), (-1.0, 0.4)]);
        assert!(m.log_growth(2.0).is_nan());
    }
}
