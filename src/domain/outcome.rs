//! Weighted outcome sets.
//!
//! An `OutcomeSet` is the immutable input of a Kelly analysis: an ordered
//! list of (net return, raw weight) pairs. Weights are relative and get
//! normalized to probabilities on demand, so callers can enter odds in
//! whatever scale is convenient (percentages, counts, 1/x odds).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single possible result of the wager.
///
/// `net_return` is the profit-or-loss multiplier per unit staked:
/// +1.0 doubles the stake on a win, -1.0 loses the stake, +0.5 returns
/// half the stake on top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Net return per unit staked (b in the Kelly formula).
    pub net_return: f64,
    /// Raw, unnormalized probability weight (>= 0).
    pub weight: f64,
}

/// Validation failures when constructing an [`OutcomeSet`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutcomeError {
    #[error("outcome set must contain at least one outcome")]
    Empty,
    #[error("outcome {index} has negative weight {weight}")]
    NegativeWeight { index: usize, weight: f64 },
    #[error("weights sum to zero; at least one weight must be positive")]
    ZeroWeightSum,
    #[error("outcome {index} has a non-finite value")]
    NonFinite { index: usize },
}

/// Validated, immutable set of weighted outcomes.
///
/// Invariants (enforced at construction):
/// - at least one outcome
/// - every return and weight is finite
/// - no weight is negative
/// - the weight sum is strictly positive (so normalization is defined)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSet {
    outcomes: Vec<Outcome>,
}

impl OutcomeSet {
    /// Validate and freeze a list of outcomes.
    pub fn new(outcomes: Vec<Outcome>) -> Result<Self, OutcomeError> {
        if outcomes.is_empty() {
            return Err(OutcomeError::Empty);
        }
        for (index, outcome) in outcomes.iter().enumerate() {
            if !outcome.net_return.is_finite() || !outcome.weight.is_finite() {
                return Err(OutcomeError::NonFinite { index });
            }
            if outcome.weight < 0.0 {
                return Err(OutcomeError::NegativeWeight {
                    index,
                    weight: outcome.weight,
                });
            }
        }
        let total: f64 = outcomes.iter().map(|o| o.weight).sum();
        if total <= 0.0 {
            return Err(OutcomeError::ZeroWeightSum);
        }
        Ok(Self { outcomes })
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// True when the set is empty. Unreachable for a constructed set;
    /// present for the usual len/is_empty pairing.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// The outcomes in input order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Normalized probabilities, same order as the outcomes, summing to 1
    /// within floating tolerance.
    pub fn probabilities(&self) -> Vec<f64> {
        let total: f64 = self.outcomes.iter().map(|o| o.weight).sum();
        self.outcomes.iter().map(|o| o.weight / total).collect()
    }

    /// Expected net return per unit staked: sum of p_i * b_i.
    ///
    /// Positions with a non-positive expected return are never worth
    /// wagering on; the solver gates on this value.
    pub fn expected_return(&self) -> f64 {
        let probs = self.probabilities();
        self.outcomes
            .iter()
            .zip(probs)
            .map(|(o, p)| p * o.net_return)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn even_money(p_win: f64) -> Vec<Outcome> {
        vec![
            Outcome { net_return: 1.0, weight: p_win },
            Outcome { net_return: -1.0, weight: 1.0 - p_win },
        ]
    }

    #[test]
    fn test_probabilities_normalize_to_one() {
        let set = OutcomeSet::new(vec![
            Outcome { net_return: 2.0, weight: 3.0 },
            Outcome { net_return: -1.0, weight: 7.0 },
        ])
        .unwrap();

        let probs = set.probabilities();
        assert!((probs[0] - 0.3).abs() < 1e-12);
        assert!((probs[1] - 0.7).abs() < 1e-12);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_expected_return_even_money() {
        let set = OutcomeSet::new(even_money(0.6)).unwrap();
        // 0.6 * 1 + 0.4 * (-1) = 0.2
        assert!((set.expected_return() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_empty_set_rejected() {
        assert_eq!(OutcomeSet::new(vec![]), Err(OutcomeError::Empty));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = OutcomeSet::new(vec![
            Outcome { net_return: 1.0, weight: 1.0 },
            Outcome { net_return: -1.0, weight: -0.5 },
        ])
        .unwrap_err();
        assert_eq!(err, OutcomeError::NegativeWeight { index: 1, weight: -0.5 });
    }

    #[test]
    fn test_all_zero_weights_rejected() {
        let err = OutcomeSet::new(vec![
            Outcome { net_return: 1.0, weight: 0.0 },
            Outcome { net_return: -1.0, weight: 0.0 },
        ])
        .unwrap_err();
        assert_eq!(err, OutcomeError::ZeroWeightSum);
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = OutcomeSet::new(vec![Outcome {
            net_return: f64::NAN,
            weight: 1.0,
        }])
        .unwrap_err();
        assert_eq!(err, OutcomeError::NonFinite { index: 0 });
    }

    #[test]
    fn test_zero_weight_outcome_allowed_alongside_positive() {
        let set = OutcomeSet::new(vec![
            Outcome { net_return: 5.0, weight: 0.0 },
            Outcome { net_return: 1.0, weight: 2.0 },
        ])
        .unwrap();
        let probs = set.probabilities();
        assert_eq!(probs[0], 0.0);
        assert_eq!(probs[1], 1.0);
    }
}
