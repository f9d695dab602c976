//! Newton-Raphson Kelly fraction solver.
//!
//! Finds the bankroll fraction maximizing expected log growth by driving
//! the growth derivative to zero:
//!
//! ```text
//! G'(f) = sum_i p_i * b_i / (1 + b_i * f) = 0
//! ```
//!
//! using the Newton update `f <- f - G'(f) / G''(f)`. Positions with a
//! non-positive expected return short-circuit to a zero fraction without
//! iterating: wagering is never favorable there.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::growth::GrowthModel;
use super::outcome::OutcomeSet;

/// Converged solver output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Optimal fraction of bankroll to wager (full Kelly), >= 0.
    pub fraction: f64,
    /// Expected growth factor per round at the optimal fraction.
    ///
    /// Reported as 0.0 (not the mathematical exp(0) = 1.0) when the
    /// profitability gate fires; long-standing output contract.
    pub expected_value: f64,
    /// Newton iterations consumed (0 when the gate fires).
    pub iterations: u32,
    /// Whether the one-shot negative clamp fired during iteration.
    pub clamped: bool,
}

/// Failures of the Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolverError {
    /// The iterate left the log domain or curvature vanished; the
    /// derivative terms stopped being usable numbers.
    #[error("degenerate derivative at fraction {fraction}")]
    Degenerate { fraction: f64 },
    /// The iteration cap was reached before the fraction stabilized.
    #[error("no convergence after {iterations} iterations")]
    NonConvergent { iterations: u32 },
}

/// Newton-Raphson solver for the optimal Kelly fraction.
#[derive(Debug, Clone, Copy)]
pub struct NewtonSolver {
    /// Starting iterate.
    initial_guess: f64,
    /// Convergence threshold on successive iterates.
    tolerance: f64,
    /// Defensive iteration cap; the underlying iteration has no natural
    /// bound for pathological inputs.
    max_iterations: u32,
}

impl NewtonSolver {
    /// Create a solver.
    ///
    /// # Panics
    /// Panics if `initial_guess` or `tolerance` is not a positive finite
    /// number, or if `max_iterations` is zero.
    pub fn new(initial_guess: f64, tolerance: f64, max_iterations: u32) -> Self {
        assert!(
            initial_guess.is_finite() && initial_guess > 0.0,
            "initial guess must be positive and finite"
        );
        assert!(
            tolerance.is_finite() && tolerance > 0.0,
            "tolerance must be positive and finite"
        );
        assert!(max_iterations > 0, "iteration cap must be positive");
        Self {
            initial_guess,
            tolerance,
            max_iterations,
        }
    }

    /// Solve for the optimal fraction of the given outcome set.
    ///
    /// Non-profitable sets (expected net return <= 0) return a zero
    /// solution immediately. The iteration applies a one-shot clamp: the
    /// first time an iterate goes negative it is bumped to zero, and the
    /// guard never re-arms afterwards. This is deliberately not a hard
    /// floor; it only stops a single early overshoot from running away,
    /// and a later negative excursion would pass through untouched.
    pub fn solve(&self, outcomes: &OutcomeSet) -> Result<Solution, SolverError> {
        let model = GrowthModel::new(outcomes);

        if outcomes.expected_return() <= 0.0 {
            return Ok(Solution {
                fraction: 0.0,
                expected_value: 0.0,
                iterations: 0,
                clamped: false,
            });
        }

        let mut f_prev = 0.0_f64;
        let mut f_next = self.initial_guess;
        let mut bumped = false;
        let mut iterations = 0_u32;

        while (f_prev - f_next).abs() > self.tolerance {
            if iterations >= self.max_iterations {
                return Err(SolverError::NonConvergent { iterations });
            }
            iterations += 1;
            f_prev = f_next;

            let g1 = model.marginal(f_prev);
            let g2 = model.curvature(f_prev);
            if !g1.is_finite() || !g2.is_finite() || g2 == 0.0 {
                return Err(SolverError::Degenerate { fraction: f_prev });
            }

            f_next = f_prev - g1 / g2;
            if f_next < 0.0 && !bumped {
                f_next = 0.0;
                bumped = true;
            }
        }

        let expected_value = model.expected_value(f_next);
        if !expected_value.is_finite() {
            return Err(SolverError::Degenerate { fraction: f_next });
        }

        Ok(Solution {
            fraction: f_next,
            expected_value,
            iterations,
            clamped: bumped,
        })
    }
}

impl Default for NewtonSolver {
    /// Defaults: guess 0.25, tolerance 1e-6, cap 10,000 iterations.
    fn default() -> Self {
        Self {
            initial_guess: 0.25,
            tolerance: 1e-6,
            max_iterations: 10_000,
        }
    }
}
