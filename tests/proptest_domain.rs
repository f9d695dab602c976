//! Property-Based Tests — Domain Layer Invariants
//!
//! Uses `proptest` to verify that domain components maintain
//! mathematical invariants across random inputs.

use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;

use kelly_optimizer::domain::growth::GrowthModel;
use kelly_optimizer::domain::outcome::{Outcome, OutcomeSet};
use kelly_optimizer::domain::sizing::StakeSizer;
use kelly_optimizer::domain::solver::NewtonSolver;

fn even_money(p_win: f64) -> OutcomeSet {
    OutcomeSet::new(vec![
        Outcome { net_return: 1.0, weight: p_win },
        Outcome { net_return: -1.0, weight: 1.0 - p_win },
    ])
    .unwrap()
}

// ── Outcome Set Properties ──────────────────────────────────

proptest! {
    /// Normalized probabilities must sum to one and stay in [0, 1].
    #[test]
    fn probabilities_form_a_distribution(
        w1 in 0.01f64..100.0,
        w2 in 0.01f64..100.0,
        w3 in 0.01f64..100.0,
    ) {
        let set = OutcomeSet::new(vec![
            Outcome { net_return: 1.0, weight: w1 },
            Outcome { net_return: 0.5, weight: w2 },
            Outcome { net_return: -1.0, weight: w3 },
        ]).unwrap();

        let probs = set.probabilities();
        let total: f64 = probs.iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "probs sum to {total}");
        prop_assert!(probs.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    /// Scaling all raw weights by a positive constant must change
    /// neither the probabilities nor the solved fraction.
    #[test]
    fn weight_scaling_is_invariant(
        w1 in 1.0f64..3.0,
        w2 in 0.5f64..0.99,
        scale in 0.01f64..100.0,
    ) {
        let base = OutcomeSet::new(vec![
            Outcome { net_return: 1.0, weight: w1 },
            Outcome { net_return: -1.0, weight: w2 },
        ]).unwrap();
        let scaled = OutcomeSet::new(vec![
            Outcome { net_return: 1.0, weight: w1 * scale },
            Outcome { net_return: -1.0, weight: w2 * scale },
        ]).unwrap();

        let probs_base = base.probabilities();
        let probs_scaled = scaled.probabilities();
        for (a, b) in probs_base.iter().zip(&probs_scaled) {
            prop_assert!((a - b).abs() < 1e-12, "probabilities drifted: {a} vs {b}");
        }

        let solver = NewtonSolver::default();
        let f_base = solver.solve(&base).unwrap().fraction;
        let f_scaled = solver.solve(&scaled).unwrap().fraction;
        prop_assert!(
            (f_base - f_scaled).abs() < 1e-5,
            "fractions drifted: {f_base} vs {f_scaled}"
        );
    }
}

// ── Solver Properties ───────────────────────────────────────

proptest! {
    /// Even-money books must converge to the closed form f* = 2p - 1
    /// within a bounded number of iterations.
    #[test]
    fn even_money_converges_to_closed_form(p in 0.55f64..0.85) {
        let solution = NewtonSolver::default()
            .solve(&even_money(p))
            .unwrap();

        prop_assert!(
            (solution.fraction - (2.0 * p - 1.0)).abs() < 1e-4,
            "f = {} but 2p-1 = {}", solution.fraction, 2.0 * p - 1.0
        );
        prop_assert!(solution.iterations <= 100);
        prop_assert!(solution.expected_value > 1.0);
    }

    /// Unfavorable books must gate to the exact (0, 0) pair without
    /// a single Newton iteration.
    #[test]
    fn unfavorable_books_never_iterate(p in 0.01f64..0.5) {
        let solution = NewtonSolver::default()
            .solve(&even_money(p))
            .unwrap();

        prop_assert_eq!(solution.fraction, 0.0);
        prop_assert_eq!(solution.expected_value, 0.0);
        prop_assert_eq!(solution.iterations, 0);
    }

    /// The solved fraction is a maximum: nudging away from it in either
    /// direction must not increase the growth rate.
    #[test]
    fn solved_fraction_is_a_maximum(p in 0.55f64..0.85) {
        let outcomes = even_money(p);
        let solution = NewtonSolver::default().solve(&outcomes).unwrap();
        let model = GrowthModel::new(&outcomes);

        let at_opt = model.log_growth(solution.fraction);
        let eps = 1e-3;
        prop_assert!(model.log_growth(solution.fraction + eps) <= at_opt);
        prop_assert!(model.log_growth((solution.fraction - eps).max(0.0)) <= at_opt);
    }
}

// ── Sizing Properties ───────────────────────────────────────

proptest! {
    /// The scaled fraction never exceeds the full fraction.
    #[test]
    fn scaled_fraction_bounded_by_full(
        multiplier in 0.1f64..1.0,
        fraction in 0.0f64..1.0,
    ) {
        let sizer = StakeSizer::new(multiplier);
        prop_assert!(sizer.scaled_fraction(fraction) <= fraction + 1e-12);
    }

    /// A stake never exceeds the bankroll for fractions up to one.
    #[test]
    fn stake_bounded_by_bankroll(
        bankroll in 1.0f64..100_000.0,
        fraction in 0.0f64..1.0,
    ) {
        let sizer = StakeSizer::default();
        let stake = sizer
            .stake(bankroll, fraction)
            .to_f64()
            .unwrap_or(f64::MAX);
        prop_assert!(stake >= 0.0);
        prop_assert!(stake <= bankroll + 0.01, "stake {stake} > bankroll {bankroll}");
    }
}
