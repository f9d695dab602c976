//! Growth curve sampling.
//!
//! Samples the pure evaluator over `[0, 2 * f_opt]` so the chart adapter
//! (or any downstream consumer) can render the growth profile around the
//! optimum at arbitrary resolution.

use crate::domain::growth::GrowthModel;
use crate::ports::render::CurvePoint;

/// Sample the growth curve at evenly spaced fractions from zero to twice
/// the optimal fraction, endpoints included.
///
/// # Panics
/// Panics if `samples < 2`; config validation rejects such values before
/// they reach this point.
pub fn sample_curve(
  model: &GrowthModel,
  optimal_fraction: f64,
  samples: usize,
) -> Vec<CurvePoint> {
  assert!(samples >= 2, "curve needs at least two samples");

  let upper = 2.0 * optimal_fraction;
  let step = upper / (samples - 1) as f64;

  (0..samples)
    .map(|i| {
      let fraction = step * i as f64;
      let log_growth = model.log_growth(fraction);
      CurvePoint {
        fraction,
        log_growth,
        expected_value: log_growth.exp(),
      }
    })
    .collect()
}
