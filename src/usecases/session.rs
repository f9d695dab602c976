//! Analysis Session - Collect, Solve, Size, Render, Persist
//!
//! The single use case of the application: one synchronous pass from
//! operator input to rendered report, generic over the three ports so
//! tests can drive it with canned adapters.

use anyhow::{Context, Result};
use rust_decimal::prelude::*;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::domain::growth::GrowthModel;
use crate::domain::sizing::StakeSizer;
use crate::domain::solver::{NewtonSolver, Solution};
use crate::ports::input::OutcomeSource;
use crate::ports::render::{AnalysisReport, Recommendation, ReportSink};
use crate::ports::store::{SessionRecord, SessionStore};

use super::curve::sample_curve;

/// One-shot analysis session orchestrating the full flow.
pub struct AnalysisSession<S, R, P>
where
  S: OutcomeSource,
  R: ReportSink,
  P: SessionStore,
{
  /// Wager input provider.
  source: S,
  /// Report presenter.
  sink: R,
  /// Optional session audit log.
  store: Option<P>,
  /// Newton solver configured from the app config.
  solver: NewtonSolver,
  /// Fractional Kelly sizer.
  sizer: StakeSizer,
  /// Growth curve resolution.
  chart_samples: usize,
  /// Whether curve sampling is enabled at all.
  chart_enabled: bool,
}

impl<S, R, P> AnalysisSession<S, R, P>
where
  S: OutcomeSource,
  R: ReportSink,
  P: SessionStore,
{
  /// Wire a session from adapters and configuration.
  pub fn new(source: S, sink: R, store: Option<P>, config: &AppConfig) -> Self {
    let solver = NewtonSolver::new(
      config.solver.initial_guess,
      config.solver.tolerance,
      config.solver.max_iterations,
    );
    let sizer = StakeSizer::new(config.sizing.kelly_multiplier);

    Self {
      source,
      sink,
      store,
      solver,
      sizer,
      chart_samples: config.chart.samples,
      chart_enabled: config.chart.enabled,
    }
  }

  /// Run one full analysis pass.
  #[instrument(skip(self), name = "analysis_session")]
  pub fn run(&mut self) -> Result<()> {
    let request = self
      .source
      .collect()
      .context("Failed to collect wager input")?;

    let model = GrowthModel::new(&request.outcomes);
    let solution = self
      .solver
      .solve(&request.outcomes)
      .context("Kelly solver failed")?;

    info!(
      fraction = solution.fraction,
      expected_value = solution.expected_value,
      iterations = solution.iterations,
      clamped = solution.clamped,
      "Solver finished"
    );

    let recommendations =
      self.recommendations(&model, &solution, request.bankroll);

    // The sampling range [0, 2 * f_opt] collapses when the gate fires;
    // the sink explains the missing chart in that case.
    let curve = if self.chart_enabled && solution.fraction > 0.0 {
      sample_curve(&model, solution.fraction, self.chart_samples)
    } else {
      Vec::new()
    };

    let report = AnalysisReport {
      bankroll: request.bankroll,
      outcomes: request.outcomes.outcomes().to_vec(),
      probabilities: request.outcomes.probabilities(),
      solution,
      recommendations,
      curve,
    };

    self.sink.present(&report).context("Failed to render report")?;

    // Audit logging must never block the operator from seeing results.
    if let Some(store) = &self.store {
      let record = self.record(&report);
      if let Err(e) = store.append(&record) {
        warn!(error = %e, "Failed to persist session record");
      }
    }

    Ok(())
  }

  /// Build the sizing rows: full Kelly plus the scaled-down variant.
  /// No rows when the position has no positive edge.
  fn recommendations(
    &self,
    model: &GrowthModel,
    solution: &Solution,
    bankroll: f64,
  ) -> Vec<Recommendation> {
    if solution.fraction <= 0.0 {
      return Vec::new();
    }

    let scaled = self.sizer.scaled_fraction(solution.fraction);

    vec![
      Recommendation {
        label: "Full Kelly".to_string(),
        fraction: solution.fraction,
        log_growth: model.log_growth(solution.fraction),
        expected_value: solution.expected_value,
        stake: self
          .sizer
          .stake(bankroll, solution.fraction)
          .to_f64()
          .unwrap_or(0.0),
      },
      Recommendation {
        label: multiplier_label(self.sizer.multiplier()),
        fraction: scaled,
        log_growth: model.log_growth(scaled),
        // Recomputed through the evaluator, never scaled from the full
        // Kelly number.
        expected_value: model.expected_value(scaled),
        stake: self.sizer.stake(bankroll, scaled).to_f64().unwrap_or(0.0),
      },
    ]
  }

  fn record(&self, report: &AnalysisReport) -> SessionRecord {
    let scaled_fraction = self.sizer.scaled_fraction(report.solution.fraction);
    SessionRecord {
      id: Uuid::new_v4().to_string(),
      timestamp_ms: chrono::Utc::now().timestamp_millis() as u64,
      outcomes: report.outcomes.clone(),
      bankroll: report.bankroll,
      fraction: report.solution.fraction,
      expected_value: report.solution.expected_value,
      iterations: report.solution.iterations,
      clamped: report.solution.clamped,
      kelly_multiplier: self.sizer.multiplier(),
      scaled_fraction,
      scaled_stake: self
        .sizer
        .stake(report.bankroll, scaled_fraction)
        .to_f64()
        .unwrap_or(0.0),
    }
  }
}

/// Human label for a Kelly multiplier.
fn multiplier_label(multiplier: f64) -> String {
  if (multiplier - 0.5).abs() < f64::EPSILON {
    "Half Kelly".to_string()
  } else if (multiplier - 0.25).abs() < f64::EPSILON {
    "Quarter Kelly".to_string()
  } else {
    format!("{multiplier:.2}x Kelly")
  }
}
