//! Render Port - Report Presentation Interface
//!
//! Defines the trait for presenting a finished analysis to the operator,
//! along with the boundary data it consumes. Everything here is plain
//! f64 data; rendering decisions (tables, colors, chart glyphs) belong
//! to the adapter.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::outcome::Outcome;
use crate::domain::solver::Solution;

/// One sample of the growth curve, used by chart rendering and the
/// session log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
  /// Bankroll fraction this sample was evaluated at.
  pub fraction: f64,
  /// Expected log growth at this fraction.
  pub log_growth: f64,
  /// Expected growth factor at this fraction.
  pub expected_value: f64,
}

/// A sizing row of the report: full Kelly, or a scaled-down variant.
#[derive(Debug, Clone)]
pub struct Recommendation {
  /// Human label ("Full Kelly", "Half Kelly", ...).
  pub label: String,
  /// Fraction of bankroll to wager.
  pub fraction: f64,
  /// Expected log growth at this fraction.
  pub log_growth: f64,
  /// Expected growth factor at this fraction.
  pub expected_value: f64,
  /// Wager amount against the requested bankroll, already rounded.
  pub stake: f64,
}

/// The complete analysis handed to the sink.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
  /// Bankroll the stakes were sized against.
  pub bankroll: f64,
  /// Outcomes in input order.
  pub outcomes: Vec<Outcome>,
  /// Normalized probabilities, aligned with `outcomes`.
  pub probabilities: Vec<f64>,
  /// Raw solver output (fraction, EV, iteration diagnostics).
  pub solution: Solution,
  /// Sizing rows; empty when the position has no positive edge.
  pub recommendations: Vec<Recommendation>,
  /// Growth curve over [0, 2 * f_opt]; empty when f_opt is zero (the
  /// sampling range collapses) or charting is disabled.
  pub curve: Vec<CurvePoint>,
}

/// Trait for report presenters.
pub trait ReportSink {
  /// Present one finished report.
  fn present(&mut self, report: &AnalysisReport) -> Result<()>;
}
