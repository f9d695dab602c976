//! Input Port - Wager Collection Interface
//!
//! Defines the trait for gathering the wager description (outcomes plus
//! bankroll) from an operator. The console adapter implements this with
//! interactive prompts; tests implement it with canned requests.

use anyhow::Result;

use crate::domain::outcome::OutcomeSet;

/// A fully described wager ready for analysis.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
  /// Validated outcome set.
  pub outcomes: OutcomeSet,
  /// Bankroll the stake amounts are sized against.
  pub bankroll: f64,
}

/// Trait for wager input providers.
///
/// Implementors are responsible for producing a *validated* outcome set;
/// malformed operator input must surface as an error here, before the
/// solver ever runs.
pub trait OutcomeSource {
  /// Collect one analysis request.
  fn collect(&mut self) -> Result<AnalysisRequest>;
}
