//! Store Port - Session Persistence Interface
//!
//! Defines the trait for persisting analysis sessions as append-only
//! audit records. No database dependency - lightweight JSONL format,
//! one self-contained JSON object per line.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::outcome::Outcome;

/// A single analysis session for persistence and auditing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
  /// Unique session identifier.
  pub id: String,
  /// Timestamp (Unix ms).
  pub timestamp_ms: u64,
  /// Outcomes as entered.
  pub outcomes: Vec<Outcome>,
  /// Bankroll used for stake sizing.
  pub bankroll: f64,
  /// Optimal (full Kelly) fraction.
  pub fraction: f64,
  /// Expected growth factor at the optimal fraction.
  pub expected_value: f64,
  /// Newton iterations consumed.
  pub iterations: u32,
  /// Whether the one-shot negative clamp fired.
  pub clamped: bool,
  /// Multiplier of the scaled-down sizing row.
  pub kelly_multiplier: f64,
  /// Scaled-down fraction.
  pub scaled_fraction: f64,
  /// Stake at the scaled-down fraction.
  pub scaled_stake: f64,
}

/// Trait for session record sinks.
pub trait SessionStore {
  /// Append one session record.
  fn append(&self, record: &SessionRecord) -> Result<()>;
}
