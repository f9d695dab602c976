//! Configuration Module - TOML-based Tool Configuration
//!
//! Loads configuration from `config.toml` (path overridable via the
//! `KELLY_OPT_CONFIG` env var). Every field is serde-defaulted so a
//! partial file - or no file at all - falls back to sane defaults.
//! Nothing numeric is hardcoded in the domain layer.

pub mod loader;

use serde::Deserialize;

/// Top-level tool configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Tool identity and logging.
  #[serde(default)]
  pub app: AppSettings,
  /// Newton solver parameters.
  #[serde(default)]
  pub solver: SolverSettings,
  /// Fractional Kelly sizing parameters.
  #[serde(default)]
  pub sizing: SizingSettings,
  /// Growth chart rendering parameters.
  #[serde(default)]
  pub chart: ChartSettings,
  /// Session audit log configuration.
  #[serde(default)]
  pub persistence: PersistenceSettings,
}

/// Tool identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
  /// Human-readable tool name.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

/// Newton solver configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SolverSettings {
  /// Starting iterate for the Newton loop.
  #[serde(default = "default_initial_guess")]
  pub initial_guess: f64,
  /// Convergence threshold on successive iterates.
  #[serde(default = "default_tolerance")]
  pub tolerance: f64,
  /// Defensive iteration cap.
  #[serde(default = "default_max_iterations")]
  pub max_iterations: u32,
}

/// Fractional Kelly sizing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SizingSettings {
  /// Kelly fraction multiplier (0.5 = half Kelly).
  #[serde(default = "default_kelly_multiplier")]
  pub kelly_multiplier: f64,
  /// Bankroll pre-filled in the interactive prompt.
  #[serde(default = "default_bankroll")]
  pub default_bankroll: f64,
}

/// Growth chart configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartSettings {
  /// Whether to sample and render the growth curve.
  #[serde(default = "default_true")]
  pub enabled: bool,
  /// Curve samples over [0, 2 * f_opt].
  #[serde(default = "default_samples")]
  pub samples: usize,
  /// Chart width in terminal columns.
  #[serde(default = "default_width")]
  pub width: usize,
  /// Chart height in terminal rows.
  #[serde(default = "default_height")]
  pub height: usize,
}

/// Session audit log configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceSettings {
  /// Whether to append session records at all.
  #[serde(default = "default_true")]
  pub enabled: bool,
  /// Directory for JSONL session logs.
  #[serde(default = "default_data_dir")]
  pub data_dir: String,
}

impl Default for AppSettings {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
    }
  }
}

impl Default for SolverSettings {
  fn default() -> Self {
    Self {
      initial_guess: default_initial_guess(),
      tolerance: default_tolerance(),
      max_iterations: default_max_iterations(),
    }
  }
}

impl Default for SizingSettings {
  fn default() -> Self {
    Self {
      kelly_multiplier: default_kelly_multiplier(),
      default_bankroll: default_bankroll(),
    }
  }
}

impl Default for ChartSettings {
  fn default() -> Self {
    Self {
      enabled: default_true(),
      samples: default_samples(),
      width: default_width(),
      height: default_height(),
    }
  }
}

impl Default for PersistenceSettings {
  fn default() -> Self {
    Self {
      enabled: default_true(),
      data_dir: default_data_dir(),
    }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "kelly-optimizer".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_initial_guess() -> f64 {
  0.25
}

fn default_tolerance() -> f64 {
  1e-6
}

fn default_max_iterations() -> u32 {
  10_000
}

fn default_kelly_multiplier() -> f64 {
  0.5
}

fn default_bankroll() -> f64 {
  1000.0
}

fn default_true() -> bool {
  true
}

fn default_samples() -> usize {
  1000
}

fn default_width() -> usize {
  64
}

fn default_height() -> usize {
  16
}

fn default_data_dir() -> String {
  "data".to_string()
}
