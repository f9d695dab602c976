//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters, and
//! providing clear error messages for misconfiguration. A missing file
//! is not an error: the tool runs fine on built-in defaults.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns a detailed error if:
/// - The file exists but can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let config = if path.exists() {
    let content = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
      .with_context(|| format!("Failed to parse {}", path.display()))?
  } else {
    AppConfig::default()
  };

  validate_config(&config)?;

  info!(
    initial_guess = config.solver.initial_guess,
    tolerance = config.solver.tolerance,
    kelly_multiplier = config.sizing.kelly_multiplier,
    "Configuration loaded"
  );

  Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
  // Solver validation
  anyhow::ensure!(
    config.solver.initial_guess.is_finite() && config.solver.initial_guess > 0.0,
    "solver initial_guess must be positive and finite, got {}",
    config.solver.initial_guess
  );
  anyhow::ensure!(
    config.solver.tolerance.is_finite() && config.solver.tolerance > 0.0,
    "solver tolerance must be positive and finite, got {}",
    config.solver.tolerance
  );
  anyhow::ensure!(
    config.solver.max_iterations > 0,
    "solver max_iterations must be positive"
  );

  // Sizing validation
  anyhow::ensure!(
    config.sizing.kelly_multiplier > 0.0 && config.sizing.kelly_multiplier <= 1.0,
    "Kelly multiplier must be in (0, 1], got {}",
    config.sizing.kelly_multiplier
  );
  anyhow::ensure!(
    config.sizing.default_bankroll.is_finite() && config.sizing.default_bankroll > 0.0,
    "default_bankroll must be positive and finite, got {}",
    config.sizing.default_bankroll
  );

  // Chart validation
  anyhow::ensure!(
    config.chart.samples >= 2,
    "chart samples must be at least 2, got {}",
    config.chart.samples
  );
  anyhow::ensure!(
    config.chart.width >= 16 && config.chart.height >= 4,
    "chart must be at least 16x4, got {}x{}",
    config.chart.width,
    config.chart.height
  );

  // Persistence validation
  anyhow::ensure!(
    !config.persistence.data_dir.is_empty(),
    "persistence data_dir must not be empty"
  );

  Ok(())
}
