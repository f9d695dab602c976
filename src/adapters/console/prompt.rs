//! Interactive wager collection.
//!
//! Prompts the operator for the outcome count, each (net return, weight)
//! pair, and the bankroll. Numeric parsing re-prompts on bad input;
//! structural validation happens once in the domain constructor so the
//! solver never sees a malformed set.

use anyhow::{Context, Result};
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;

use crate::config::SizingSettings;
use crate::domain::outcome::{Outcome, OutcomeSet};
use crate::ports::input::{AnalysisRequest, OutcomeSource};

/// Interactive stdin/stdout implementation of [`OutcomeSource`].
pub struct InteractivePrompt {
    default_bankroll: f64,
}

impl InteractivePrompt {
    /// Create a prompt pre-filled from the sizing configuration.
    pub fn new(sizing: &SizingSettings) -> Self {
        Self {
            default_bankroll: sizing.default_bankroll,
        }
    }
}

impl OutcomeSource for InteractivePrompt {
    fn collect(&mut self) -> Result<AnalysisRequest> {
        let theme = ColorfulTheme::default();

        let count: usize = Input::with_theme(&theme)
            .with_prompt("Number of outcomes")
            .default(2)
            .validate_with(|n: &usize| {
                if *n >= 1 {
                    Ok(())
                } else {
                    Err("need at least one outcome")
                }
            })
            .interact_text()
            .context("Failed to read outcome count")?;

        let mut outcomes = Vec::with_capacity(count);
        for i in 1..=count {
            let net_return: f64 = Input::with_theme(&theme)
                .with_prompt(format!("Outcome {i}: net return per unit staked"))
                .interact_text()
                .context("Failed to read net return")?;

            let weight: f64 = Input::with_theme(&theme)
                .with_prompt(format!("Outcome {i}: probability weight"))
                .validate_with(|w: &f64| {
                    if *w >= 0.0 {
                        Ok(())
                    } else {
                        Err("weight must be non-negative")
                    }
                })
                .interact_text()
                .context("Failed to read weight")?;

            outcomes.push(Outcome { net_return, weight });
        }

        let outcomes = OutcomeSet::new(outcomes).context("Invalid outcome set")?;

        let bankroll: f64 = Input::with_theme(&theme)
            .with_prompt("Bankroll")
            .default(self.default_bankroll)
            .validate_with(|b: &f64| {
                if b.is_finite() && *b > 0.0 {
                    Ok(())
                } else {
                    Err("bankroll must be positive")
                }
            })
            .interact_text()
            .context("Failed to read bankroll")?;

        Ok(AnalysisRequest { outcomes, bankroll })
    }
}
