//! Console report rendering.
//!
//! Formats the analysis into an outcomes table, a sizing table, solver
//! diagnostics, and the terminal growth chart.

use anyhow::Result;
use owo_colors::OwoColorize;
use tabled::{Table, Tabled};

use crate::config::ChartSettings;
use crate::ports::render::{AnalysisReport, ReportSink};

use super::chart;

#[derive(Tabled)]
struct OutcomeRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Net Return")]
    net_return: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Probability")]
    probability: String,
}

#[derive(Tabled)]
struct SizingRow {
    #[tabled(rename = "Sizing")]
    label: String,
    #[tabled(rename = "Fraction")]
    fraction: String,
    #[tabled(rename = "Growth/Round")]
    growth_factor: String,
    #[tabled(rename = "Log Growth")]
    log_growth: String,
    #[tabled(rename = "Stake")]
    stake: String,
}

/// Console implementation of [`ReportSink`].
pub struct ConsoleReport {
    chart: ChartSettings,
}

impl ConsoleReport {
    /// Create a report sink with the given chart settings.
    pub fn new(chart: &ChartSettings) -> Self {
        Self {
            chart: chart.clone(),
        }
    }
}

impl ReportSink for ConsoleReport {
    fn present(&mut self, report: &AnalysisReport) -> Result<()> {
        println!();
        println!(
            "  {}   {}",
            "Kelly analysis".bold(),
            format!("bankroll {:.2}", report.bankroll).dimmed()
        );
        println!();

        let outcome_rows: Vec<OutcomeRow> = report
            .outcomes
            .iter()
            .zip(&report.probabilities)
            .enumerate()
            .map(|(i, (outcome, probability))| OutcomeRow {
                index: i + 1,
                net_return: format!("{:+.4}", outcome.net_return),
                weight: format!("{:.4}", outcome.weight),
                probability: format!("{probability:.4}"),
            })
            .collect();
        print_indented(&Table::new(outcome_rows).to_string());
        println!();

        if report.recommendations.is_empty() {
            println!(
                "  {}",
                "No positive edge: expected net return is zero or negative. Sit this one out."
                    .yellow()
            );
            println!();
            return Ok(());
        }

        let sizing_rows: Vec<SizingRow> = report
            .recommendations
            .iter()
            .map(|rec| SizingRow {
                label: rec.label.clone(),
                fraction: format!("{:.4}", rec.fraction),
                growth_factor: format!("{:.6}", rec.expected_value),
                log_growth: format!("{:+.6}", rec.log_growth),
                stake: format!("{:.2}", rec.stake),
            })
            .collect();
        print_indented(&Table::new(sizing_rows).to_string());
        println!();

        let mut note = format!(
            "converged in {} iteration{}",
            report.solution.iterations,
            if report.solution.iterations == 1 { "" } else { "s" }
        );
        if report.solution.clamped {
            note.push_str(", negative overshoot clamped once");
        }
        println!("  {}", note.dimmed());

        if self.chart.enabled && !report.curve.is_empty() {
            let fractional = report
                .recommendations
                .last()
                .map_or(report.solution.fraction, |rec| rec.fraction);
            println!();
            print!(
                "{}",
                chart::render(
                    &report.curve,
                    report.solution.fraction,
                    fractional,
                    self.chart.width,
                    self.chart.height,
                )
            );
        }
        println!();
        Ok(())
    }
}

fn print_indented(table: &str) {
    for line in table.lines() {
        println!("  {line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::Outcome;
    use crate::domain::solver::Solution;
    use crate::ports::render::Recommendation;

    #[test]
    fn test_present_renders_without_error() {
        let mut sink = ConsoleReport::new(&ChartSettings::default());
        let report = AnalysisReport {
            bankroll: 1000.0,
            outcomes: vec![
                Outcome { net_return: 1.0, weight: 0.6 },
                Outcome { net_return: -1.0, weight: 0.4 },
            ],
            probabilities: vec![0.6, 0.4],
            solution: Solution {
                fraction: 0.2,
                expected_value: 1.020339,
                iterations: 4,
                clamped: false,
            },
            recommendations: vec![Recommendation {
                label: "Full Kelly".to_string(),
                fraction: 0.2,
                log_growth: 0.020135,
                expected_value: 1.020339,
                stake: 200.0,
            }],
            curve: Vec::new(),
        };

        assert!(sink.present(&report).is_ok());
    }

    #[test]
    fn test_present_no_edge_report() {
        let mut sink = ConsoleReport::new(&ChartSettings::default());
        let report = AnalysisReport {
            bankroll: 500.0,
            outcomes: vec![Outcome { net_return: -1.0, weight: 1.0 }],
            probabilities: vec![1.0],
            solution: Solution {
                fraction: 0.0,
                expected_value: 0.0,
                iterations: 0,
                clamped: false,
            },
            recommendations: Vec::new(),
            curve: Vec::new(),
        };

        assert!(sink.present(&report).is_ok());
    }
}
