//! Terminal growth chart.
//!
//! Renders the sampled growth curve as a fixed-size block-character
//! chart. The curve is downsampled to one value per column; markers for
//! the full and scaled Kelly fractions hang above the filled area.

use crate::ports::render::CurvePoint;

/// Render the curve into a multi-line string.
///
/// `optimal` and `fractional` are bankroll fractions inside the sampled
/// domain; their columns are marked with `│` and `┊` respectively.
pub fn render(
    curve: &[CurvePoint],
    optimal: f64,
    fractional: f64,
    width: usize,
    height: usize,
) -> String {
    debug_assert!(curve.len() >= 2 && width >= 2 && height >= 2);

    let n = curve.len();
    let column_values: Vec<f64> = (0..width)
        .map(|col| curve[col * (n - 1) / (width - 1)].expected_value)
        .collect();

    let min = column_values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = column_values
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    // Filled height per column, 0..=height-1. A flat curve sits mid-chart.
    let levels: Vec<usize> = column_values
        .iter()
        .map(|&value| {
            if span <= f64::EPSILON {
                height / 2
            } else {
                (((value - min) / span) * (height - 1) as f64).round() as usize
            }
        })
        .collect();

    let domain_end = curve[n - 1].fraction;
    let column_of = |fraction: f64| -> usize {
        if domain_end <= 0.0 {
            0
        } else {
            let col = ((fraction / domain_end) * (width - 1) as f64).round();
            (col as usize).min(width - 1)
        }
    };
    let optimal_col = column_of(optimal);
    let fractional_col = column_of(fractional);

    let mut out = String::new();
    out.push_str(&format!(
        "  growth factor per round, f in [0, {domain_end:.4}]\n"
    ));
    for row in (0..height).rev() {
        out.push_str("  ");
        for (col, &level) in levels.iter().enumerate() {
            let glyph = if level >= row {
                '█'
            } else if col == optimal_col {
                '│'
            } else if col == fractional_col {
                '┊'
            } else {
                ' '
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "  y: [{min:.4}, {max:.4}]   │ full Kelly f = {optimal:.4}   ┊ scaled f = {fractional:.4}\n"
    ));
    out
}
