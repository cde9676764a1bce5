//! Sequence to file text.
//!
//! A sequence that decodes to one "clean" number is written as a single
//! `Numerical Reflection:` line. Everything else is written one line per
//! pattern, after which runs of number and operator lines are folded where
//! the result is exact.

mod simplify;

pub use simplify::simplify_lines;

use hex_codec::number::{fraction_digits, number_line};
use hex_ir::Pattern;
use hex_registry::PatternRegistry;

/// Most fraction digits a consolidated number may have.
pub const MAX_CONSOLIDATED_DIGITS: usize = 3;

/// Render a sequence as file text, one directive per line.
pub fn render_sequence(registry: &PatternRegistry, patterns: &[Pattern]) -> String {
    let lines = match registry.decode_number(patterns) {
        Some(value) if is_consolidatable(value) => vec![number_line(value)],
        _ => {
            let lines = patterns
                .iter()
                .map(|pattern| {
                    registry
                        .resolve(pattern)
                        .unwrap_or_else(|| pattern.to_string())
                })
                .collect();
            simplify_lines(registry, lines)
        }
    };

    let mut text = lines.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

/// Whether a decoded value may replace its whole sequence.
///
/// Integers always qualify. Fractions qualify with at most
/// [`MAX_CONSOLIDATED_DIGITS`] digits unless those digits are one repeated
/// digit filling the whole width, like `0.333`.
pub fn is_consolidatable(value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    if value.fract() == 0.0 {
        return true;
    }
    match fraction_digits(value) {
        Some(digits) if digits <= MAX_CONSOLIDATED_DIGITS => !is_repeating_run(value),
        _ => false,
    }
}

fn is_repeating_run(value: f64) -> bool {
    let text = value.to_string();
    let Some((_, fraction)) = text.split_once('.') else {
        return false;
    };
    let mut digits = fraction.chars();
    let Some(first) = digits.next() else {
        return false;
    };
    fraction.len() == MAX_CONSOLIDATED_DIGITS && digits.all(|d| d == first)
}
