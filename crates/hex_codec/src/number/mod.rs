//! Numeral patterns and arithmetic operator sequences.
//!
//! A numeral is a pattern whose signature starts with [`POSITIVE_PREFIX`]
//! or [`NEGATIVE_PREFIX`]. The remaining symbols drive an accumulator that
//! starts at zero:
//!
//! | symbol | effect |
//! |--------|--------|
//! | `w`    | +1     |
//! | `q`    | +5     |
//! | `e`    | +10    |
//! | `a`    | x2     |
//! | `d`    | /2     |
//!
//! Order matters: `aqaa` + `wa` is 2, `aqaa` + `aw` is 1.

mod encode;
mod operator;

pub use encode::{NumberComponent, NumberEncoder, NumberPatternGenerator, MAX_FRACTION_DIGITS};
pub use operator::{Operator, OperatorTable};

use hex_ir::{Angle, Pattern};

/// Signature prefix of a positive numeral.
pub const POSITIVE_PREFIX: &str = "aqaa";

/// Signature prefix of a negated numeral.
pub const NEGATIVE_PREFIX: &str = "dedd";

/// Display-name prefix used for numerals in text form.
pub const NUMBER_LINE_PREFIX: &str = "Numerical Reflection:";

/// Decode a single numeral pattern.
pub fn decode_pattern(pattern: &Pattern) -> Option<f64> {
    let angles = pattern.angles();
    let negate = if starts_with_symbols(angles, POSITIVE_PREFIX) {
        false
    } else if starts_with_symbols(angles, NEGATIVE_PREFIX) {
        true
    } else {
        return None;
    };

    let mut acc = 0.0_f64;
    for angle in &angles[POSITIVE_PREFIX.len()..] {
        match angle {
            Angle::Forward => acc += 1.0,
            Angle::Left => acc += 5.0,
            Angle::Right => acc += 10.0,
            Angle::LeftBack => acc *= 2.0,
            Angle::RightBack => acc /= 2.0,
            Angle::Back => return None,
        }
    }

    Some(if negate { -acc } else { acc })
}

fn starts_with_symbols(angles: &[Angle], prefix: &str) -> bool {
    angles.len() >= prefix.len()
        && angles
            .iter()
            .zip(prefix.chars())
            .all(|(angle, symbol)| angle.symbol() == symbol)
}

/// Decode a whole sequence into a single value.
///
/// Recognized shapes:
/// - `[A]`: a numeral
/// - `[A, B, op]`: `A op B` for any operator
/// - `[A, B, C, op1, op2]`: `A op2 (B op1 C)` with `op1` multiply/divide and
///   `op2` add/subtract
///
/// Any other shape, or a division by zero, yields `None`.
pub fn decode_sequence(patterns: &[Pattern], operators: &OperatorTable) -> Option<f64> {
    match patterns {
        [a] => decode_pattern(a),
        [a, b, op] => {
            let op = operators.operator_of(op)?;
            op.apply(decode_pattern(a)?, decode_pattern(b)?)
        }
        [a, b, c, op1, op2] => {
            let inner = operators.operator_of(op1)?;
            let outer = operators.operator_of(op2)?;
            if !matches!(inner, Operator::Multiply | Operator::Divide)
                || !matches!(outer, Operator::Add | Operator::Subtract)
            {
                return None;
            }
            let fraction = inner.apply(decode_pattern(b)?, decode_pattern(c)?)?;
            outer.apply(decode_pattern(a)?, fraction)
        }
        _ => None,
    }
}

/// Format a decoded value for display.
///
/// Integral values in `i32` range print as `i32`, other integral values as
/// `i64`, everything else with the shortest round-trip decimal form.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        if value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
            return (value as i32).to_string();
        }
        return (value as i64).to_string();
    }
    value.to_string()
}

/// Format a value for writing to disk.
///
/// Like [`format_number`] but never saturates: integral values beyond the
/// `i64` range are written with every digit in fixed-point form.
pub fn format_number_exact(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        if value.abs() < 9.0e18 {
            return format_number(value);
        }
        return format!("{value:.0}");
    }
    value.to_string()
}

/// Number of digits after the decimal point in the shortest round-trip
/// form of `value`. `None` for non-finite values.
pub fn fraction_digits(value: f64) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    let text = value.to_string();
    Some(text.split_once('.').map_or(0, |(_, frac)| frac.len()))
}

/// Parse the value of a `Numerical Reflection: <value>` line or a bare
/// numeral.
pub fn parse_number_text(text: &str) -> Option<f64> {
    let text = text.trim();
    let body = match text.get(..NUMBER_LINE_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(NUMBER_LINE_PREFIX) => {
            text[NUMBER_LINE_PREFIX.len()..].trim()
        }
        _ => text,
    };
    if body.is_empty()
        || !body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
    {
        return None;
    }
    body.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a value as a `Numerical Reflection:` line.
pub fn number_line(value: f64) -> String {
    format!("{NUMBER_LINE_PREFIX} {}", format_number_exact(value))
}
