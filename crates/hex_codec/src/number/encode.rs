//! Number encoding: value to numeral pattern sequence.
//!
//! Strategy, in order of preference:
//! 1. Integers: one numeral built by doubling and adding. Above 2^53 the
//!    numeral builds the value's mantissa, then doubles it.
//! 2. Dyadic fractions (`v * 2^k` integral for small `k`): one numeral
//!    ending in `k` halvings.
//! 3. Anything else: rounded to [`MAX_FRACTION_DIGITS`] places and written
//!    as `[n, d, divide]` or `[i, n, d, divide, add]`, which requires the
//!    operator patterns to be present in the [`OperatorTable`].

use hex_ir::{Direction, Pattern};

use super::{format_number, Operator, OperatorTable, NEGATIVE_PREFIX, POSITIVE_PREFIX};

/// Decimal places kept when a value needs a fraction sequence.
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Most halvings tried before falling back to a fraction sequence.
const MAX_HALVINGS: i32 = 16;

/// Largest magnitude encoded exactly (2^53).
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

/// One pattern of an encoded number together with its display name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NumberComponent {
    pub pattern: Pattern,
    pub display_name: String,
}

/// Expands a value into the patterns that denote it.
pub trait NumberEncoder: Send + Sync {
    /// Returns `None` when the value cannot be encoded.
    fn encode(&self, value: f64, operators: &OperatorTable) -> Option<Vec<NumberComponent>>;
}

/// Default encoder.
#[derive(Copy, Clone, Debug, Default)]
pub struct NumberPatternGenerator;

impl NumberPatternGenerator {
    /// Encode a value as a single numeral, if one exists.
    pub fn encode_single(value: f64) -> Option<Pattern> {
        if !value.is_finite() {
            return None;
        }
        let magnitude = value.abs();
        let negative = value.is_sign_negative() && magnitude != 0.0;
        if magnitude > MAX_EXACT {
            // Every f64 this large is an even integer, so halving is exact.
            let mut mantissa = magnitude;
            let mut doublings = 0;
            while mantissa > MAX_EXACT {
                mantissa /= 2.0;
                doublings += 1;
            }
            let mut signature = integer_signature(mantissa as u64);
            signature.extend(std::iter::repeat('a').take(doublings));
            return numeral(negative, &signature);
        }
        for halvings in 0..=MAX_HALVINGS {
            let scaled = magnitude * 2f64.powi(halvings);
            if scaled > MAX_EXACT {
                return None;
            }
            if scaled.fract() == 0.0 {
                let mut signature = integer_signature(scaled as u64);
                signature.extend(std::iter::repeat('d').take(halvings as usize));
                return numeral(negative, &signature);
            }
        }
        None
    }

    fn fraction_components(value: f64, operators: &OperatorTable) -> Option<Vec<NumberComponent>> {
        let negative = value < 0.0;
        let text = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
        let (int_text, frac_text) = text.split_once('.')?;
        let frac_text = frac_text.trim_end_matches('0');
        let whole: u64 = int_text.parse().ok()?;
        if frac_text.is_empty() {
            let whole = if negative { -(whole as f64) } else { whole as f64 };
            return Some(vec![number_component(Self::encode_single(whole)?, whole)]);
        }

        let mut numerator: u64 = frac_text.parse().ok()?;
        let mut denominator = 10u64.pow(frac_text.len() as u32);
        let divisor = gcd(numerator, denominator);
        numerator /= divisor;
        denominator /= divisor;

        let sign = if negative { -1.0 } else { 1.0 };
        let mut components = Vec::with_capacity(5);
        if whole != 0 {
            let whole = sign * whole as f64;
            components.push(number_component(Self::encode_single(whole)?, whole));
        }
        let numerator = sign * numerator as f64;
        let denominator = denominator as f64;
        components.push(number_component(Self::encode_single(numerator)?, numerator));
        components.push(number_component(Self::encode_single(denominator)?, denominator));
        components.push(operator_component(Operator::Divide, operators)?);
        if whole != 0 {
            components.push(operator_component(Operator::Add, operators)?);
        }
        Some(components)
    }
}

impl NumberEncoder for NumberPatternGenerator {
    fn encode(&self, value: f64, operators: &OperatorTable) -> Option<Vec<NumberComponent>> {
        if let Some(pattern) = Self::encode_single(value) {
            return Some(vec![number_component(pattern, value)]);
        }
        if !value.is_finite() || value.abs() > MAX_EXACT {
            return None;
        }
        Self::fraction_components(value, operators)
    }
}

fn number_component(pattern: Pattern, value: f64) -> NumberComponent {
    NumberComponent {
        pattern,
        display_name: format!("{} {}", super::NUMBER_LINE_PREFIX, format_number(value)),
    }
}

fn operator_component(op: Operator, operators: &OperatorTable) -> Option<NumberComponent> {
    Some(NumberComponent {
        pattern: operators.pattern_for(op)?.clone(),
        display_name: operators.name_for(op).to_string(),
    })
}

fn numeral(negative: bool, body: &str) -> Option<Pattern> {
    let (prefix, start_dir) = if negative {
        (NEGATIVE_PREFIX, Direction::NorthEast)
    } else {
        (POSITIVE_PREFIX, Direction::East)
    };
    let mut signature = String::with_capacity(prefix.len() + body.len());
    signature.push_str(prefix);
    signature.push_str(body);
    Pattern::from_signature(start_dir, &signature)
}

/// Accumulator program producing `n` from zero.
fn integer_signature(n: u64) -> String {
    let mut out = String::new();
    push_integer(n, &mut out);
    out
}

fn push_integer(n: u64, out: &mut String) {
    if n <= 20 {
        let mut rest = n;
        while rest >= 10 {
            out.push('e');
            rest -= 10;
        }
        if rest >= 5 {
            out.push('q');
            rest -= 5;
        }
        for _ in 0..rest {
            out.push('w');
        }
        return;
    }
    push_integer(n / 2, out);
    out.push('a');
    if n % 2 == 1 {
        out.push('w');
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}
