//! Exact folding of number and operator lines.

use hex_codec::number::{
    fraction_digits, number_line, parse_number_text, Operator, NUMBER_LINE_PREFIX,
};
use hex_registry::PatternRegistry;

/// Digits beyond which `f64` decimals stop being trustworthy.
const MAX_SIGNIFICANT_DIGITS: usize = 15;

enum Item {
    Number(f64, String),
    Other(String),
}

impl Item {
    fn into_line(self) -> String {
        match self {
            Item::Number(_, line) | Item::Other(line) => line,
        }
    }
}

/// Fold `a b <operator>` line triples into one number line.
///
/// Works like an evaluation stack: number lines are pushed, and an operator
/// line combines the two numbers below it when [`combine_exact`] allows.
/// Anything that cannot be folded is kept as written.
pub fn simplify_lines(registry: &PatternRegistry, lines: Vec<String>) -> Vec<String> {
    let mut stack: Vec<Item> = Vec::with_capacity(lines.len());
    for line in lines {
        if let Some(value) = number_value(&line) {
            stack.push(Item::Number(value, line));
            continue;
        }
        let folded = registry.operator_named(&line).and_then(|op| match stack.as_slice() {
            [.., Item::Number(a, _), Item::Number(b, _)] => combine_exact(*a, *b, op),
            _ => None,
        });
        match folded {
            Some(value) => {
                stack.truncate(stack.len() - 2);
                stack.push(Item::Number(value, number_line(value)));
            }
            None => stack.push(Item::Other(line)),
        }
    }
    stack.into_iter().map(Item::into_line).collect()
}

fn number_value(line: &str) -> Option<f64> {
    let head = line.get(..NUMBER_LINE_PREFIX.len())?;
    if !head.eq_ignore_ascii_case(NUMBER_LINE_PREFIX) {
        return None;
    }
    parse_number_text(line)
}

/// `a op b`, only when the result carries no rounding error.
///
/// - add/subtract: the result has no more fraction digits than its operands
/// - multiply: one operand is a power of ten, or the result is an integer
/// - divide: the divisor is a power of ten, or the result is an integer
pub fn combine_exact(a: f64, b: f64, op: Operator) -> Option<f64> {
    let result = op.apply(a, b)?;
    if !result.is_finite() {
        return None;
    }
    let da = fraction_digits(a)?;
    let db = fraction_digits(b)?;
    match op {
        Operator::Add | Operator::Subtract => {
            (fraction_digits(result)? <= da.max(db)).then_some(result)
        }
        Operator::Multiply => {
            if is_exact_integer(result) {
                Some(result)
            } else if is_power_of_ten(a) || is_power_of_ten(b) {
                round_to(result, da + db)
            } else {
                None
            }
        }
        Operator::Divide => {
            if is_exact_integer(result) && result * b == a {
                Some(result)
            } else if let Some(exponent) = power_of_ten_exponent(b) {
                let digits = da as i32 + exponent;
                round_to(result, usize::try_from(digits.max(0)).ok()?)
            } else {
                None
            }
        }
    }
}

fn is_exact_integer(value: f64) -> bool {
    value.fract() == 0.0 && value.abs() < 9.0e15
}

fn round_to(value: f64, digits: usize) -> Option<f64> {
    if digits > MAX_SIGNIFICANT_DIGITS {
        return None;
    }
    let rounded: f64 = format!("{:.*}", digits, value).parse().ok()?;
    (fraction_digits(rounded)? <= digits).then_some(rounded)
}

fn is_power_of_ten(value: f64) -> bool {
    power_of_ten_exponent(value).is_some()
}

/// `k` such that `value == 10^k`.
fn power_of_ten_exponent(value: f64) -> Option<i32> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let text = value.to_string();
    if let Some(zeros) = text.strip_prefix('1') {
        return zeros
            .chars()
            .all(|c| c == '0')
            .then(|| zeros.len() as i32);
    }
    let fraction = text.strip_prefix("0.")?;
    let leading = fraction.strip_suffix('1')?;
    leading
        .chars()
        .all(|c| c == '0')
        .then(|| -(fraction.len() as i32))
}
