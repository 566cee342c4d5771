//! # Inline Arithmetic
//!
//! File: cli/src/engine/arithmetic.rs
//! Author: Christi Mahu
//!
//! Evaluates a `MathCapture` produced by the matcher. The matcher's `\d` accepts
//! any Unicode decimal digit, so operands are folded to ASCII digits before
//! parsing (`٢` reads as `2`). Parsing is best-effort: an operand that is still
//! not a decimal number yields `BotError::Math`, which the responder turns into
//! an apology instead of failing the turn.
//!
//! Division by zero is not an error. It evaluates to `Answer::Infinity`.
//!
use crate::core::error::BotError;
use crate::engine::matcher::MathCapture;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Outcome of a successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Answer {
    Value(f64),
    /// Result of dividing by zero; rendered literally as `Infinity`.
    Infinity,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Value(value) => f.write_str(&format_number(*value)),
            Answer::Infinity => f.write_str("Infinity"),
        }
    }
}

pub fn evaluate(capture: &MathCapture) -> Result<Answer, BotError> {
    let lhs = parse_operand(&capture.lhs)?;
    let rhs = parse_operand(&capture.rhs)?;
    let value = match capture.operator.as_str() {
        "+" => lhs + rhs,
        "-" => lhs - rhs,
        "*" => lhs * rhs,
        "/" if rhs == 0.0 => return Ok(Answer::Infinity),
        "/" => lhs / rhs,
        other => {
            return Err(BotError::Math(format!("unsupported operator '{}'", other)));
        }
    };
    Ok(Answer::Value(value))
}

fn parse_operand(token: &str) -> Result<f64, BotError> {
    let digit = decimal_digit()?;
    let ascii: String = token.chars().map(|c| fold_digit(digit, c)).collect();
    ascii
        .parse::<f64>()
        .map_err(|e| BotError::Math(format!("operand '{}': {}", token, e)))
}

fn decimal_digit() -> Result<&'static Regex, BotError> {
    static DECIMAL_DIGIT: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    DECIMAL_DIGIT
        .get_or_init(|| Regex::new(r"\A\p{Nd}\z"))
        .as_ref()
        .map_err(|e| BotError::Math(format!("digit table unavailable: {}", e)))
}

fn is_decimal_digit(digit: &Regex, c: char) -> bool {
    let mut buf = [0u8; 4];
    digit.is_match(c.encode_utf8(&mut buf))
}

/// Maps a non-ASCII decimal digit to its ASCII counterpart; other characters pass through.
fn fold_digit(digit: &Regex, c: char) -> char {
    if c.is_ascii() || !is_decimal_digit(digit, c) {
        return c;
    }
    // Decimal digits come in runs of ten starting at zero. Some runs are adjacent,
    // so walk back to the start of the whole run and take the offset modulo ten.
    let mut zero = c as u32;
    while let Some(prev) = zero.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(digit, prev) {
            break;
        }
        zero -= 1;
    }
    char::from_digit((c as u32 - zero) % 10, 10).unwrap_or(c)
}

/// Renders a float the way a user expects to read it back: integral values keep
/// one decimal (`5.0`), very large or very small magnitudes switch to exponent
/// form (`1e+16`, `1.5e-05`), everything else is the shortest exact form.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        return exponent_form(value);
    }
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn exponent_form(value: f64) -> String {
    let raw = format!("{:e}", value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(lhs: &str, operator: &str, rhs: &str) -> MathCapture {
        MathCapture {
            lhs: lhs.into(),
            operator: operator.into(),
            rhs: rhs.into(),
        }
    }

    fn answer(lhs: &str, operator: &str, rhs: &str) -> String {
        evaluate(&capture(lhs, operator, rhs)).unwrap().to_string()
    }

    #[test]
    fn test_basic_operations() {
        assert_eq!(answer("2", "+", "3"), "5.0");
        assert_eq!(answer("2", "-", "3"), "-1.0");
        assert_eq!(answer("2.5", "*", "4"), "10.0");
        assert_eq!(answer("7", "/", "2"), "3.5");
        assert_eq!(answer("1", "/", "3"), "0.3333333333333333");
    }

    #[test]
    fn test_division_by_zero_is_infinity() {
        assert_eq!(evaluate(&capture("10", "/", "0")).unwrap(), Answer::Infinity);
        assert_eq!(answer("-3.5", "/", "0.0"), "Infinity");
        assert_eq!(answer("0", "/", "-0"), "Infinity");
    }

    #[test]
    fn test_non_ascii_decimal_digits() {
        // Arabic-Indic two plus three
        assert_eq!(answer("\u{0662}", "+", "\u{0663}"), "5.0");
        // Devanagari twelve times mathematical bold two
        assert_eq!(answer("\u{0967}\u{0968}", "*", "\u{1D7D0}"), "24.0");
        // Mathematical sans-serif bold five minus Arabic-Indic 0.5
        assert_eq!(answer("\u{1D7F1}", "-", "\u{0660}.\u{0665}"), "4.5");
        assert_eq!(answer("-\u{09EA}", "/", "\u{0ED0}"), "Infinity");
    }

    #[test]
    fn test_fold_digit_leaves_other_characters() {
        let digit = decimal_digit().unwrap();
        assert_eq!(fold_digit(digit, '7'), '7');
        assert_eq!(fold_digit(digit, '.'), '.');
        assert_eq!(fold_digit(digit, '\u{2163}'), '\u{2163}'); // Roman numeral four is not Nd
        assert_eq!(fold_digit(digit, '\u{1D7FF}'), '9');
    }

    #[test]
    fn test_unparseable_operand_is_an_error() {
        let err = evaluate(&capture("4", "+", "")).unwrap_err();
        assert!(matches!(err, BotError::Math(_)));
        assert!(err.to_string().contains("operand ''"));

        assert!(matches!(
            evaluate(&capture("1.2.3", "*", "2")),
            Err(BotError::Math(_))
        ));
        assert!(evaluate(&capture("\u{2163}", "+", "1")).is_err());
    }

    #[test]
    fn test_unknown_operator_is_an_error() {
        assert!(matches!(
            evaluate(&capture("4", "%", "2")),
            Err(BotError::Math(_))
        ));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-0.0), "-0.0");
        assert_eq!(format_number(123456.0), "123456.0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(-2.5e20), "-2.5e+20");
        assert_eq!(format_number(0.000015), "1.5e-05");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }
}
