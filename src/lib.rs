//! Conversion core for the Synq time-unit converter.
//!
//! Everything here is pure: no logging, no I/O and no shared state, so the
//! presentation layer can call it on every keystroke.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod units;

pub use units::{unit_infos, Unit, UnitInfo, UnknownUnitError};

// Plain base-10 decimal with optional sign and exponent. Rejects "inf", "NaN"
// and thousands separators that `f64::from_str` alone would treat differently.
static DECIMAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").unwrap());

/// Why a raw input could not be turned into a conversion result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueParseError {
    Empty,
    InvalidNumber(String),
    /// The value or the converted result does not fit in a finite `f64`.
    OutOfRange(String),
}

impl fmt::Display for ValueParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueParseError::Empty => write!(f, "Value cannot be empty"),
            ValueParseError::InvalidNumber(input) => {
                write!(f, "'{}' is not a valid number", input)
            }
            ValueParseError::OutOfRange(input) => write!(f, "'{}' is out of range", input),
        }
    }
}

impl std::error::Error for ValueParseError {}

/// Parse user input as a finite decimal number, ignoring surrounding whitespace.
pub fn parse_value(raw_input: &str) -> Result<f64, ValueParseError> {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return Err(ValueParseError::Empty);
    }

    if !DECIMAL_REGEX.is_match(trimmed) {
        return Err(ValueParseError::InvalidNumber(trimmed.to_string()));
    }

    let value = trimmed
        .parse::<f64>()
        .map_err(|_| ValueParseError::InvalidNumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(ValueParseError::OutOfRange(trimmed.to_string()));
    }
    Ok(value)
}

/// Express `value`, given in `source` units, in `target` units.
#[inline]
pub fn convert_value(value: f64, source: Unit, target: Unit) -> f64 {
    value * source.seconds_per_unit() / target.seconds_per_unit()
}

/// Like [`convert`], but reports why the input was rejected instead of
/// collapsing every failure into zero.
pub fn try_convert(raw_input: &str, source: Unit, target: Unit) -> Result<f64, ValueParseError> {
    let value = parse_value(raw_input)?;
    let result = convert_value(value, source, target);

    if !result.is_finite() {
        return Err(ValueParseError::OutOfRange(raw_input.trim().to_string()));
    }
    Ok(result)
}

/// Convert raw user input from `source` to `target` units.
///
/// Unparsable input yields `0.0` so live feedback is never interrupted; use
/// [`try_convert`] when a bad input has to be told apart from a real zero.
///
/// # Examples
/// ```
/// use synq::{convert, Unit};
///
/// assert_eq!(convert("1", Unit::Days, Unit::Hours), 24.0);
/// assert_eq!(convert("  12.5  ", Unit::Minutes, Unit::Seconds), 750.0);
/// assert_eq!(convert("abc", Unit::Hours, Unit::Minutes), 0.0);
/// ```
pub fn convert(raw_input: &str, source: Unit, target: Unit) -> f64 {
    try_convert(raw_input, source, target).unwrap_or(0.0)
}

/// A single conversion as captured from the form: raw text plus both units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub raw_input: String,
    pub source: Unit,
    pub target: Unit,
}

impl ConversionRequest {
    pub fn new(raw_input: impl Into<String>, source: Unit, target: Unit) -> Self {
        Self {
            raw_input: raw_input.into(),
            source,
            target,
        }
    }

    pub fn evaluate(&self) -> f64 {
        convert(&self.raw_input, self.source, self.target)
    }
}

/// Render a result for display: whole numbers without decimals, everything
/// else with exactly two.
///
/// # Examples
/// ```
/// assert_eq!(synq::format_result(2.0), "2");
/// assert_eq!(synq::format_result(2.5), "2.50");
/// ```
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        // also catches -0.0
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// JS entry point for [`convert`].
#[wasm_bindgen]
pub fn convert_time(raw_input: &str, source: Unit, target: Unit) -> f64 {
    convert(raw_input, source, target)
}

/// JS entry point for [`format_result`].
#[wasm_bindgen]
pub fn format_time_result(value: f64) -> String {
    format_result(value)
}

/// Serialized list of `{ unit, label, seconds }` for every unit, in picker order.
#[wasm_bindgen]
pub fn unit_catalog() -> JsValue {
    serde_wasm_bindgen::to_value(&unit_infos()).unwrap_or(JsValue::NULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_accepts_plain_decimals() {
        assert_eq!(parse_value("42"), Ok(42.0));
        assert_eq!(parse_value(" -3.5 "), Ok(-3.5));
        assert_eq!(parse_value("+.25"), Ok(0.25));
        assert_eq!(parse_value("7."), Ok(7.0));
        assert_eq!(parse_value("1e3"), Ok(1000.0));
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        assert_eq!(parse_value(""), Err(ValueParseError::Empty));
        assert_eq!(parse_value("   "), Err(ValueParseError::Empty));
        for bad in ["abc", "1.2.3", "1,000", "12abc", "inf", "NaN", ".", "-", "1e"] {
            assert!(
                matches!(parse_value(bad), Err(ValueParseError::InvalidNumber(_))),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_value_rejects_overflow() {
        assert_eq!(
            parse_value("1e400"),
            Err(ValueParseError::OutOfRange("1e400".to_string()))
        );
    }

    #[test]
    fn test_try_convert_distinguishes_invalid_from_zero() {
        assert_eq!(try_convert("0", Unit::Hours, Unit::Seconds), Ok(0.0));
        assert!(try_convert("zero", Unit::Hours, Unit::Seconds).is_err());
        assert_eq!(convert("zero", Unit::Hours, Unit::Seconds), 0.0);
    }

    #[test]
    fn test_result_overflow_falls_back_to_zero() {
        let huge = "1e308";
        assert!(matches!(
            try_convert(huge, Unit::Days, Unit::Seconds),
            Err(ValueParseError::OutOfRange(_))
        ));
        assert_eq!(convert(huge, Unit::Days, Unit::Seconds), 0.0);
        assert_eq!(convert(huge, Unit::Seconds, Unit::Seconds), 1e308);
    }

    #[test]
    fn test_convert_value_closed_form() {
        assert_eq!(convert_value(2.0, Unit::Hours, Unit::Minutes), 120.0);
        assert_eq!(convert_value(90.0, Unit::Minutes, Unit::Hours), 1.5);
        assert_eq!(convert_value(-1.0, Unit::Days, Unit::Hours), -24.0);
    }

    #[test]
    fn test_conversion_request_evaluate() {
        let request = ConversionRequest::new("3600", Unit::Seconds, Unit::Hours);
        assert_eq!(request.evaluate(), 1.0);
        assert_eq!(request.evaluate(), request.evaluate());
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(2.0), "2");
        assert_eq!(format_result(2.5), "2.50");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(-24.0), "-24");
        assert_eq!(format_result(1.0 / 3.0), "0.33");
        assert_eq!(format_result(86400.0), "86400");
    }

    #[test]
    fn test_js_entry_points_match_core() {
        assert_eq!(convert_time("1", Unit::Days, Unit::Hours), 24.0);
        assert_eq!(format_time_result(0.5), "0.50");
    }
}
