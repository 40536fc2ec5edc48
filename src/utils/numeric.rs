//! Lenient parsing of human-entered numeric strings.
//!
//! Each entry point runs a cascade: a strict tier that honors the supplied
//! locale's grouping and decimal separators (tolerating leading symbols and
//! trailing text, the way a position-based formatter parse does), then
//! fallback tiers that strip junk characters and retry. The last tier's
//! failure propagates to the caller.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NumericError {
    /// A cleaned string was not a valid numeric literal.
    #[error("invalid numeric literal: {0:?}")]
    NumberFormat(String),
    /// The locale-aware tier found no parseable number.
    #[error("unparseable number: {0:?}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, NumericError>;

/// Grouping and decimal separator conventions for the strict parse tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NumericLocale {
    pub group: char,
    pub decimal: char,
}

impl NumericLocale {
    /// `1,234.56`
    pub const POINT_DECIMAL: Self = Self { group: ',', decimal: '.' };
    /// `1.234,56`
    pub const COMMA_DECIMAL: Self = Self { group: '.', decimal: ',' };
    /// `1'234.56`
    pub const APOSTROPHE_GROUP: Self = Self { group: '\'', decimal: '.' };
}

impl Default for NumericLocale {
    fn default() -> Self {
        Self::POINT_DECIMAL
    }
}

/// Parse an integer: strict locale tier, strict tier over a junk-stripped
/// copy, then [`simple_int_value`]. Fractional strict-tier results truncate
/// toward zero.
pub fn int_value(s: &str, locale: &NumericLocale) -> Result<i64> {
    strict_int(s, locale)
        .or_else(|_| strict_int(&strip_int_junk(s), locale))
        .or_else(|_| simple_int_value(s))
}

/// Strip the input to `[0-9-]` and parse it as a plain integer literal.
pub fn simple_int_value(s: &str) -> Result<i64> {
    let cleaned = strip_all_int(s);
    cleaned.parse::<i64>().map_err(|_| NumericError::NumberFormat(cleaned))
}

/// Parse a single-precision float through the same cascade as [`double_value`].
pub fn float_value(s: &str, locale: &NumericLocale) -> Result<f32> {
    strict_literal(s, locale)
        .or_else(|_| strict_literal(&strip_float_junk(s), locale))
        .and_then(|lit| lit.parse::<f32>().map_err(|_| NumericError::Parse(s.to_string())))
        .or_else(|_| simple_float_value(s))
}

/// Strip the input to `[0-9.-]` and parse it as a plain float literal.
pub fn simple_float_value(s: &str) -> Result<f32> {
    let cleaned = strip_all_float(s);
    cleaned.parse::<f32>().map_err(|_| NumericError::NumberFormat(cleaned))
}

/// Parse a double: strict locale tier, strict tier over a junk-stripped
/// copy, then [`simple_double_value`].
pub fn double_value(s: &str, locale: &NumericLocale) -> Result<f64> {
    strict_literal(s, locale)
        .or_else(|_| strict_literal(&strip_float_junk(s), locale))
        .and_then(|lit| lit.parse::<f64>().map_err(|_| NumericError::Parse(s.to_string())))
        .or_else(|_| simple_double_value(s))
}

/// Strip the input to `[0-9.-]` and parse it as a plain double literal.
pub fn simple_double_value(s: &str) -> Result<f64> {
    let cleaned = strip_all_float(s);
    cleaned.parse::<f64>().map_err(|_| NumericError::NumberFormat(cleaned))
}

/// Parse an exact arbitrary-precision decimal: strict locale tier, then
/// [`simple_decimal_value`]. No binary-float rounding at any tier.
pub fn decimal_value(s: &str, locale: &NumericLocale) -> Result<Decimal> {
    strict_decimal(s, locale).or_else(|_| simple_decimal_value(s))
}

/// Strip the input to `[0-9.-]` and convert it as an exact decimal literal.
pub fn simple_decimal_value(s: &str) -> Result<Decimal> {
    let cleaned = strip_all_float(s);
    Decimal::from_str(&cleaned).map_err(|_| NumericError::Parse(cleaned))
}

/// Lenient boolean: `"1"` and case-insensitive `"yes"` or `"true"` are
/// true; everything else, including `None`, is false.
pub fn bool_value(s: Option<&str>) -> bool {
    match s {
        Some(s) => s == "1" || s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("true"),
        None => false,
    }
}

fn strict_int(s: &str, locale: &NumericLocale) -> Result<i64> {
    let d = strict_decimal(s, locale)?;
    d.trunc().to_i64().ok_or_else(|| NumericError::Parse(s.to_string()))
}

fn strict_decimal(s: &str, locale: &NumericLocale) -> Result<Decimal> {
    let lit = strict_literal(s, locale)?;
    Decimal::from_str(&lit).map_err(|_| NumericError::Parse(s.to_string()))
}

/// Strict tier: extract the longest valid numeric run under `locale` and
/// normalize it to a plain literal (`-1234.56`). Scanning starts at the
/// first sign or digit; grouping separators ride along between integer
/// digits; the run ends at the first character that fits nowhere.
fn strict_literal(s: &str, locale: &NumericLocale) -> Result<String> {
    let mut chars = s.chars().skip_while(|c| !c.is_ascii_digit() && *c != '-' && *c != '+').peekable();

    let mut out = String::new();
    if let Some(&sign) = chars.peek().filter(|c| **c == '-' || **c == '+') {
        if sign == '-' {
            out.push('-');
        }
        chars.next();
    }

    let mut saw_digit = false;
    let mut saw_decimal = false;
    for c in chars {
        if c.is_ascii_digit() {
            out.push(c);
            saw_digit = true;
        } else if c == locale.group && saw_digit && !saw_decimal {
            // grouping separator between integer digits, dropped
        } else if c == locale.decimal && !saw_decimal {
            out.push('.');
            saw_decimal = true;
        } else {
            break;
        }
    }

    if !saw_digit {
        return Err(NumericError::Parse(s.to_string()));
    }
    if out.ends_with('.') {
        out.pop();
    }
    Ok(out)
}

/// Keep `[0-9.-]` plus the separator characters any supported locale uses,
/// so a junk-stripped string still parses under the strict tier.
fn strip_float_junk(s: &str) -> String {
    s.chars()
        .filter(|&c| c.is_ascii_digit() || matches!(c, '.' | '-' | '\'' | ','))
        .collect()
}

fn strip_int_junk(s: &str) -> String {
    s.chars()
        .filter(|&c| c.is_ascii_digit() || matches!(c, '-' | '\'' | ','))
        .collect()
}

fn strip_all_float(s: &str) -> String {
    s.chars().filter(|&c| c.is_ascii_digit() || c == '.' || c == '-').collect()
}

fn strip_all_int(s: &str) -> String {
    s.chars().filter(|&c| c.is_ascii_digit() || c == '-').collect()
}
