use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, trace};
use crate::types::TipError;

/// Trait for converting various types into `Decimal` for tip calculations.
///
/// This trait allows users to pass `i32`, `f64`, `&str`, etc. directly into
/// constructors without needing to wrap them in `dec!()` or `Decimal::from()`.
pub trait IntoTipDecimal {
    fn into_tip_decimal(self) -> Result<Decimal, TipError>;
}

impl IntoTipDecimal for Decimal {
    fn into_tip_decimal(self) -> Result<Decimal, TipError> {
        Ok(self)
    }
}

macro_rules! impl_into_tip_decimal_int {
    ($($t:ty),*) => {
        $(
            impl IntoTipDecimal for $t {
                fn into_tip_decimal(self) -> Result<Decimal, TipError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_tip_decimal_int!(i32, u32, i64, u64, isize, usize);

macro_rules! impl_into_tip_decimal_float {
    ($($t:ty),*) => {
        $(
            impl IntoTipDecimal for $t {
                fn into_tip_decimal(self) -> Result<Decimal, TipError> {
                    Decimal::from_f64_retain(self as f64)
                        .ok_or_else(|| TipError::InvalidInput(format!("Invalid float value: {}", self)))
                }
            }
        )*
    };
}

impl_into_tip_decimal_float!(f32, f64);

impl IntoTipDecimal for &str {
    fn into_tip_decimal(self) -> Result<Decimal, TipError> {
        parse_number(self)
            .ok_or_else(|| TipError::InvalidInput(format!("Invalid number format: '{}'", self)))
    }
}

impl IntoTipDecimal for String {
    fn into_tip_decimal(self) -> Result<Decimal, TipError> {
        self.as_str().into_tip_decimal()
    }
}

/// Parses free text the way the input fields do: anything that is not a
/// number becomes zero.
///
/// Accepts plain (`12.50`, `.5`, `-3`) and scientific (`1e2`) notation,
/// ignoring surrounding whitespace. Empty text, words, `NaN`, `Infinity` and
/// grouped numbers such as `1,000` all yield `0`. Finite numbers beyond the
/// `Decimal` range clamp to `Decimal::MAX` / `Decimal::MIN`.
pub fn parse_or_zero(text: &str) -> Decimal {
    match parse_number(text) {
        Some(value) => value,
        None => {
            trace!(input = text, "unparseable numeric input, using zero");
            Decimal::ZERO
        }
    }
}

fn parse_number(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    // `Decimal::from_str` tolerates `_` separators; free text should not.
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    let parsed = if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)
    } else {
        Decimal::from_str(text)
    };
    parsed.ok().or_else(|| clamp_out_of_range(text))
}

/// Well-formed numbers `Decimal` cannot hold: too large clamps to the bound,
/// too precise keeps what `f64` retains.
fn clamp_out_of_range(text: &str) -> Option<Decimal> {
    let value: f64 = text.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    if value.abs() < 1.0 {
        return Some(Decimal::from_f64_retain(value).unwrap_or(Decimal::ZERO));
    }
    debug!(input = text, "numeric input outside decimal range, clamping");
    Some(if value.is_sign_negative() { Decimal::MIN } else { Decimal::MAX })
}
