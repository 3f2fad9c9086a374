//! Monetary helpers shared by every calculation.
//!
//! Amounts and percentage rates are plain [`Decimal`] values. Results are
//! rounded to currency precision only at the point of output, using
//! round-half-away-from-zero.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, de};

use crate::error::{EngineError, EngineResult};

/// Number of decimal places in a displayed monetary amount.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a value to currency precision.
///
/// Midpoints round away from zero and the result carries exactly two
/// decimal places, so it serializes as e.g. `"1160.00"`. Values with more
/// than 26 integer digits have no room for the extra places and keep a
/// smaller scale; calculations round through [`checked_round_money`]
/// instead, which rejects them.
///
/// # Examples
///
/// ```
/// use supermart_engine::models::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("2.345").unwrap()).to_string(), "2.35");
/// assert_eq!(round_money(Decimal::from(160)).to_string(), "160.00");
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}

/// Rounds like [`round_money`], reporting a value too large to carry two
/// decimal places as `InvalidArgument` on `field`.
pub fn checked_round_money(field: &str, value: Decimal) -> EngineResult<Decimal> {
    let rounded = round_money(value);
    if rounded.scale() != MONEY_DECIMAL_PLACES {
        return Err(EngineError::invalid_argument(field, "value too large"));
    }
    Ok(rounded)
}

/// Rejects negative values for the named field.
pub fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::invalid_argument(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(value)
}

/// Parses the text of a numeric form field.
///
/// A blank field is `None`, which calculations treat as zero. Text that is
/// not a number is rejected so the previous valid result can stay on screen.
///
/// # Examples
///
/// ```
/// use supermart_engine::models::parse_form_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_form_decimal("quantity", " 3 ").unwrap(), Some(Decimal::from(3)));
/// assert_eq!(parse_form_decimal("quantity", "").unwrap(), None);
/// assert!(parse_form_decimal("quantity", "three").is_err());
/// ```
pub fn parse_form_decimal(field: &str, text: &str) -> EngineResult<Option<Decimal>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map(Some)
        .map_err(|_| EngineError::invalid_argument(field, format!("'{}' is not a number", text)))
}

/// A numeric form field as it arrives over JSON: a number, or the raw text
/// of the input box.
#[derive(Deserialize)]
#[serde(untagged)]
enum FormNumber {
    Number(Decimal),
    Text(String),
}

/// Deserializes an optional numeric form field.
///
/// Accepts a JSON number, numeric text, blank text or `null`. Blank text
/// and `null` become `None`, which calculations treat as zero. Use with
/// `#[serde(default, deserialize_with = "deserialize_form_decimal")]`.
///
/// # Examples
///
/// ```
/// use supermart_engine::models::deserialize_form_decimal;
/// use rust_decimal::Decimal;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Row {
///     #[serde(default, deserialize_with = "deserialize_form_decimal")]
///     quantity: Option<Decimal>,
/// }
///
/// let row: Row = serde_json::from_str(r#"{"quantity": ""}"#).unwrap();
/// assert_eq!(row.quantity, None);
///
/// let row: Row = serde_json::from_str(r#"{"quantity": "2"}"#).unwrap();
/// assert_eq!(row.quantity, Some(Decimal::from(2)));
/// ```
pub fn deserialize_form_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FormNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FormNumber::Number(value)) => Ok(Some(value)),
        Some(FormNumber::Text(text)) => parse_form_decimal("value", &text)
            .map_err(|_| de::Error::custom(format!("'{}' is not a number", text.trim()))),
    }
}

/// Like [`deserialize_form_decimal`] for a field that must be present:
/// blank text and `null` read as zero.
pub fn deserialize_form_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_form_decimal(deserializer).map(|value| value.unwrap_or(Decimal::ZERO))
}

pub(crate) fn checked_mul(field: &str, lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| EngineError::invalid_argument(field, "value too large"))
}

pub(crate) fn checked_add(field: &str, lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| EngineError::invalid_argument(field, "value too large"))
}

/// `amount * rate / 100` with overflow reported against `field`.
pub(crate) fn percent_of(field: &str, amount: Decimal, rate: Decimal) -> EngineResult<Decimal> {
    let scaled = checked_mul(field, amount, rate)?;
    scaled
        .checked_div(Decimal::ONE_HUNDRED)
        .ok_or_else(|| EngineError::invalid_argument(field, "value too large"))
}
