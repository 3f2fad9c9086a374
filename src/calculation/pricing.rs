//! Product pricing figures shown in the catalog.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::ensure_non_negative;

/// Markup of the selling price over the cost price, as a percentage.
///
/// `(selling - cost) / cost * 100` at full precision; the catalog shows it
/// to one decimal place. A product with no cost price has a margin of
/// zero. Selling below cost gives a negative margin.
///
/// # Examples
///
/// ```
/// use supermart_engine::calculation::product_margin;
/// use rust_decimal::Decimal;
///
/// assert_eq!(product_margin(Decimal::from(150), Decimal::from(120)).unwrap(), Decimal::from(25));
/// assert_eq!(product_margin(Decimal::from(150), Decimal::ZERO).unwrap(), Decimal::ZERO);
/// assert_eq!(product_margin(Decimal::from(90), Decimal::from(100)).unwrap(), Decimal::from(-10));
/// ```
pub fn product_margin(selling_price: Decimal, cost_price: Decimal) -> EngineResult<Decimal> {
    ensure_non_negative("selling_price", selling_price)?;
    ensure_non_negative("cost_price", cost_price)?;

    if cost_price.is_zero() {
        return Ok(Decimal::ZERO);
    }

    (selling_price - cost_price)
        .checked_div(cost_price)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| EngineError::invalid_argument("selling_price", "value too large"))
}
