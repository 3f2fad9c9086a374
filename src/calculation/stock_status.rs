//! Stock status classification.
//!
//! Inventory and the product catalog share one threshold rule: nothing on
//! hand is out of stock, anything up to and including the minimum is low,
//! everything above it is in stock.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{
    StockLevel, StockStatus, checked_add, checked_mul, checked_round_money, ensure_count,
    ensure_non_negative,
};

/// Classifies a stock count against its minimum threshold.
///
/// An empty shelf is [`StockStatus::OutOfStock`] even when the minimum is
/// zero.
///
/// # Examples
///
/// ```
/// use supermart_engine::calculation::classify_stock;
/// use supermart_engine::models::StockStatus;
///
/// assert_eq!(classify_stock(0, 5).unwrap(), StockStatus::OutOfStock);
/// assert_eq!(classify_stock(5, 5).unwrap(), StockStatus::LowStock);
/// assert_eq!(classify_stock(6, 5).unwrap(), StockStatus::InStock);
/// ```
pub fn classify_stock(current: i64, minimum: i64) -> EngineResult<StockStatus> {
    ensure_count("current_stock", current)?;
    ensure_count("minimum_stock", minimum)?;
    Ok(status_for(current, minimum))
}

/// Share of shelf capacity in use, as a percentage in `[0, 100]`.
///
/// A zero capacity yields zero. Counts above capacity clamp to 100.
///
/// # Examples
///
/// ```
/// use supermart_engine::calculation::stock_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(stock_percentage(25, 100).unwrap(), Decimal::from(25));
/// assert_eq!(stock_percentage(7, 0).unwrap(), Decimal::ZERO);
/// assert_eq!(stock_percentage(150, 100).unwrap(), Decimal::ONE_HUNDRED);
/// ```
pub fn stock_percentage(current: i64, maximum: i64) -> EngineResult<Decimal> {
    ensure_count("current_stock", current)?;
    ensure_count("maximum_stock", maximum)?;
    Ok(percentage_of_capacity(current, maximum))
}

/// Number of products at or below their minimum, out-of-stock included.
pub fn count_low_stock(levels: &[StockLevel]) -> usize {
    levels
        .iter()
        .filter(|level| level.current_stock() <= level.minimum_stock())
        .count()
}

/// Value of stock on hand: the sum of `units * unit_price`, rounded once.
///
/// # Arguments
///
/// * `holdings` - `(units on hand, unit price)` pairs
///
/// # Examples
///
/// ```
/// use supermart_engine::calculation::inventory_value;
/// use rust_decimal::Decimal;
///
/// let value = inventory_value([(10, Decimal::from(120)), (3, Decimal::from(45))]).unwrap();
/// assert_eq!(value, Decimal::from(1335));
/// ```
pub fn inventory_value<I>(holdings: I) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = (i64, Decimal)>,
{
    let mut total = Decimal::ZERO;
    for (units, unit_price) in holdings {
        let units = ensure_count("current_stock", units)?;
        let unit_price = ensure_non_negative("unit_price", unit_price)?;
        let line = checked_mul("unit_price", Decimal::from(units), unit_price)?;
        total = checked_add("inventory_value", total, line)?;
    }
    checked_round_money("inventory_value", total)
}

/// Threshold rule on counts already known to be non-negative.
pub(crate) fn status_for(current: i64, minimum: i64) -> StockStatus {
    if current == 0 {
        StockStatus::OutOfStock
    } else if current <= minimum {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// Percentage of capacity on counts already known to be non-negative.
pub(crate) fn percentage_of_capacity(current: i64, maximum: i64) -> Decimal {
    if maximum == 0 {
        return Decimal::ZERO;
    }
    let percentage = Decimal::from(current) * Decimal::ONE_HUNDRED / Decimal::from(maximum);
    percentage.min(Decimal::ONE_HUNDRED)
}
