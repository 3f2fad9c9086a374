//! Line-item aggregation.
//!
//! This module computes the derived values of each line item and folds them
//! into subtotal, total tax and grand total. Each line goes through the
//! exclusive tax split at full precision; the three sums are rounded once,
//! after folding, so rounding error does not compound across lines.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AggregateResult, LineItem, LineTotals, TaxMode, checked_add, checked_mul, checked_round_money,
    ensure_non_negative,
};

use super::tax_split::split_unrounded;

/// Computes amount, tax and total for one line at full precision.
///
/// Blank numeric fields count as zero, so a row that is still being typed
/// never fails. Negative values are rejected.
///
/// # Examples
///
/// ```
/// use supermart_engine::calculation::compute_line_totals;
/// use supermart_engine::models::LineItem;
/// use rust_decimal::Decimal;
///
/// let item = LineItem::new("Cooking oil 1L", Decimal::from(2), Decimal::from(500), Decimal::from(16));
/// let totals = compute_line_totals(&item).unwrap();
///
/// assert_eq!(totals.amount, Decimal::from(1000));
/// assert_eq!(totals.tax_amount, Decimal::from(160));
/// assert_eq!(totals.total, Decimal::from(1160));
/// ```
pub fn compute_line_totals(item: &LineItem) -> EngineResult<LineTotals> {
    let quantity = ensure_non_negative("quantity", item.quantity_or_zero())?;
    let unit_rate = ensure_non_negative("unit_rate", item.unit_rate_or_zero())?;
    let tax_rate = ensure_non_negative("tax_rate", item.tax_rate_or_zero())?;

    let amount = checked_mul("quantity", quantity, unit_rate)?;
    let split = split_unrounded(amount, tax_rate, TaxMode::Exclusive)?;

    Ok(LineTotals {
        amount: split.base_amount,
        tax_amount: split.tax_amount,
        total: split.total_amount,
    })
}

/// Folds line items into subtotal, total tax and grand total.
///
/// An empty sequence yields all zeros. Lines are visited in order, but the
/// sums do not depend on it.
///
/// # Arguments
///
/// * `items` - The line items, in display order
///
/// # Returns
///
/// The rounded [`AggregateResult`], or `InvalidArgument` naming the first
/// offending line (e.g. `items[2].quantity`) when a value is negative.
///
/// # Examples
///
/// ```
/// use supermart_engine::calculation::aggregate_line_items;
/// use supermart_engine::models::LineItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     LineItem::new("Rice 5kg", Decimal::from(2), Decimal::from(500), Decimal::from(16)),
///     LineItem::new("Milk 500ml", Decimal::from(1), Decimal::from(300), Decimal::ZERO),
/// ];
/// let totals = aggregate_line_items(&items).unwrap();
///
/// assert_eq!(totals.subtotal, Decimal::from(1300));
/// assert_eq!(totals.total_tax, Decimal::from(160));
/// assert_eq!(totals.grand_total, Decimal::from(1460));
/// ```
pub fn aggregate_line_items<'a, I>(items: I) -> EngineResult<AggregateResult>
where
    I: IntoIterator<Item = &'a LineItem>,
{
    let mut subtotal = Decimal::ZERO;
    let mut total_tax = Decimal::ZERO;

    for (index, item) in items.into_iter().enumerate() {
        let totals = compute_line_totals(item).map_err(|err| locate(err, index))?;
        subtotal = checked_add("subtotal", subtotal, totals.amount)?;
        total_tax = checked_add("total_tax", total_tax, totals.tax_amount)?;
    }

    let grand_total = checked_add("grand_total", subtotal, total_tax)?;

    Ok(AggregateResult {
        subtotal: checked_round_money("subtotal", subtotal)?,
        total_tax: checked_round_money("total_tax", total_tax)?,
        grand_total: checked_round_money("grand_total", grand_total)?,
    })
}

/// Prefixes a field error with the position of the line it came from.
fn locate(err: EngineError, index: usize) -> EngineError {
    match err {
        EngineError::InvalidArgument { field, message } => EngineError::InvalidArgument {
            field: format!("items[{}].{}", index, field),
            message,
        },
        other => other,
    }
}
