//! Till checkout totals.
//!
//! The cart is a list of line items that all carry the jurisdiction's VAT
//! rate, so the totals come straight from the line-item aggregator. Change
//! and balance are worked out on the rounded total, which is what the
//! customer sees.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{
    CartLine, CheckoutSummary, LineItem, checked_round_money, ensure_non_negative,
};

use super::line_items::aggregate_line_items;

/// Computes cart totals and, once cash is tendered, change and balance.
///
/// # Arguments
///
/// * `cart` - Scanned lines; blank quantities or prices count as zero
/// * `vat_rate` - VAT percentage applied to every line
/// * `amount_tendered` - Cash handed over, if entered yet
///
/// # Examples
///
/// ```
/// use supermart_engine::calculation::compute_checkout;
/// use supermart_engine::models::CartLine;
/// use rust_decimal::Decimal;
///
/// let cart = vec![CartLine {
///     name: "Sugar 2kg".to_string(),
///     quantity: Some(Decimal::from(2)),
///     unit_price: Some(Decimal::from(250)),
/// }];
/// let summary = compute_checkout(&cart, Decimal::from(16), Some(Decimal::from(1000))).unwrap();
///
/// assert_eq!(summary.total, Decimal::from(580));
/// assert_eq!(summary.change_due, Some(Decimal::from(420)));
/// assert_eq!(summary.balance_due, Some(Decimal::ZERO));
/// ```
pub fn compute_checkout(
    cart: &[CartLine],
    vat_rate: Decimal,
    amount_tendered: Option<Decimal>,
) -> EngineResult<CheckoutSummary> {
    ensure_non_negative("vat_rate", vat_rate)?;
    if let Some(tendered) = amount_tendered {
        ensure_non_negative("amount_tendered", tendered)?;
    }

    let items: Vec<LineItem> = cart
        .iter()
        .map(|line| LineItem {
            description: line.name.clone(),
            quantity: line.quantity,
            unit_rate: line.unit_price,
            tax_rate: Some(vat_rate),
        })
        .collect();

    let totals = aggregate_line_items(&items)?;
    let total = totals.grand_total;

    let (change_due, balance_due) = match amount_tendered {
        Some(tendered) => {
            let change =
                checked_round_money("amount_tendered", (tendered - total).max(Decimal::ZERO))?;
            let balance = checked_round_money("balance_due", (total - tendered).max(Decimal::ZERO))?;
            (Some(change), Some(balance))
        }
        None => (None, None),
    };

    Ok(CheckoutSummary {
        subtotal: totals.subtotal,
        vat_rate,
        vat_amount: totals.total_tax,
        total,
        amount_tendered,
        change_due,
        balance_due,
    })
}
