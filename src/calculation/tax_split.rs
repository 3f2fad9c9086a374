//! Rate-based tax split.
//!
//! This module splits a single amount into base, tax and total for either
//! tax mode. The same arithmetic backs the VAT calculator, the POS cart and
//! billing line items.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    MONEY_DECIMAL_PLACES, TaxBreakdown, TaxMode, TaxShares, checked_add, checked_round_money,
    ensure_non_negative, percent_of, round_money,
};

/// Splits an amount into base, tax and total at the given rate.
///
/// In [`TaxMode::Exclusive`] the amount is the base and tax is added on
/// top. In [`TaxMode::Inclusive`] the amount is the total and the base is
/// `amount / (1 + rate / 100)`. All three outputs are rounded to two
/// decimals independently, after the arithmetic is done.
///
/// # Arguments
///
/// * `amount` - The amount entered by the user
/// * `rate` - Tax percentage (16 means 16%); zero is valid
/// * `mode` - Whether `amount` excludes or includes tax
///
/// # Returns
///
/// The rounded [`TaxBreakdown`], or `InvalidArgument` if `amount` or `rate`
/// is negative or the result does not fit in a decimal.
///
/// # Examples
///
/// ## VAT on top of a price
///
/// ```
/// use supermart_engine::calculation::compute_tax_split;
/// use supermart_engine::models::TaxMode;
/// use rust_decimal::Decimal;
///
/// let split = compute_tax_split(Decimal::from(1000), Decimal::from(16), TaxMode::Exclusive).unwrap();
/// assert_eq!(split.tax_amount, Decimal::from(160));
/// assert_eq!(split.total_amount, Decimal::from(1160));
/// ```
///
/// ## VAT extracted from a shelf price
///
/// ```
/// use supermart_engine::calculation::compute_tax_split;
/// use supermart_engine::models::TaxMode;
/// use rust_decimal::Decimal;
///
/// let split = compute_tax_split(Decimal::from(1160), Decimal::from(16), TaxMode::Inclusive).unwrap();
/// assert_eq!(split.base_amount, Decimal::from(1000));
/// assert_eq!(split.tax_amount, Decimal::from(160));
/// ```
pub fn compute_tax_split(amount: Decimal, rate: Decimal, mode: TaxMode) -> EngineResult<TaxBreakdown> {
    ensure_non_negative("amount", amount)?;
    ensure_non_negative("rate", rate)?;

    let raw = split_unrounded(amount, rate, mode)?;

    Ok(TaxBreakdown {
        base_amount: checked_round_money("amount", raw.base_amount)?,
        tax_amount: checked_round_money("amount", raw.tax_amount)?,
        total_amount: checked_round_money("amount", raw.total_amount)?,
    })
}

/// The split at full precision. Inputs must already be validated.
pub(crate) fn split_unrounded(
    amount: Decimal,
    rate: Decimal,
    mode: TaxMode,
) -> EngineResult<TaxBreakdown> {
    match mode {
        TaxMode::Exclusive => {
            let tax_amount = percent_of("amount", amount, rate)?;
            let total_amount = checked_add("amount", amount, tax_amount)?;
            Ok(TaxBreakdown {
                base_amount: amount,
                tax_amount,
                total_amount,
            })
        }
        TaxMode::Inclusive => {
            if rate.is_zero() {
                return Ok(TaxBreakdown {
                    base_amount: amount,
                    tax_amount: Decimal::ZERO,
                    total_amount: amount,
                });
            }

            let divisor = checked_add("rate", Decimal::ONE, rate / Decimal::ONE_HUNDRED)?;
            let base_amount = amount
                .checked_div(divisor)
                .ok_or_else(|| EngineError::invalid_argument("amount", "value too large"))?;

            Ok(TaxBreakdown {
                base_amount,
                tax_amount: amount - base_amount,
                total_amount: amount,
            })
        }
    }
}

/// Halves a tax amount into central and state shares.
///
/// The tax is first rounded to currency precision; the central share is
/// truncated to the cent and the state share takes the remainder, so the
/// two always add back to the rounded tax exactly.
///
/// # Examples
///
/// ```
/// use supermart_engine::calculation::split_tax_shares;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let shares = split_tax_shares(Decimal::from_str("0.05").unwrap()).unwrap();
/// assert_eq!(shares.central, Decimal::from_str("0.02").unwrap());
/// assert_eq!(shares.state, Decimal::from_str("0.03").unwrap());
/// ```
pub fn split_tax_shares(tax_amount: Decimal) -> EngineResult<TaxShares> {
    ensure_non_negative("tax_amount", tax_amount)?;

    let total = checked_round_money("tax_amount", tax_amount)?;
    let mut central = (total / Decimal::TWO)
        .round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::ToZero);
    central.rescale(MONEY_DECIMAL_PLACES);
    let state = round_money(total - central);

    Ok(TaxShares { central, state })
}
