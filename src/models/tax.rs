//! Tax split models.
//!
//! This module defines the [`TaxMode`] selector and the [`TaxBreakdown`]
//! produced by the rate-based tax split.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether an input amount already has tax folded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    /// The amount excludes tax; tax is added on top.
    #[default]
    Exclusive,
    /// The amount already includes tax; tax is extracted from it.
    Inclusive,
}

impl TaxMode {
    /// Returns the wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxMode::Exclusive => "exclusive",
            TaxMode::Inclusive => "inclusive",
        }
    }
}

/// Base, tax and total for a single amount.
///
/// Values returned by [`crate::calculation::compute_tax_split`] are rounded
/// to two decimals and satisfy `base_amount + tax_amount == total_amount`
/// within 0.01.
///
/// # Example
///
/// ```
/// use supermart_engine::models::TaxBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = TaxBreakdown {
///     base_amount: Decimal::new(100000, 2),
///     tax_amount: Decimal::new(16000, 2),
///     total_amount: Decimal::new(116000, 2),
/// };
/// assert_eq!(breakdown.base_amount + breakdown.tax_amount, breakdown.total_amount);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// The amount before tax.
    pub base_amount: Decimal,
    /// The tax portion.
    pub tax_amount: Decimal,
    /// The amount including tax.
    pub total_amount: Decimal,
}

/// A tax amount divided between the central and state authorities.
///
/// Shown next to the calculator result as CGST + SGST; the full amount is
/// what applies to inter-state (IGST) sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxShares {
    /// Central share.
    pub central: Decimal,
    /// State share; carries the odd cent when the tax does not halve evenly.
    pub state: Decimal,
}
