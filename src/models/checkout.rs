//! Point-of-sale checkout models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::deserialize_form_decimal;

/// One product line in the till's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product name shown on the receipt.
    #[serde(default)]
    pub name: String,
    /// Units scanned.
    #[serde(default, deserialize_with = "deserialize_form_decimal")]
    pub quantity: Option<Decimal>,
    /// Shelf price per unit, before VAT.
    #[serde(default, deserialize_with = "deserialize_form_decimal")]
    pub unit_price: Option<Decimal>,
}

/// Totals shown on the till and the payment dialog.
///
/// `change_due` and `balance_due` are only present once the cashier has
/// entered the amount tendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    /// Sum of line amounts before VAT.
    pub subtotal: Decimal,
    /// VAT percentage applied to the cart.
    pub vat_rate: Decimal,
    /// VAT on the subtotal.
    pub vat_amount: Decimal,
    /// Amount the customer owes.
    pub total: Decimal,
    /// Cash handed over by the customer.
    pub amount_tendered: Option<Decimal>,
    /// Change to hand back, never negative.
    pub change_due: Option<Decimal>,
    /// Amount still owed when the tender falls short, never negative.
    pub balance_due: Option<Decimal>,
}
