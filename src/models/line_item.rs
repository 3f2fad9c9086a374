//! Line item models for carts, bills and invoices.
//!
//! A [`LineItem`] is a snapshot of one row of a form. Numeric fields are
//! optional because the row may be half-filled while the cashier types;
//! calculations treat a missing value as zero.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::deserialize_form_decimal;

/// One row of a cart, bill or invoice.
///
/// # Example
///
/// ```
/// use supermart_engine::models::LineItem;
/// use rust_decimal::Decimal;
///
/// let item = LineItem::new("Maize flour 2kg", Decimal::from(2), Decimal::from(500), Decimal::from(16));
/// assert_eq!(item.quantity_or_zero(), Decimal::from(2));
///
/// let draft = LineItem::default();
/// assert_eq!(draft.unit_rate_or_zero(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineItem {
    /// Display text; never validated by the engine.
    #[serde(default)]
    pub description: String,
    /// Number of units.
    #[serde(default, deserialize_with = "deserialize_form_decimal")]
    pub quantity: Option<Decimal>,
    /// Price per unit.
    #[serde(default, deserialize_with = "deserialize_form_decimal")]
    pub unit_rate: Option<Decimal>,
    /// Tax percentage for this line (16 means 16%).
    #[serde(default, deserialize_with = "deserialize_form_decimal")]
    pub tax_rate: Option<Decimal>,
}

impl LineItem {
    /// Creates a fully populated line item.
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_rate: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            quantity: Some(quantity),
            unit_rate: Some(unit_rate),
            tax_rate: Some(tax_rate),
        }
    }

    /// Quantity, or zero while the field is blank.
    pub fn quantity_or_zero(&self) -> Decimal {
        self.quantity.unwrap_or(Decimal::ZERO)
    }

    /// Unit rate, or zero while the field is blank.
    pub fn unit_rate_or_zero(&self) -> Decimal {
        self.unit_rate.unwrap_or(Decimal::ZERO)
    }

    /// Tax rate, or zero while the field is blank.
    pub fn tax_rate_or_zero(&self) -> Decimal {
        self.tax_rate.unwrap_or(Decimal::ZERO)
    }
}

/// Opaque identifier assigned to a line item when it joins a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(Uuid);

impl LineItemId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LineItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for LineItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// The editable fields of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemField {
    /// Free-text description.
    Description,
    /// Number of units.
    Quantity,
    /// Price per unit.
    UnitRate,
    /// Tax percentage.
    TaxRate,
}

impl LineItemField {
    /// Returns the field name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineItemField::Description => "description",
            LineItemField::Quantity => "quantity",
            LineItemField::UnitRate => "unit_rate",
            LineItemField::TaxRate => "tax_rate",
        }
    }
}

/// Derived values for one line, at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTotals {
    /// `quantity * unit_rate`.
    pub amount: Decimal,
    /// `amount * tax_rate / 100`.
    pub tax_amount: Decimal,
    /// `amount + tax_amount`.
    pub total: Decimal,
}

/// Totals over a sequence of line items, each rounded once.
///
/// # Example
///
/// ```
/// use supermart_engine::models::AggregateResult;
///
/// let empty = AggregateResult::zero();
/// assert!(empty.grand_total.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Sum of line amounts before tax.
    pub subtotal: Decimal,
    /// Sum of line taxes.
    pub total_tax: Decimal,
    /// `subtotal + total_tax`.
    pub grand_total: Decimal,
}

impl AggregateResult {
    /// The totals of an empty sequence.
    pub fn zero() -> Self {
        let zero = crate::models::round_money(Decimal::ZERO);
        Self {
            subtotal: zero,
            total_tax: zero,
            grand_total: zero,
        }
    }
}
