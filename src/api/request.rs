//! Request types for the SuperMart engine API.
//!
//! This module defines the JSON request bodies for the calculation
//! endpoints. Sign-up validation takes a [`SignUpForm`] as-is.
//!
//! [`SignUpForm`]: crate::models::SignUpForm

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    CartLine, LineItem, TaxMode, deserialize_form_decimal, deserialize_form_decimal_or_zero,
};

/// Request body for the `/tax/split` endpoint.
///
/// The rate is taken from `rate` when given, otherwise from `tax_class`,
/// otherwise the jurisdiction's default line rate applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxSplitRequest {
    /// The amount entered by the user; a blank box reads as zero.
    #[serde(deserialize_with = "deserialize_form_decimal_or_zero")]
    pub amount: Decimal,
    /// Whether `amount` excludes or includes tax.
    #[serde(default)]
    pub mode: TaxMode,
    /// Explicit tax percentage.
    #[serde(default, deserialize_with = "deserialize_form_decimal")]
    pub rate: Option<Decimal>,
    /// Configured tax class code (e.g., "zero_rated").
    #[serde(default)]
    pub tax_class: Option<String>,
}

/// Request body for the `/line-items/aggregate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRequest {
    /// The line items, in display order.
    pub items: Vec<LineItem>,
}

/// Request body for the `/checkout` endpoint.
///
/// VAT is charged at the configured jurisdiction rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// The scanned cart lines.
    pub items: Vec<CartLine>,
    /// Cash handed over by the customer, once entered.
    #[serde(default, deserialize_with = "deserialize_form_decimal")]
    pub amount_tendered: Option<Decimal>,
}

/// Request body for the `/stock/classify` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRequest {
    /// Units on hand.
    pub current_stock: i64,
    /// Reorder threshold.
    pub minimum_stock: i64,
    /// Shelf capacity; the fill percentage is only reported when given.
    #[serde(default)]
    pub maximum_stock: Option<i64>,
}

/// Request body for the `/pricing/margin` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginRequest {
    /// Shelf price per unit.
    #[serde(deserialize_with = "deserialize_form_decimal_or_zero")]
    pub selling_price: Decimal,
    /// Purchase cost per unit.
    #[serde(deserialize_with = "deserialize_form_decimal_or_zero")]
    pub cost_price: Decimal,
}

/// Request body for the `/password/strength` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordRequest {
    /// The password to score.
    pub password: String,
}
