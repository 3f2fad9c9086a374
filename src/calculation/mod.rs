//! Calculation logic for the SuperMart engine.
//!
//! This module contains the rate-based tax split and its central/state
//! shares, line-item aggregation and the editable line-item list behind the
//! billing form, till checkout totals, stock status classification and
//! inventory summaries, catalog product margins, the password strength
//! meter and sign-up form validation.

mod checkout;
mod line_item_list;
mod line_items;
mod password_strength;
mod pricing;
mod signup;
mod stock_status;
mod tax_split;

pub use checkout::compute_checkout;
pub use line_item_list::{LineItemEntry, LineItemList};
pub use line_items::{aggregate_line_items, compute_line_totals};
pub use password_strength::{MIN_STRONG_LENGTH, score_password};
pub use pricing::product_margin;
pub use signup::validate_signup;
pub use stock_status::{
    classify_stock, count_low_stock, inventory_value, stock_percentage,
};
pub use tax_split::{compute_tax_split, split_tax_shares};

pub(crate) use stock_status::{percentage_of_capacity, status_for};
