//! Core data models for the calculation engine.
//!
//! Every model is a value type computed on demand from caller input; none
//! carries identity beyond a single call, except the ids handed out by
//! [`crate::calculation::LineItemList`].

mod checkout;
mod line_item;
mod money;
mod password;
mod signup;
mod stock;
mod tax;

pub use checkout::{CartLine, CheckoutSummary};
pub use line_item::{AggregateResult, LineItem, LineItemField, LineItemId, LineTotals};
pub use money::{
    MONEY_DECIMAL_PLACES, checked_round_money, deserialize_form_decimal, deserialize_form_decimal_or_zero,
    ensure_non_negative, parse_form_decimal, round_money,
};
pub use password::{MAX_STRENGTH_SCORE, PasswordStrength, STRENGTH_LABELS};
pub use signup::{SignUpForm, SignUpValidation};
pub use stock::{StockLevel, StockStatus};
pub use tax::{TaxBreakdown, TaxMode, TaxShares};

pub(crate) use money::{checked_add, checked_mul, percent_of};
pub(crate) use stock::ensure_count;
