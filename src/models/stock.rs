//! Stock level models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Coarse classification of inventory sufficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// Nothing left on hand.
    OutOfStock,
    /// At or below the minimum threshold.
    LowStock,
    /// Above the minimum threshold.
    InStock,
}

impl StockStatus {
    /// Human-readable label, e.g. "low stock".
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out of stock",
            StockStatus::LowStock => "low stock",
            StockStatus::InStock => "in stock",
        }
    }
}

/// Stock counts for one product at one location.
///
/// Only built through [`StockLevel::new`]; deserialization runs the same
/// checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StockCounts")]
pub struct StockLevel {
    current_stock: i64,
    minimum_stock: i64,
    maximum_stock: i64,
}

/// Unchecked wire form of a [`StockLevel`].
#[derive(Deserialize)]
struct StockCounts {
    current_stock: i64,
    minimum_stock: i64,
    maximum_stock: i64,
}

impl TryFrom<StockCounts> for StockLevel {
    type Error = EngineError;

    fn try_from(counts: StockCounts) -> EngineResult<Self> {
        StockLevel::new(counts.current_stock, counts.minimum_stock, counts.maximum_stock)
    }
}

impl StockLevel {
    /// Creates a stock level, rejecting negative counts and a maximum below
    /// the minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// use supermart_engine::models::{StockLevel, StockStatus};
    ///
    /// let level = StockLevel::new(4, 5, 50).unwrap();
    /// assert_eq!(level.status(), StockStatus::LowStock);
    ///
    /// assert!(StockLevel::new(4, 10, 5).is_err());
    /// ```
    pub fn new(current_stock: i64, minimum_stock: i64, maximum_stock: i64) -> EngineResult<Self> {
        ensure_count("current_stock", current_stock)?;
        ensure_count("minimum_stock", minimum_stock)?;
        ensure_count("maximum_stock", maximum_stock)?;

        if maximum_stock < minimum_stock {
            return Err(EngineError::invalid_argument(
                "maximum_stock",
                format!(
                    "must be at least the minimum stock ({} < {})",
                    maximum_stock, minimum_stock
                ),
            ));
        }

        Ok(Self {
            current_stock,
            minimum_stock,
            maximum_stock,
        })
    }

    /// Units on hand.
    pub fn current_stock(&self) -> i64 {
        self.current_stock
    }

    /// Reorder threshold.
    pub fn minimum_stock(&self) -> i64 {
        self.minimum_stock
    }

    /// Shelf capacity.
    pub fn maximum_stock(&self) -> i64 {
        self.maximum_stock
    }

    /// Classifies the current stock against the minimum threshold.
    pub fn status(&self) -> StockStatus {
        crate::calculation::status_for(self.current_stock, self.minimum_stock)
    }

    /// Share of shelf capacity in use, clamped to `[0, 100]`.
    pub fn fill_percentage(&self) -> Decimal {
        crate::calculation::percentage_of_capacity(self.current_stock, self.maximum_stock)
    }
}

/// Rejects a negative stock count.
pub(crate) fn ensure_count(field: &str, value: i64) -> EngineResult<i64> {
    if value < 0 {
        return Err(EngineError::invalid_argument(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(value)
}
