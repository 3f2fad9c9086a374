//! Response types for the SuperMart engine API.
//!
//! This module defines the result bodies returned by each endpoint, the
//! error response structures, and the mapping from engine errors to HTTP
//! status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    AggregateResult, CheckoutSummary, StockStatus, TaxBreakdown, TaxMode, TaxShares,
};

/// Identification stamped on every calculation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultMeta {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
}

impl ResultMeta {
    /// Stamps a new result.
    pub fn new() -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for ResultMeta {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for `/tax/split`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxSplitResponse {
    /// Result identification.
    #[serde(flatten)]
    pub meta: ResultMeta,
    /// The mode the amount was read in.
    pub mode: TaxMode,
    /// The rate that was applied.
    pub rate: Decimal,
    /// The tax class the rate came from, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,
    /// Base, tax and total.
    #[serde(flatten)]
    pub breakdown: TaxBreakdown,
    /// The tax halved between central and state.
    pub shares: TaxShares,
}

/// Response body for `/line-items/aggregate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResponse {
    /// Result identification.
    #[serde(flatten)]
    pub meta: ResultMeta,
    /// Number of line items folded.
    pub item_count: usize,
    /// Subtotal, total tax and grand total.
    #[serde(flatten)]
    pub totals: AggregateResult,
}

/// Response body for `/checkout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// Result identification.
    #[serde(flatten)]
    pub meta: ResultMeta,
    /// Currency the amounts are in.
    pub currency: String,
    /// Till totals.
    #[serde(flatten)]
    pub summary: CheckoutSummary,
}

/// Response body for `/stock/classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockResponse {
    /// The classification.
    pub status: StockStatus,
    /// Human-readable form of `status`.
    pub label: String,
    /// Share of capacity in use, when a maximum was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_percentage: Option<Decimal>,
}

/// Response body for `/pricing/margin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginResponse {
    /// Markup over cost as a percentage, at full precision.
    pub margin: Decimal,
    /// `margin` to one decimal place, as the catalog shows it.
    pub display_margin: Decimal,
}

/// Response body for `/signup/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    /// True when no field has an error.
    pub valid: bool,
    /// Field name to message.
    pub errors: std::collections::BTreeMap<String, String>,
}

/// One entry of the `/tax-classes` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxClassEntry {
    /// Class code used in requests.
    pub code: String,
    /// The human-readable name of the class.
    pub name: String,
    /// Tax percentage.
    pub rate: Decimal,
    /// A description of the class.
    pub description: String,
    /// Typical goods in this class.
    pub examples: Vec<String>,
}

/// Response body for `/tax-classes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxClassesResponse {
    /// Jurisdiction code.
    pub jurisdiction: String,
    /// Currency code.
    pub currency: String,
    /// VAT percentage charged at the till.
    pub vat_rate: Decimal,
    /// Configured classes, sorted by code.
    pub tax_classes: Vec<TaxClassEntry>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a tax class not found error response.
    pub fn tax_class_not_found(code: &str) -> Self {
        Self::with_details(
            "TAX_CLASS_NOT_FOUND",
            format!("Tax class not found: {}", code),
            format!("The tax class '{}' is not configured for this jurisdiction", code),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidArgument { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ARGUMENT",
                    format!("Invalid argument '{}': {}", field, message),
                    field,
                ),
            },
            EngineError::LineItemNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("LINE_ITEM_NOT_FOUND", format!("Line item not found: {}", id)),
            },
            EngineError::TaxClassNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::tax_class_not_found(&code),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
