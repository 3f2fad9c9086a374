//! Error types for the SuperMart calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing taxes, totals,
//! stock status and form checks.

use thiserror::Error;

/// The main error type for the calculation engine.
///
/// Calculations only ever fail with [`EngineError::InvalidArgument`]; the
/// remaining variants belong to configuration loading and to the mutable
/// line-item list.
///
/// # Example
///
/// ```
/// use supermart_engine::error::EngineError;
///
/// let error = EngineError::InvalidArgument {
///     field: "amount".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid argument 'amount': must not be negative");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A numeric input was negative, unparseable or too large.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The input field that was rejected.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// No line item with the given id exists in the list.
    #[error("Line item not found: {id}")]
    LineItemNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Tax class code was not found in the configuration.
    #[error("Tax class not found: {code}")]
    TaxClassNotFound {
        /// The tax class code that was not found.
        code: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidArgument`].
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
