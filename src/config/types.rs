//! Configuration types for tax jurisdictions.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata about the tax jurisdiction.
///
/// Identifies the jurisdiction and holds the rates that apply when a
/// request does not name one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short jurisdiction code (e.g., "KE").
    pub code: String,
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// ISO 4217 currency code (e.g., "KES").
    pub currency: String,
    /// VAT percentage charged at the till.
    pub vat_rate: Decimal,
    /// Tax percentage given to a newly added billing line.
    pub default_line_tax_rate: Decimal,
    /// Date from which these rates apply.
    pub effective_date: NaiveDate,
    /// URL to the official rate schedule.
    pub source_url: String,
}

/// A named tax class, e.g. standard-rated or zero-rated supplies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxClass {
    /// The human-readable name of the class.
    pub name: String,
    /// Tax percentage for goods in this class.
    pub rate: Decimal,
    /// A description of the class.
    pub description: String,
    /// Typical goods in this class.
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Tax classes configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxClassesConfig {
    /// Map of class code to class details.
    pub tax_classes: HashMap<String, TaxClass>,
}

/// The complete jurisdiction configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct TaxConfig {
    metadata: JurisdictionMetadata,
    tax_classes: HashMap<String, TaxClass>,
}

impl TaxConfig {
    /// Creates a new TaxConfig from its component parts.
    pub fn new(metadata: JurisdictionMetadata, tax_classes: HashMap<String, TaxClass>) -> Self {
        Self {
            metadata,
            tax_classes,
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns all tax classes keyed by code.
    pub fn tax_classes(&self) -> &HashMap<String, TaxClass> {
        &self.tax_classes
    }
}
