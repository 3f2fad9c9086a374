//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax
//! jurisdiction configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{JurisdictionMetadata, TaxClass, TaxClassesConfig, TaxConfig};

/// Loads and provides access to tax jurisdiction configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query the VAT rate and tax classes.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/kenya/
/// ├── jurisdiction.yaml  # Jurisdiction metadata and default rates
/// └── tax_classes.yaml   # Named tax classes
/// ```
///
/// # Example
///
/// ```no_run
/// use supermart_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/kenya").unwrap();
///
/// let class = loader.get_tax_class("zero_rated").unwrap();
/// println!("{} at {}%", class.name, class.rate);
/// println!("Till VAT: {}%", loader.vat_rate());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/kenya")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    /// - Any rate is negative
    ///
    /// # Example
    ///
    /// ```no_run
    /// use supermart_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/kenya")?;
    /// # Ok::<(), supermart_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let jurisdiction_path = path.join("jurisdiction.yaml");
        let metadata = Self::load_yaml::<JurisdictionMetadata>(&jurisdiction_path)?;
        Self::check_rate(&jurisdiction_path, "vat_rate", metadata.vat_rate)?;
        Self::check_rate(
            &jurisdiction_path,
            "default_line_tax_rate",
            metadata.default_line_tax_rate,
        )?;

        let classes_path = path.join("tax_classes.yaml");
        let classes_config = Self::load_yaml::<TaxClassesConfig>(&classes_path)?;
        for (code, class) in &classes_config.tax_classes {
            Self::check_rate(&classes_path, code, class.rate)?;
        }

        let config = TaxConfig::new(metadata, classes_config.tax_classes);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects a negative rate as a parse error on the file it came from.
    fn check_rate(path: &Path, key: &str, rate: Decimal) -> EngineResult<()> {
        if rate.is_sign_negative() && !rate.is_zero() {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!("rate for '{}' must not be negative (got {})", key, rate),
            });
        }
        Ok(())
    }

    /// Returns the underlying tax configuration.
    pub fn config(&self) -> &TaxConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// VAT percentage charged at the till.
    pub fn vat_rate(&self) -> Decimal {
        self.config.jurisdiction().vat_rate
    }

    /// Tax percentage given to a newly added billing line.
    pub fn default_line_tax_rate(&self) -> Decimal {
        self.config.jurisdiction().default_line_tax_rate
    }

    /// Returns all tax classes as `(code, class)` pairs sorted by code.
    pub fn tax_classes(&self) -> Vec<(&str, &TaxClass)> {
        let mut classes: Vec<(&str, &TaxClass)> = self
            .config
            .tax_classes()
            .iter()
            .map(|(code, class)| (code.as_str(), class))
            .collect();
        classes.sort_by(|a, b| a.0.cmp(b.0));
        classes
    }

    /// Gets a tax class by its code.
    ///
    /// # Arguments
    ///
    /// * `code` - The tax class code (e.g., "zero_rated")
    ///
    /// # Returns
    ///
    /// Returns the tax class if found, or `TaxClassNotFound` error.
    pub fn get_tax_class(&self, code: &str) -> EngineResult<&TaxClass> {
        self.config
            .tax_classes()
            .get(code)
            .ok_or_else(|| EngineError::TaxClassNotFound {
                code: code.to_string(),
            })
    }

    /// Picks the rate for a request.
    ///
    /// An explicit rate wins, then the named tax class, then the default
    /// billing line rate.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use supermart_engine::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::load("./config/kenya")?;
    /// assert_eq!(loader.resolve_rate(None, Some("reduced"))?, Decimal::from(8));
    /// assert_eq!(loader.resolve_rate(Some(Decimal::from(2)), Some("reduced"))?, Decimal::from(2));
    /// # Ok::<(), supermart_engine::error::EngineError>(())
    /// ```
    pub fn resolve_rate(
        &self,
        explicit: Option<Decimal>,
        tax_class: Option<&str>,
    ) -> EngineResult<Decimal> {
        if let Some(rate) = explicit {
            return Ok(rate);
        }
        match tax_class {
            Some(code) => Ok(self.get_tax_class(code)?.rate),
            None => Ok(self.default_line_tax_rate()),
        }
    }
}
