//! Configuration loading for tax jurisdictions.
//!
//! This module loads a jurisdiction's VAT rate, default billing rate and
//! tax classes from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use supermart_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/kenya").unwrap();
//! println!("Loaded jurisdiction: {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{JurisdictionMetadata, TaxClass, TaxClassesConfig, TaxConfig};
