//! Catalog loading

use super::ConfigError;
use crate::catalog::Catalog;
use std::path::Path;
use tracing::info;

/// Load and validate a catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let catalog: Catalog = super::load_toml(path)?;
    catalog.validate()?;
    info!(
        path = %path.display(),
        weapons = catalog.weapons.len(),
        zones = catalog.zones.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Load and validate a catalog from a TOML string
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let catalog: Catalog = super::parse_toml(content)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Get the compiled-in catalog
pub fn default_catalog() -> Result<Catalog, ConfigError> {
    let toml = include_str!("../../config/catalog.toml");
    parse_catalog(toml)
}
