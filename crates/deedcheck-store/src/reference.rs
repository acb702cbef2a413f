//! Reference jurisdiction table and config loading.
//!
//! The table file is a JSON array of `{"name": ..., "tax_rate": ...}`
//! objects. Anything that would leave the matcher with an empty or
//! inconsistent table is an error at load time.

use std::path::Path;

use deedcheck_core::{Jurisdiction, JurisdictionTable, ValidationConfig};
use serde::Deserialize;
use tracing::info;

use crate::StoreError;

#[derive(Deserialize)]
struct JurisdictionRow {
    name: String,
    tax_rate: f64,
}

/// Parse a reference table from JSON text.
pub fn parse_jurisdictions(json: &str) -> Result<JurisdictionTable, StoreError> {
    let rows: Vec<JurisdictionRow> = serde_json::from_str(json)?;
    let entries = rows
        .into_iter()
        .map(|r| Jurisdiction::new(r.name, r.tax_rate))
        .collect();
    Ok(JurisdictionTable::new(entries)?)
}

/// Load a reference table from a JSON file.
pub fn load_jurisdictions(path: &Path) -> Result<JurisdictionTable, StoreError> {
    let json = read(path)?;
    let table = parse_jurisdictions(&json)?;
    let summary = table.summary();
    info!(
        path = %path.display(),
        count = summary.entries,
        min_rate = summary.min_rate,
        max_rate = summary.max_rate,
        "loaded jurisdiction table"
    );
    Ok(table)
}

/// Load validation thresholds from a JSON file. Missing keys take defaults.
pub fn load_config(path: &Path) -> Result<ValidationConfig, StoreError> {
    let json = read(path)?;
    let config = ValidationConfig::from_json(&json)?;
    config.validate()?;
    info!(path = %path.display(), "loaded validation config");
    Ok(config)
}

fn read(path: &Path) -> Result<String, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}
