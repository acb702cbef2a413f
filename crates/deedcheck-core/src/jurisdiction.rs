//! Reference jurisdiction table: canonical county names and their tax rates.
//!
//! Loaded once per process (see `deedcheck-store`) and shared read-only
//! behind an `Arc` by every component that resolves counties.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One canonical jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jurisdiction {
    pub name: String,
    pub tax_rate: f64,
}

impl Jurisdiction {
    pub fn new(name: impl Into<String>, tax_rate: f64) -> Self {
        Self {
            name: name.into(),
            tax_rate,
        }
    }
}

/// Reasons a reference table is refused at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("reference table is empty")]
    Empty,
    #[error("entry {index}: name is blank")]
    BlankName { index: usize },
    #[error("duplicate jurisdiction name: {0}")]
    DuplicateName(String),
    #[error("jurisdiction '{name}': invalid tax rate {tax_rate}")]
    InvalidRate { name: String, tax_rate: f64 },
}

/// Ordered, validated reference table.
///
/// Names are unique under case-insensitive comparison and every rate is a
/// finite non-negative number. Order is preserved; matching rules that tie
/// resolve to the earliest entry.
#[derive(Debug, Clone, PartialEq)]
pub struct JurisdictionTable {
    entries: Vec<Jurisdiction>,
}

/// Summary statistics for a loaded table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub entries: usize,
    pub min_rate: f64,
    pub max_rate: f64,
}

impl JurisdictionTable {
    /// Validate and wrap a list of entries.
    pub fn new(entries: Vec<Jurisdiction>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let key = entry.name.trim().to_uppercase();
            if key.is_empty() {
                return Err(TableError::BlankName { index });
            }
            if !entry.tax_rate.is_finite() || entry.tax_rate < 0.0 {
                return Err(TableError::InvalidRate {
                    name: entry.name.clone(),
                    tax_rate: entry.tax_rate,
                });
            }
            if !seen.insert(key) {
                return Err(TableError::DuplicateName(entry.name.clone()));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Jurisdiction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Jurisdiction> {
        self.entries.iter()
    }

    /// Case-insensitive lookup by canonical name.
    pub fn get(&self, name: &str) -> Option<&Jurisdiction> {
        let wanted = name.trim().to_uppercase();
        self.entries
            .iter()
            .find(|e| e.name.to_uppercase() == wanted)
    }

    pub fn summary(&self) -> TableSummary {
        let (min_rate, max_rate) = self
            .entries
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), e| {
                (lo.min(e.tax_rate), hi.max(e.tax_rate))
            });
        TableSummary {
            entries: self.entries.len(),
            min_rate,
            max_rate,
        }
    }
}
