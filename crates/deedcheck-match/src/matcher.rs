//! Resolve free-text county names to canonical reference entries.
//!
//! Three rules run in order, and each scans the whole table before the next
//! is tried:
//!
//! 1. exact, case-insensitive: confidence 1.0
//! 2. abbreviation (initials or shortened words): confidence 0.95
//! 3. fuzzy: best gestalt similarity ratio, rejected below the floor
//!
//! The table is shared behind an `Arc` and never mutated.

use std::sync::Arc;

use deedcheck_core::config::DEFAULT_MIN_FUZZY_RATIO;
use deedcheck_core::{Jurisdiction, JurisdictionTable, LookupFailure, ValidationError};
use tracing::debug;

use crate::abbrev;
use crate::ratio::gestalt_ratio;

pub const EXACT_CONFIDENCE: f64 = 1.0;
pub const ABBREVIATION_CONFIDENCE: f64 = 0.95;

/// Which rule produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Abbreviation,
    Fuzzy,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Abbreviation => "abbreviation",
            Self::Fuzzy => "fuzzy",
        }
    }
}

/// A resolved jurisdiction.
#[derive(Debug, Clone, PartialEq)]
pub struct JurisdictionMatch {
    /// Canonical name as spelled in the reference table.
    pub name: String,
    /// In `0.0..=1.0`.
    pub confidence: f64,
    pub kind: MatchKind,
}

impl JurisdictionMatch {
    fn new(entry: &Jurisdiction, confidence: f64, kind: MatchKind) -> Self {
        Self {
            name: entry.name.clone(),
            confidence,
            kind,
        }
    }
}

/// Matcher over a shared, read-only reference table.
#[derive(Debug, Clone)]
pub struct JurisdictionMatcher {
    table: Arc<JurisdictionTable>,
    min_ratio: f64,
}

impl JurisdictionMatcher {
    pub fn new(table: Arc<JurisdictionTable>) -> Self {
        Self {
            table,
            min_ratio: DEFAULT_MIN_FUZZY_RATIO,
        }
    }

    /// Override the fuzzy floor (default 0.6). Ratios strictly below it fail.
    pub fn with_min_ratio(mut self, min_ratio: f64) -> Self {
        self.min_ratio = min_ratio;
        self
    }

    pub fn table(&self) -> &JurisdictionTable {
        &self.table
    }

    /// Resolve `raw` to a canonical name.
    pub fn match_name(&self, raw: &str) -> Result<JurisdictionMatch, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::lookup(raw, LookupFailure::Empty));
        }
        let upper = trimmed.to_uppercase();

        // 1. Exact.
        if let Some(entry) = self.table.iter().find(|e| e.name.to_uppercase() == upper) {
            return Ok(self.hit(raw, entry, EXACT_CONFIDENCE, MatchKind::Exact));
        }

        // 2. Abbreviation.
        if let Some(entry) = self
            .table
            .iter()
            .find(|e| abbrev::is_abbreviation(trimmed, &e.name))
        {
            return Ok(self.hit(
                raw,
                entry,
                ABBREVIATION_CONFIDENCE,
                MatchKind::Abbreviation,
            ));
        }

        // 3. Fuzzy: keep the best ratio, earliest entry on ties.
        let mut best: Option<&Jurisdiction> = None;
        let mut best_ratio = f64::NEG_INFINITY;
        for entry in self.table.iter() {
            let ratio = similarity(&upper, &entry.name.to_uppercase());
            if ratio > best_ratio {
                best_ratio = ratio;
                best = Some(entry);
            }
        }

        match best {
            Some(entry) if best_ratio >= self.min_ratio => {
                Ok(self.hit(raw, entry, best_ratio, MatchKind::Fuzzy))
            }
            _ => {
                debug!(raw = %raw, best_ratio, "no jurisdiction above fuzzy floor");
                Err(ValidationError::lookup(
                    raw,
                    LookupFailure::NoMatch {
                        best_ratio: best_ratio.max(0.0),
                    },
                ))
            }
        }
    }

    /// Tax rate for a canonical name, case-insensitive.
    pub fn tax_rate(&self, name: &str) -> Result<f64, ValidationError> {
        self.table
            .get(name)
            .map(|e| e.tax_rate)
            .ok_or_else(|| ValidationError::lookup(name, LookupFailure::NotInTable))
    }

    /// Match and look up the tax rate in one step, so callers can record the
    /// canonical name and rate together.
    pub fn resolve(&self, raw: &str) -> Result<(JurisdictionMatch, f64), ValidationError> {
        let m = self.match_name(raw)?;
        let rate = self.tax_rate(&m.name)?;
        Ok((m, rate))
    }

    fn hit(
        &self,
        raw: &str,
        entry: &Jurisdiction,
        confidence: f64,
        kind: MatchKind,
    ) -> JurisdictionMatch {
        debug!(
            raw = %raw,
            name = %entry.name,
            kind = kind.as_str(),
            confidence,
            "jurisdiction matched"
        );
        JurisdictionMatch::new(entry, confidence, kind)
    }
}

/// Similarity in `0.0..=1.0`; 1.0 means identical.
fn similarity(a: &str, b: &str) -> f64 {
    gestalt_ratio(a, b)
}
