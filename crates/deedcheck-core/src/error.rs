use chrono::NaiveDate;
use thiserror::Error;

use crate::money::format_usd;

/// A domain validation failure.
///
/// These describe problems with the deed itself, never with the machinery
/// around it. The pipeline turns them into error or warning strings on the
/// record instead of returning them to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Date logic violation: recorded {recorded} is later than signed {signed}")]
    DateLogic {
        signed: NaiveDate,
        recorded: NaiveDate,
    },

    #[error(
        "Amount mismatch: {} vs {written_text} (diff: {})",
        usd(.numeric),
        usd(.delta)
    )]
    AmountMismatch {
        numeric: f64,
        written: f64,
        written_text: String,
        delta: f64,
    },

    #[error("{}", lookup_message(.raw, .reason))]
    JurisdictionLookup { raw: String, reason: LookupFailure },
}

/// Why a jurisdiction lookup failed.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupFailure {
    /// Raw text was missing or blank; the table was not consulted.
    Empty,
    /// Best fuzzy ratio fell below the configured floor.
    NoMatch { best_ratio: f64 },
    /// Canonical name is absent from the reference table.
    NotInTable,
}

impl ValidationError {
    pub fn lookup(raw: impl Into<String>, reason: LookupFailure) -> Self {
        Self::JurisdictionLookup {
            raw: raw.into(),
            reason,
        }
    }

    /// Short machine-readable tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DateLogic { .. } => "date_logic",
            Self::AmountMismatch { .. } => "amount_mismatch",
            Self::JurisdictionLookup { .. } => "jurisdiction_lookup",
        }
    }
}

fn usd(amount: &f64) -> String {
    format_usd(*amount)
}

fn lookup_message(raw: &str, reason: &LookupFailure) -> String {
    match reason {
        LookupFailure::Empty => "County name is empty".to_string(),
        LookupFailure::NoMatch { .. } => {
            format!("No match for county: {}", raw.trim().to_uppercase())
        }
        LookupFailure::NotInTable => format!("County not found: {raw}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_logic_message_names_both_dates() {
        let err = ValidationError::DateLogic {
            signed: NaiveDate::from_ymd_opt(2020, 1, 5).unwrap(),
            recorded: NaiveDate::from_ymd_opt(2020, 1, 10).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Date logic violation: recorded 2020-01-10 is later than signed 2020-01-05"
        );
        assert_eq!(err.kind(), "date_logic");
    }

    #[test]
    fn amount_mismatch_message_formats_currency() {
        let err = ValidationError::AmountMismatch {
            numeric: 1_000_000.0,
            written: 2_000_000.0,
            written_text: "Two Million".into(),
            delta: 1_000_000.0,
        };
        assert_eq!(
            err.to_string(),
            "Amount mismatch: $1,000,000.00 vs Two Million (diff: $1,000,000.00)"
        );
    }

    #[test]
    fn lookup_messages() {
        assert_eq!(
            ValidationError::lookup("", LookupFailure::Empty).to_string(),
            "County name is empty"
        );
        assert_eq!(
            ValidationError::lookup(" Zzyzx County ", LookupFailure::NoMatch { best_ratio: 0.2 })
                .to_string(),
            "No match for county: ZZYZX COUNTY"
        );
        assert_eq!(
            ValidationError::lookup("Atlantis", LookupFailure::NotInTable).to_string(),
            "County not found: Atlantis"
        );
    }
}
