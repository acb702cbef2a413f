//! Domain sanity checks: date ordering and amount reconciliation.
//!
//! Each check reads the record and returns a typed result. Neither mutates
//! the record; the pipeline decides what becomes an error or a warning.

use crate::error::ValidationError;
use crate::record::DeedRecord;
use crate::written_amount::parse_written_amount;

/// Outcome of a non-failing amount check.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountCheck {
    /// Numeric or written amount is missing; nothing to compare.
    Skipped,
    /// Written amount could not be read as a number. Not fatal.
    Unparseable(String),
    /// Both amounts agree within tolerance.
    Reconciled { written: f64 },
}

impl AmountCheck {
    /// Warning text for the unparseable case.
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Unparseable(text) => Some(format!("Could not parse written amount: {text}")),
            _ => None,
        }
    }
}

/// Flag a recorded date that falls strictly after the signed date.
///
/// This is the rule as it stands in the review checklist. Real-world
/// recording normally follows signing, so the comparison looks inverted;
/// it is kept literal until the business owners confirm it.
pub fn check_date_order(record: &DeedRecord) -> Result<(), ValidationError> {
    if let (Some(signed), Some(recorded)) = (record.date_signed, record.date_recorded)
        && recorded > signed
    {
        return Err(ValidationError::DateLogic { signed, recorded });
    }
    Ok(())
}

/// Compare the numeric amount with the spelled-out amount.
///
/// A difference strictly greater than `tolerance` is an
/// [`ValidationError::AmountMismatch`].
pub fn reconcile_amounts(
    record: &DeedRecord,
    tolerance: f64,
) -> Result<AmountCheck, ValidationError> {
    let (Some(numeric), Some(written_text)) = (record.amount_numeric, &record.amount_written)
    else {
        return Ok(AmountCheck::Skipped);
    };

    let Some(written) = parse_written_amount(written_text) else {
        return Ok(AmountCheck::Unparseable(written_text.clone()));
    };

    let delta = (numeric - written).abs();
    if delta > tolerance {
        return Err(ValidationError::AmountMismatch {
            numeric,
            written,
            written_text: written_text.clone(),
            delta,
        });
    }
    Ok(AmountCheck::Reconciled { written })
}
