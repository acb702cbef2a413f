//! The deed record: extracted fields plus validation annotations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Structured fields pulled from one OCR-scanned deed.
///
/// Produced by [`crate::extract::extract`] and annotated by the validation
/// pipeline. Every extracted field is optional: absence means the pattern did
/// not match, never that extraction failed. Unset fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeedRecord {
    pub doc_id: Option<String>,
    pub county_raw: Option<String>,
    /// Canonical reference name; only set by a successful jurisdiction match.
    pub county_normalized: Option<String>,
    /// Two-letter region code.
    pub state: Option<String>,
    pub date_signed: Option<NaiveDate>,
    pub date_recorded: Option<NaiveDate>,
    pub grantor: Option<String>,
    pub grantee: Option<String>,
    pub amount_numeric: Option<f64>,
    /// Spelled-out amount as it appears in the deed, e.g. `Two Million`.
    pub amount_written: Option<String>,
    /// Assessor's parcel number.
    pub apn: Option<String>,
    pub status: Option<String>,
    /// Only set together with `county_normalized`.
    pub tax_rate: Option<f64>,
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    warnings: Vec<String>,
}

impl DeedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn is_rejected(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Record a resolved jurisdiction. Name and rate are written together so
    /// a tax rate never appears without its canonical name.
    pub fn set_jurisdiction(&mut self, name: impl Into<String>, tax_rate: f64) {
        self.county_normalized = Some(name.into());
        self.tax_rate = Some(tax_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_empty() {
        let record = DeedRecord::new();
        assert!(record.doc_id.is_none());
        assert!(record.errors().is_empty());
        assert!(record.warnings().is_empty());
        assert!(!record.is_rejected());
    }

    #[test]
    fn errors_reject_warnings_do_not() {
        let mut record = DeedRecord::new();
        record.push_warning("odd");
        assert!(!record.is_rejected());
        record.push_error("bad");
        assert!(record.is_rejected());
        assert_eq!(record.errors(), ["bad"]);
        assert_eq!(record.warnings(), ["odd"]);
    }

    #[test]
    fn jurisdiction_sets_name_and_rate_together() {
        let mut record = DeedRecord::new();
        record.set_jurisdiction("Santa Clara", 0.012);
        assert_eq!(record.county_normalized.as_deref(), Some("Santa Clara"));
        assert_eq!(record.tax_rate, Some(0.012));
    }

    #[test]
    fn unset_fields_serialize_as_null() {
        let mut record = DeedRecord::new();
        record.date_signed = NaiveDate::from_ymd_opt(2024, 1, 15);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date_signed"], "2024-01-15");
        assert!(json["date_recorded"].is_null());
        assert!(json["grantor"].is_null());
        assert_eq!(json["errors"], serde_json::json!([]));
    }

    #[test]
    fn null_fields_deserialize() {
        let json = r#"{
            "doc_id": "DEED-1",
            "county_raw": null,
            "county_normalized": null,
            "state": "CA",
            "date_signed": "2024-01-15",
            "date_recorded": null,
            "grantor": null,
            "grantee": null,
            "amount_numeric": 1250000.0,
            "amount_written": null,
            "apn": null,
            "status": null,
            "tax_rate": null
        }"#;
        let parsed: DeedRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.doc_id.as_deref(), Some("DEED-1"));
        assert_eq!(parsed.date_signed, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(parsed.amount_numeric, Some(1_250_000.0));
        assert!(parsed.errors().is_empty());
    }
}
