//! Validation pipeline: extract → reconcile → enrich → report.
//!
//! One [`Pipeline`] is built per process around the shared reference table.
//! Each deed runs start to finish on the caller's thread; the pipeline holds
//! no per-deed state, so separate deeds may be validated concurrently.

use std::sync::Arc;

use deedcheck_core::{
    DeedRecord, JurisdictionTable, Report, ValidationConfig, ValidationError, check_date_order,
    extract, reconcile_amounts,
};
use deedcheck_match::JurisdictionMatcher;
use tracing::{debug, info, warn};

/// Deed validation pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    matcher: JurisdictionMatcher,
    config: ValidationConfig,
}

impl Pipeline {
    pub fn new(table: Arc<JurisdictionTable>, config: ValidationConfig) -> Self {
        let matcher = JurisdictionMatcher::new(table).with_min_ratio(config.min_fuzzy_ratio);
        Self { matcher, config }
    }

    /// Pipeline with default thresholds.
    pub fn with_defaults(table: Arc<JurisdictionTable>) -> Self {
        Self::new(table, ValidationConfig::default())
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn matcher(&self) -> &JurisdictionMatcher {
        &self.matcher
    }

    /// Extract and validate one deed.
    pub fn process_deed(&self, raw_text: &str) -> DeedRecord {
        self.validate(extract(raw_text))
    }

    /// Extract, validate, and summarise one deed.
    pub fn process_and_report(&self, raw_text: &str) -> Report {
        let report = Report::from_record(self.process_deed(raw_text));
        info!(
            doc_id = report.record.doc_id.as_deref().unwrap_or("-"),
            status = %report.status,
            errors = report.summary.error_count,
            warnings = report.summary.warning_count,
            "deed validated"
        );
        report
    }

    /// Annotate an extracted record.
    ///
    /// Date order and amount reconciliation share one failure boundary: the
    /// first failure is recorded as an error and the rest of that boundary is
    /// skipped. Jurisdiction enrichment always runs afterwards and only ever
    /// adds warnings.
    pub fn validate(&self, mut record: DeedRecord) -> DeedRecord {
        if let Err(err) = self.run_checks(&mut record) {
            warn!(
                doc_id = record.doc_id.as_deref().unwrap_or("-"),
                kind = err.kind(),
                "{err}"
            );
            record.push_error(err.to_string());
        }
        self.enrich_county(&mut record);
        record
    }

    fn run_checks(&self, record: &mut DeedRecord) -> Result<(), ValidationError> {
        check_date_order(record)?;
        let amounts = reconcile_amounts(record, self.config.amount_tolerance)?;
        if let Some(warning) = amounts.warning() {
            record.push_warning(warning);
        }
        Ok(())
    }

    fn enrich_county(&self, record: &mut DeedRecord) {
        let Some(raw) = record.county_raw.clone() else {
            debug!("no county on record; skipping enrichment");
            return;
        };

        match self.matcher.resolve(&raw) {
            Ok((m, tax_rate)) => {
                record.set_jurisdiction(&m.name, tax_rate);
                if m.confidence < self.config.low_confidence_threshold {
                    record.push_warning(format!(
                        "Low confidence county match: {:.0}%",
                        m.confidence * 100.0
                    ));
                }
            }
            Err(err) => {
                debug!(raw = %raw, kind = err.kind(), "county lookup failed");
                record.push_warning(err.to_string());
            }
        }
    }
}
