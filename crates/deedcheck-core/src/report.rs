//! Reviewer-facing outcome for a validated deed.

use serde::{Deserialize, Serialize};

use crate::record::DeedRecord;

/// Binary review outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Approved,
    Rejected,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub error_count: usize,
    pub warning_count: usize,
}

/// A validated record with its outcome and an audit summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub status: Status,
    pub record: DeedRecord,
    pub summary: ReportSummary,
}

impl Report {
    /// Build the report. Status depends on the error list and nothing else.
    pub fn from_record(record: DeedRecord) -> Self {
        let status = if record.is_rejected() {
            Status::Rejected
        } else {
            Status::Approved
        };
        let summary = ReportSummary {
            errors: record.errors().to_vec(),
            warnings: record.warnings().to_vec(),
            error_count: record.errors().len(),
            warning_count: record.warnings().len(),
        };
        Self {
            status,
            record,
            summary,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == Status::Approved
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_record_is_approved() {
        let mut record = DeedRecord::new();
        record.push_warning("Low confidence county match: 74%");
        let report = Report::from_record(record);
        assert!(report.is_approved());
        assert_eq!(report.summary.error_count, 0);
        assert_eq!(report.summary.warning_count, 1);
    }

    #[test]
    fn any_error_rejects() {
        let mut record = DeedRecord::new();
        record.push_error("Amount mismatch");
        let report = Report::from_record(record);
        assert_eq!(report.status, Status::Rejected);
        assert_eq!(report.summary.errors, vec!["Amount mismatch".to_string()]);
    }

    #[test]
    fn json_shape() {
        let mut record = DeedRecord::new();
        record.doc_id = Some("DEED-TRUST-0042".into());
        record.push_error("boom");
        let json = serde_json::to_value(Report::from_record(record)).unwrap();

        assert_eq!(json["status"], "REJECTED");
        assert_eq!(json["record"]["doc_id"], "DEED-TRUST-0042");
        assert_eq!(json["summary"]["errorCount"], 1);
        assert_eq!(json["summary"]["warningCount"], 0);
        assert_eq!(json["summary"]["errors"][0], "boom");
    }

    #[test]
    fn status_display() {
        assert_eq!(Status::Approved.to_string(), "APPROVED");
        assert_eq!(Status::Rejected.as_str(), "REJECTED");
    }
}
