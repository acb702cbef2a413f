//! Core deed validation: record types, field extraction, and reconciliation checks.

pub mod config;
pub mod error;
pub mod extract;
pub mod jurisdiction;
pub mod money;
pub mod reconcile;
pub mod record;
pub mod report;
pub mod written_amount;

pub use config::ValidationConfig;
pub use error::{LookupFailure, ValidationError};
pub use extract::extract;
pub use jurisdiction::{Jurisdiction, JurisdictionTable, TableError};
pub use reconcile::{AmountCheck, check_date_order, reconcile_amounts};
pub use record::DeedRecord;
pub use report::{Report, ReportSummary, Status};
