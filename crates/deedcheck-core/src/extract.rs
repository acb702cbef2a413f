//! Label-anchored field extraction from OCR deed text.
//!
//! Each field is pulled by its own pattern and independently of every other
//! field. A missing label, an unparseable number or an impossible calendar
//! date leaves the field unset; extraction itself never fails.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::record::DeedRecord;

// ── Patterns ──

static DOC_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Doc[^:]*:\s*(\S+)").unwrap());
static COUNTY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)County[^:]*:\s*([^|\n]+)").unwrap());
static STATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)State[^:]*:\s*([A-Za-z]{2})\b").unwrap());
static GRANTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Grantor[^:]*:\s*([^\n]+)").unwrap());
static GRANTEE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Grantee[^:]*:\s*([^\n]+)").unwrap());
static APN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)APN[^:]*:\s*(\S+)").unwrap());
static STATUS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Status[^:]*:\s*(\w+)").unwrap());

static DATE_SIGNED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Date Signed[^\d]*(\d{4})-(\d{2})-(\d{2})").unwrap());
static DATE_RECORDED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Date Recorded[^\d]*(\d{4})-(\d{2})-(\d{2})").unwrap());

static AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"Amount[^:]*:\s*\$([\d,.]+)").unwrap());
static WRITTEN_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]*(?:Million|Thousand)[^)]*)\)").unwrap());

// ── Public API ──

/// Extract every known field from raw deed text.
pub fn extract(raw_text: &str) -> DeedRecord {
    let mut record = DeedRecord::new();
    record.doc_id = capture(&DOC_ID, raw_text);
    record.county_raw = capture(&COUNTY, raw_text);
    record.state = capture(&STATE, raw_text);
    record.date_signed = capture_date(&DATE_SIGNED, raw_text);
    record.date_recorded = capture_date(&DATE_RECORDED, raw_text);
    record.grantor = capture(&GRANTOR, raw_text);
    record.grantee = capture(&GRANTEE, raw_text);
    record.amount_numeric = capture_amount(raw_text);
    record.amount_written = capture(&WRITTEN_AMOUNT, raw_text);
    record.apn = capture(&APN, raw_text);
    record.status = capture(&STATUS, raw_text);

    debug!(
        doc_id = record.doc_id.as_deref().unwrap_or("-"),
        has_dates = record.date_signed.is_some() && record.date_recorded.is_some(),
        has_amounts = record.amount_numeric.is_some() && record.amount_written.is_some(),
        "extracted deed fields"
    );
    record
}

// ── Helpers ──

/// First capture group, trimmed. Blank values count as absent.
fn capture(pattern: &Regex, text: &str) -> Option<String> {
    let value = pattern.captures(text)?.get(1)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// First `YYYY-MM-DD` after the label. Impossible dates are treated as absent.
fn capture_date(pattern: &Regex, text: &str) -> Option<NaiveDate> {
    let caps = pattern.captures(text)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `Amount: $1,250,000.00` → `1250000.0`. Malformed numerals are absent.
fn capture_amount(text: &str) -> Option<f64> {
    let caps = AMOUNT.captures(text)?;
    let digits: String = caps[1].chars().filter(|&c| c != ',').collect();
    let value: f64 = digits.parse().ok()?;
    if value.is_finite() { Some(value) } else { None }
}
