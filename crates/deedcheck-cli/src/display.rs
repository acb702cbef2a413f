//! Vertical card display for validated deeds.
//!
//! Renders a report as a grouped, human-readable card. Record fields are
//! read through their serialized form so the card and the JSON output use
//! the same names.

use deedcheck_core::Report;
use deedcheck_core::money::format_usd;
use deedcheck_match::JurisdictionMatch;
use serde_json::{Map, Value};

// ── Record section groupings ──

const IDENTITY: &[&str] = &["doc_id", "apn", "status"];

const JURISDICTION: &[&str] = &["county_raw", "county_normalized", "state", "tax_rate"];

const PARTIES: &[&str] = &["grantor", "grantee"];

const DATES: &[&str] = &["date_signed", "date_recorded"];

const CONSIDERATION: &[&str] = &["amount_numeric", "amount_written"];

// ── Public API ──

/// Print a report as a vertical card grouped by record section.
pub fn print_report_card(report: &Report) -> anyhow::Result<()> {
    let value = serde_json::to_value(&report.record)?;
    let Value::Object(fields) = value else {
        anyhow::bail!("deed record did not serialize to an object");
    };

    let doc_id = report.record.doc_id.as_deref().unwrap_or("(no document id)");
    println!("=== {} === {}", doc_id, report.status);
    println!();

    print_section(&fields, "Identity", IDENTITY);
    print_section(&fields, "Jurisdiction", JURISDICTION);
    print_section(&fields, "Parties", PARTIES);
    print_section(&fields, "Dates", DATES);
    print_section(&fields, "Consideration", CONSIDERATION);
    print_messages("Errors", &report.summary.errors);
    print_messages("Warnings", &report.summary.warnings);

    Ok(())
}

/// Print one resolved county.
pub fn print_match(m: &JurisdictionMatch, tax_rate: f64) {
    println!("  {:<26} {}", "name", m.name);
    println!("  {:<26} {}", "kind", m.kind.as_str());
    println!("  {:<26} {:.0}%", "confidence", m.confidence * 100.0);
    println!("  {:<26} {}", "tax_rate", tax_rate);
}

// ── Section rendering ──

fn print_section(fields: &Map<String, Value>, header: &str, keys: &[&str]) {
    let has_data = keys
        .iter()
        .any(|&key| fields.get(key).is_some_and(|v| !v.is_null()));
    if !has_data {
        return;
    }

    println!("{header}");
    for &key in keys {
        let Some(value) = fields.get(key) else {
            continue;
        };
        if let Some(text) = render(key, value) {
            println!("  {:<26} {}", key, text);
        }
    }
    println!();
}

fn print_messages(header: &str, messages: &[String]) {
    if messages.is_empty() {
        return;
    }
    println!("{header} ({}):", messages.len());
    for message in messages {
        println!("  - {message}");
    }
    println!();
}

fn render(key: &str, value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if key == "amount_numeric" => n.as_f64().map(format_usd),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "yes" } else { "no" }.to_string()),
        other => Some(other.to_string()),
    }
}
