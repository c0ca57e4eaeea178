//! Pattern-based reading of OCR text from a printed blood-gas report.

use std::sync::LazyLock;

use gasoscan_core::models::extraction::ExtractedValues;
use gasoscan_core::models::parameter::Parameter;
use regex::Regex;
use tracing::debug;

use crate::parse_decimal;

/// Optional unit in parentheses, then an optional `:` or `=`.
const SEPARATOR: &str = r"\s*(?:\([^)]*\))?\s*[:=]?\s*";

static PATTERNS: LazyLock<Vec<(Parameter, Regex)>> = LazyLock::new(|| {
    [
        (Parameter::Ph, r"\bph", r"(\d+\.\d+)"),
        (Parameter::Pco2, r"\bpa?co2", r"(\d+\.?\d*)"),
        (Parameter::Hco3, r"\bc?hco3-?", r"(\d+\.?\d*)"),
        (Parameter::Na, r"\bna\+?", r"(\d+\.?\d*)"),
        (Parameter::Cl, r"\bcl-?", r"(\d+\.?\d*)"),
        (Parameter::Albumin, r"\balbumina?", r"(\d+\.?\d*)"),
    ]
    .into_iter()
    .map(|(parameter, label, value)| {
        let pattern = format!("(?i){label}{SEPARATOR}{value}");
        // Patterns are fixed at compile time.
        let regex = Regex::new(&pattern).expect("report pattern must compile");
        (parameter, regex)
    })
    .collect()
});

/// Read blood-gas values from OCR text.
///
/// Decimal commas are normalised first. For each parameter the first match
/// wins; parameters that do not appear are left absent.
pub fn parse_report_text(text: &str) -> ExtractedValues {
    let normalized = text.replace(',', ".");
    let mut extracted = ExtractedValues::with_raw_text(text);

    for (parameter, regex) in PATTERNS.iter() {
        let Some(captures) = regex.captures(&normalized) else {
            continue;
        };
        if let Some(value) = captures.get(1).and_then(|m| parse_decimal(m.as_str())) {
            extracted.insert_first(*parameter, value);
        }
    }

    debug!(
        found = extracted.values.len(),
        missing = ?extracted.missing_required(),
        "parsed report text"
    );
    extracted
}
