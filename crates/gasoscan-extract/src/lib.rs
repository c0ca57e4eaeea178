//! gasoscan-extract
//!
//! Turns the text produced by an external extraction engine (OCR output or
//! a vision model's JSON answer) into [`ExtractedValues`]. Image handling
//! stays outside this crate.
//!
//! [`ExtractedValues`]: gasoscan_core::models::extraction::ExtractedValues

pub mod error;
pub mod model_response;
pub mod report_text;

pub use model_response::parse_model_response;
pub use report_text::parse_report_text;

use gasoscan_core::models::parameter::Parameter;

/// Map a report label or JSON key to a parameter. Case, signs and
/// punctuation are ignored, so `"HCO3-"`, `"Na+"` and `"pCO2"` all resolve.
pub fn parameter_for_label(label: &str) -> Option<Parameter> {
    let normalized: String = label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    match normalized.as_str() {
        "ph" => Some(Parameter::Ph),
        "pco2" | "paco2" => Some(Parameter::Pco2),
        "hco3" | "chco3" | "bic" | "bicarbonate" | "bicarbonato" => Some(Parameter::Hco3),
        "na" | "sodium" | "sodio" => Some(Parameter::Na),
        "cl" | "chloride" | "cloro" => Some(Parameter::Cl),
        "albumin" | "albumina" | "alb" => Some(Parameter::Albumin),
        _ => None,
    }
}

/// Parse a number that may use a decimal comma.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().replace(',', ".").parse().ok()?;
    value.is_finite().then_some(value)
}
