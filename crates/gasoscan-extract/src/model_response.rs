//! Parsing of a vision model's answer to "read the values on this report".

use gasoscan_core::models::extraction::ExtractedValues;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ExtractError;
use crate::{parameter_for_label, parse_decimal};

/// Parse the JSON object embedded in a model response.
///
/// Unknown keys, `null`s and unparsable values are skipped; the whole
/// response is kept as raw text.
pub fn parse_model_response(response: &str) -> Result<ExtractedValues, ExtractError> {
    let block = json_block(response)?;
    let json: Value = serde_json::from_str(block)?;
    let object = json.as_object().ok_or(ExtractError::NotAnObject)?;

    let mut extracted = ExtractedValues::with_raw_text(response);
    for (key, value) in object {
        let Some(parameter) = parameter_for_label(key) else {
            debug!(key = %key, "ignoring unknown key");
            continue;
        };
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_decimal(s),
            Value::Null => continue,
            _ => None,
        };
        match parsed {
            Some(v) => extracted.insert_first(parameter, v),
            None => warn!(key = %key, %value, "unparsable value in model response"),
        }
    }

    Ok(extracted)
}

/// Locate the JSON object: a ```json fence, a bare fence, or the span from
/// the first `{` to the last `}`.
fn json_block(response: &str) -> Result<&str, ExtractError> {
    let trimmed = response.trim();

    if let Some(start) = trimmed.find("```json") {
        let after_fence = &trimmed[start + 7..];
        if let Some(end) = after_fence.find("```") {
            return Ok(after_fence[..end].trim());
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        if let Some(end) = after_fence.find("```") {
            let block = after_fence[..end].trim();
            if block.starts_with('{') {
                return Ok(block);
            }
        }
    }

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(&trimmed[start..=end]),
        _ => Err(ExtractError::NoJsonBlock),
    }
}
