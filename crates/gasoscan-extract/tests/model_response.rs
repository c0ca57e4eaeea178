use gasoscan_core::models::parameter::Parameter;
use gasoscan_extract::error::ExtractError;
use gasoscan_extract::{parameter_for_label, parse_decimal, parse_model_response};

#[test]
fn parses_fenced_json() {
    let response = "Here are the values:\n```json\n{\"ph\": 7.31, \"pco2\": 32, \"hco3\": 16}\n```";
    let values = parse_model_response(response).unwrap();
    assert_eq!(values.get(Parameter::Ph), Some(7.31));
    assert_eq!(values.get(Parameter::Pco2), Some(32.0));
    assert_eq!(values.get(Parameter::Hco3), Some(16.0));
    assert_eq!(values.raw_text.as_deref(), Some(response));
}

#[test]
fn parses_bare_object_with_aliases_and_strings() {
    let response = r#"{"pH": "7,45", "pCO2": 30, "HCO3-": 21.0, "Na+": 140, "Cl-": "104", "albumina": 3.1}"#;
    let values = parse_model_response(response).unwrap();
    assert_eq!(values.get(Parameter::Ph), Some(7.45));
    assert_eq!(values.get(Parameter::Hco3), Some(21.0));
    assert_eq!(values.get(Parameter::Na), Some(140.0));
    assert_eq!(values.get(Parameter::Cl), Some(104.0));
    assert_eq!(values.get(Parameter::Albumin), Some(3.1));
}

#[test]
fn nulls_and_garbage_are_skipped() {
    let response = r#"{"ph": 7.2, "pco2": null, "hco3": "n/a", "lactate": 4.1}"#;
    let values = parse_model_response(response).unwrap();
    assert_eq!(values.get(Parameter::Ph), Some(7.2));
    assert_eq!(values.get(Parameter::Pco2), None);
    assert_eq!(values.get(Parameter::Hco3), None);
    assert_eq!(values.values.len(), 1);
}

#[test]
fn response_without_json_is_an_error() {
    let err = parse_model_response("I could not read the image.").unwrap_err();
    assert!(matches!(err, ExtractError::NoJsonBlock));
}

#[test]
fn malformed_json_is_an_error() {
    let err = parse_model_response("{\"ph\": 7.2,,}").unwrap_err();
    assert!(matches!(err, ExtractError::Json(_)));
}

#[test]
fn labels_resolve_regardless_of_case_and_sign() {
    assert_eq!(parameter_for_label("HCO3-"), Some(Parameter::Hco3));
    assert_eq!(parameter_for_label("cHCO3-"), Some(Parameter::Hco3));
    assert_eq!(parameter_for_label("PaCO2"), Some(Parameter::Pco2));
    assert_eq!(parameter_for_label("Na+"), Some(Parameter::Na));
    assert_eq!(parameter_for_label("potassium"), None);
}

#[test]
fn decimal_parsing_rejects_non_numbers() {
    assert_eq!(parse_decimal(" 7,35 "), Some(7.35));
    assert_eq!(parse_decimal("NaN"), None);
    assert_eq!(parse_decimal("high"), None);
}
