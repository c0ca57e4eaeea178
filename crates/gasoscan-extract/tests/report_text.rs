use gasoscan_core::models::parameter::Parameter;
use gasoscan_extract::parse_report_text;

#[test]
fn reads_labelled_values() {
    let text = "GASOMETRIA ARTERIAL pH 7.31 pCO2: 32 HCO3- 16.5 Na+ 138 Cl- 110";
    let values = parse_report_text(text);
    assert_eq!(values.get(Parameter::Ph), Some(7.31));
    assert_eq!(values.get(Parameter::Pco2), Some(32.0));
    assert_eq!(values.get(Parameter::Hco3), Some(16.5));
    assert_eq!(values.get(Parameter::Na), Some(138.0));
    assert_eq!(values.get(Parameter::Cl), Some(110.0));
    assert_eq!(values.raw_text.as_deref(), Some(text));
}

#[test]
fn normalises_decimal_commas() {
    let values = parse_report_text("pH = 7,28  HCO3 = 14,2");
    assert_eq!(values.get(Parameter::Ph), Some(7.28));
    assert_eq!(values.get(Parameter::Hco3), Some(14.2));
}

#[test]
fn accepts_units_in_parentheses() {
    let values = parse_report_text("PaCO2 (mmHg): 48.0\nAlbumina (g/dL): 2.9");
    assert_eq!(values.get(Parameter::Pco2), Some(48.0));
    assert_eq!(values.get(Parameter::Albumin), Some(2.9));
}

#[test]
fn missing_values_stay_absent() {
    let values = parse_report_text("pH 7.40 pCO2 40");
    assert_eq!(values.get(Parameter::Hco3), None);
    assert_eq!(values.get(Parameter::Na), None);
    assert_eq!(values.missing_required(), vec![Parameter::Hco3]);
}

#[test]
fn ph_requires_a_decimal_point() {
    let values = parse_report_text("pH 7");
    assert_eq!(values.get(Parameter::Ph), None);
}

#[test]
fn first_occurrence_wins() {
    let values = parse_report_text("pH 7.22 ... reference pH 7.40");
    assert_eq!(values.get(Parameter::Ph), Some(7.22));
}

#[test]
fn does_not_match_inside_words() {
    let values = parse_report_text("Hemoglobina 12.1");
    assert_eq!(values.get(Parameter::Na), None);
}

#[test]
fn empty_text_yields_nothing() {
    let values = parse_report_text("");
    assert!(values.is_empty());
}

#[test]
fn reads_analyzer_style_bicarbonate_label() {
    let values = parse_report_text("pH 7.28\npCO2 35\ncHCO3-(P) 16,2 mmol/L");
    assert_eq!(values.get(Parameter::Hco3), Some(16.2));

    let values = parse_report_text("cHCO3 21.4");
    assert_eq!(values.get(Parameter::Hco3), Some(21.4));
}
