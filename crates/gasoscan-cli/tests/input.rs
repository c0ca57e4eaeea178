use gasoscan_cli::config::GasoscanConfig;
use gasoscan_cli::input::{apply_defaults, parse_assignments, read_input_file};
use gasoscan_core::models::blood_gas::BloodGasInput;
use gasoscan_core::models::parameter::Parameter;

#[test]
fn parses_inline_assignments() {
    let input = parse_assignments(["ph=7.25", "pCO2=30", "HCO3=13", "na=140", "cl=104,5"]).unwrap();
    assert_eq!(input.ph, Some(7.25));
    assert_eq!(input.pco2, Some(30.0));
    assert_eq!(input.hco3, Some(13.0));
    assert_eq!(input.na, Some(140.0));
    assert_eq!(input.cl, Some(104.5));
    assert_eq!(input.albumin, None);
}

#[test]
fn rejects_malformed_assignments() {
    assert!(parse_assignments(["ph7.25"]).is_err());
    assert!(parse_assignments(["potassium=4.0"]).is_err());
    assert!(parse_assignments(["ph=acid"]).is_err());
}

#[test]
fn defaults_are_not_applied_unless_enabled() {
    let mut input = BloodGasInput::default();
    let filled = apply_defaults(&mut input, &GasoscanConfig::default());
    assert!(filled.is_empty());
    assert_eq!(input, BloodGasInput::default());
}

#[test]
fn defaults_fill_only_missing_required_values() {
    let config = GasoscanConfig {
        fill_missing_with_defaults: true,
        ..GasoscanConfig::default()
    };
    let mut input = BloodGasInput {
        ph: Some(7.21),
        ..BloodGasInput::default()
    };

    let filled = apply_defaults(&mut input, &config);
    assert_eq!(filled, vec![Parameter::Pco2, Parameter::Hco3]);
    assert_eq!(input.ph, Some(7.21));
    assert_eq!(input.pco2, Some(40.0));
    assert_eq!(input.hco3, Some(24.0));
    assert_eq!(input.na, None);
    assert_eq!(input.cl, None);
}

#[test]
fn reads_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gas.json");
    std::fs::write(&path, r#"{"ph": 7.1, "pco2": 20, "hco3": 6, "na": 140, "cl": 100}"#).unwrap();

    let input = read_input_file(&path).unwrap();
    assert_eq!(
        input,
        BloodGasInput::new(7.1, 20.0, 6.0).with_electrolytes(140.0, 100.0)
    );
}

#[test]
fn input_file_with_unknown_field_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gas.json");
    std::fs::write(&path, r#"{"ph": 7.1, "lactate": 4}"#).unwrap();
    assert!(read_input_file(&path).is_err());
}
