use gasoscan_core::models::extraction::ExtractedValues;
use gasoscan_core::models::parameter::Parameter;

#[test]
fn first_value_wins() {
    let mut values = ExtractedValues::default();
    values.insert_first(Parameter::Ph, 7.31);
    values.insert_first(Parameter::Ph, 7.45);
    assert_eq!(values.get(Parameter::Ph), Some(7.31));
}

#[test]
fn missing_required_lists_unread_parameters() {
    let mut values = ExtractedValues::with_raw_text("pH 7.31");
    values.insert_first(Parameter::Ph, 7.31);
    values.insert_first(Parameter::Na, 139.0);
    assert_eq!(
        values.missing_required(),
        vec![Parameter::Pco2, Parameter::Hco3]
    );
}

#[test]
fn into_input_leaves_unread_parameters_absent() {
    let mut values = ExtractedValues::default();
    values.insert_first(Parameter::Pco2, 52.0);
    let input = values.into_input();
    assert_eq!(input.pco2, Some(52.0));
    assert_eq!(input.ph, None);
    assert_eq!(input.na, None);
}

#[test]
fn parameter_keys_round_trip() {
    for parameter in Parameter::ALL {
        assert_eq!(Parameter::from_key(parameter.key()), Some(parameter));
    }
    assert_eq!(Parameter::from_key("potassium"), None);
}
