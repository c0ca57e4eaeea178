use std::path::Path;

use gasoscan_core::models::blood_gas::BloodGasInput;
use gasoscan_core::models::parameter::Parameter;
use gasoscan_extract::{parameter_for_label, parse_decimal};

use crate::config::GasoscanConfig;

/// Build an input from `key=value` arguments such as `ph=7.31 pco2=32`.
pub fn parse_assignments<I, S>(args: I) -> eyre::Result<BloodGasInput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut input = BloodGasInput::default();
    for arg in args {
        let arg = arg.as_ref();
        let (key, raw) = arg
            .split_once('=')
            .ok_or_else(|| eyre::eyre!("expected key=value, got '{arg}'"))?;
        let parameter =
            parameter_for_label(key).ok_or_else(|| eyre::eyre!("unknown parameter: {key}"))?;
        let value =
            parse_decimal(raw).ok_or_else(|| eyre::eyre!("{parameter}: '{raw}' is not a number"))?;
        input.set(parameter, value);
    }
    Ok(input)
}

pub fn read_input_file(path: &Path) -> eyre::Result<BloodGasInput> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
    let input = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid blood gas input in {}: {e}", path.display()))?;
    Ok(input)
}

/// Fill missing required values from the manual-entry defaults when the
/// config allows it. Returns the parameters that were filled.
pub fn apply_defaults(input: &mut BloodGasInput, config: &GasoscanConfig) -> Vec<Parameter> {
    if !config.fill_missing_with_defaults {
        return Vec::new();
    }

    let defaults = config.manual_defaults;
    let mut filled = Vec::new();
    for (parameter, value) in [
        (Parameter::Ph, defaults.ph),
        (Parameter::Pco2, defaults.pco2),
        (Parameter::Hco3, defaults.hco3),
    ] {
        if input.get(parameter).is_none() {
            input.set(parameter, value);
            filled.push(parameter);
        }
    }
    filled
}
