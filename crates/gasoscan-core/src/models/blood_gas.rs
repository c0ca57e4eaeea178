use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::models::parameter::Parameter;

/// Albumin assumed when none is reported (g/dL).
pub const DEFAULT_ALBUMIN: f64 = 4.5;

/// Unvalidated blood-gas values as they arrive from manual entry, an input
/// file, or an extraction adapter. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct BloodGasInput {
    #[serde(default)]
    pub ph: Option<f64>,
    #[serde(default)]
    pub pco2: Option<f64>,
    #[serde(default)]
    pub hco3: Option<f64>,
    #[serde(default)]
    pub na: Option<f64>,
    #[serde(default)]
    pub cl: Option<f64>,
    #[serde(default)]
    pub albumin: Option<f64>,
}

impl BloodGasInput {
    pub fn new(ph: f64, pco2: f64, hco3: f64) -> Self {
        Self {
            ph: Some(ph),
            pco2: Some(pco2),
            hco3: Some(hco3),
            ..Self::default()
        }
    }

    pub fn with_electrolytes(mut self, na: f64, cl: f64) -> Self {
        self.na = Some(na);
        self.cl = Some(cl);
        self
    }

    pub fn with_albumin(mut self, albumin: f64) -> Self {
        self.albumin = Some(albumin);
        self
    }

    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::Ph => self.ph,
            Parameter::Pco2 => self.pco2,
            Parameter::Hco3 => self.hco3,
            Parameter::Na => self.na,
            Parameter::Cl => self.cl,
            Parameter::Albumin => self.albumin,
        }
    }

    pub fn set(&mut self, parameter: Parameter, value: f64) {
        let slot = match parameter {
            Parameter::Ph => &mut self.ph,
            Parameter::Pco2 => &mut self.pco2,
            Parameter::Hco3 => &mut self.hco3,
            Parameter::Na => &mut self.na,
            Parameter::Cl => &mut self.cl,
            Parameter::Albumin => &mut self.albumin,
        };
        *slot = Some(value);
    }

    /// Set `parameter` only if it has no value yet.
    pub fn fill_missing(&mut self, parameter: Parameter, value: f64) {
        if self.get(parameter).is_none() {
            self.set(parameter, value);
        }
    }

    /// Discard a lone sodium or chloride so the record is treated as having
    /// no ionogram instead of being rejected.
    pub fn drop_unpaired_electrolytes(mut self) -> Self {
        if self.na.is_none() || self.cl.is_none() {
            self.na = None;
            self.cl = None;
        }
        self
    }

    /// Run the validation boundary and produce an immutable record.
    pub fn validate(self) -> Result<BloodGasRecord, ValidationError> {
        BloodGasRecord::try_from(self)
    }
}

/// Sodium and chloride reported together; enables anion-gap analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Ionogram {
    pub na: f64,
    pub cl: f64,
}

/// A validated blood-gas record. Only obtainable through
/// [`BloodGasInput::validate`], so every instance satisfies the
/// physiological bounds of [`Parameter::plausible_range`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct BloodGasRecord {
    ph: f64,
    pco2: f64,
    hco3: f64,
    ionogram: Option<Ionogram>,
    albumin: f64,
}

impl BloodGasRecord {
    pub fn ph(&self) -> f64 {
        self.ph
    }

    pub fn pco2(&self) -> f64 {
        self.pco2
    }

    pub fn hco3(&self) -> f64 {
        self.hco3
    }

    pub fn ionogram(&self) -> Option<Ionogram> {
        self.ionogram
    }

    pub fn albumin(&self) -> f64 {
        self.albumin
    }

    pub fn has_ionogram(&self) -> bool {
        self.ionogram.is_some()
    }
}

impl TryFrom<BloodGasInput> for BloodGasRecord {
    type Error = ValidationError;

    fn try_from(input: BloodGasInput) -> Result<Self, Self::Error> {
        let ph = check(Parameter::Ph, required(Parameter::Ph, input.ph)?)?;
        let pco2 = check(Parameter::Pco2, required(Parameter::Pco2, input.pco2)?)?;
        let hco3 = check(Parameter::Hco3, required(Parameter::Hco3, input.hco3)?)?;

        let ionogram = match (input.na, input.cl) {
            (Some(na), Some(cl)) => Some(Ionogram {
                na: check(Parameter::Na, na)?,
                cl: check(Parameter::Cl, cl)?,
            }),
            (Some(_), None) => {
                return Err(ValidationError::UnpairedElectrolyte {
                    present: Parameter::Na,
                    missing: Parameter::Cl,
                });
            }
            (None, Some(_)) => {
                return Err(ValidationError::UnpairedElectrolyte {
                    present: Parameter::Cl,
                    missing: Parameter::Na,
                });
            }
            (None, None) => None,
        };

        let albumin = match input.albumin {
            Some(value) => check(Parameter::Albumin, value)?,
            None => DEFAULT_ALBUMIN,
        };

        Ok(Self {
            ph,
            pco2,
            hco3,
            ionogram,
            albumin,
        })
    }
}

fn required(parameter: Parameter, value: Option<f64>) -> Result<f64, ValidationError> {
    value.ok_or(ValidationError::MissingField(parameter))
}

fn check(parameter: Parameter, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { parameter });
    }
    let range = parameter.plausible_range();
    if !range.contains(value) {
        return Err(ValidationError::OutOfRange {
            parameter,
            value,
            range,
        });
    }
    Ok(value)
}
