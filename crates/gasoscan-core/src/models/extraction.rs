use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::blood_gas::BloodGasInput;
use super::parameter::Parameter;

const REQUIRED: [Parameter; 3] = [Parameter::Ph, Parameter::Pco2, Parameter::Hco3];

/// Values recovered from a photographed or scanned lab report.
///
/// A parameter that could not be read is absent from `values`; it is never
/// stored as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExtractedValues {
    pub values: BTreeMap<Parameter, f64>,
    /// Raw text returned by the extraction engine, kept for debugging.
    pub raw_text: Option<String>,
}

impl ExtractedValues {
    pub fn with_raw_text(raw_text: impl Into<String>) -> Self {
        Self {
            values: BTreeMap::new(),
            raw_text: Some(raw_text.into()),
        }
    }

    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        self.values.get(&parameter).copied()
    }

    /// Record a value unless one was already found for this parameter.
    pub fn insert_first(&mut self, parameter: Parameter, value: f64) {
        self.values.entry(parameter).or_insert(value);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Required parameters the extraction could not recover.
    pub fn missing_required(&self) -> Vec<Parameter> {
        REQUIRED
            .into_iter()
            .filter(|p| !self.values.contains_key(p))
            .collect()
    }

    pub fn into_input(self) -> BloodGasInput {
        let mut input = BloodGasInput::default();
        for (parameter, value) in self.values {
            input.set(parameter, value);
        }
        input
    }
}
