use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Normal adult arterial reference bands.
pub const PH_REFERENCE: ReferenceRange = ReferenceRange::new(7.35, 7.45);
pub const PCO2_REFERENCE: ReferenceRange = ReferenceRange::new(35.0, 45.0);
pub const HCO3_REFERENCE: ReferenceRange = ReferenceRange::new(22.0, 26.0);

/// A measured value that can appear on a blood-gas report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Parameter {
    Ph,
    Pco2,
    Hco3,
    Na,
    Cl,
    Albumin,
}

impl Parameter {
    pub const ALL: [Parameter; 6] = [
        Parameter::Ph,
        Parameter::Pco2,
        Parameter::Hco3,
        Parameter::Na,
        Parameter::Cl,
        Parameter::Albumin,
    ];

    /// Stable lowercase key used by extraction output and input files.
    pub fn key(self) -> &'static str {
        match self {
            Parameter::Ph => "ph",
            Parameter::Pco2 => "pco2",
            Parameter::Hco3 => "hco3",
            Parameter::Na => "na",
            Parameter::Cl => "cl",
            Parameter::Albumin => "albumin",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn unit(self) -> &'static str {
        match self {
            Parameter::Ph => "",
            Parameter::Pco2 => "mmHg",
            Parameter::Hco3 | Parameter::Na | Parameter::Cl => "mEq/L",
            Parameter::Albumin => "g/dL",
        }
    }

    /// Bounds outside which a value is physiologically impossible and the
    /// record is rejected rather than interpreted.
    pub fn plausible_range(self) -> ReferenceRange {
        match self {
            Parameter::Ph => ReferenceRange::new(6.8, 7.8),
            Parameter::Pco2 => ReferenceRange::new(10.0, 130.0),
            Parameter::Hco3 => ReferenceRange::new(5.0, 60.0),
            Parameter::Na => ReferenceRange::new(90.0, 200.0),
            Parameter::Cl => ReferenceRange::new(50.0, 160.0),
            Parameter::Albumin => ReferenceRange::new(0.5, 8.0),
        }
    }

    /// Normal adult arterial reference band, where one is used by the
    /// interpretation rules.
    pub fn normal_range(self) -> Option<ReferenceRange> {
        match self {
            Parameter::Ph => Some(PH_REFERENCE),
            Parameter::Pco2 => Some(PCO2_REFERENCE),
            Parameter::Hco3 => Some(HCO3_REFERENCE),
            Parameter::Na | Parameter::Cl | Parameter::Albumin => None,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::Ph => "pH",
            Parameter::Pco2 => "pCO2",
            Parameter::Hco3 => "HCO3",
            Parameter::Na => "Na",
            Parameter::Cl => "Cl",
            Parameter::Albumin => "albumin",
        };
        f.write_str(name)
    }
}

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRange {
    pub min: f64,
    pub max: f64,
}

impl ReferenceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Symmetric band `center ± tolerance`.
    pub fn around(center: f64, tolerance: f64) -> Self {
        Self {
            min: center - tolerance,
            max: center + tolerance,
        }
    }
}
