//! Primary respiratory disorders and their chronicity.

use gasoscan_core::models::blood_gas::BloodGasRecord;
use gasoscan_core::models::diagnosis::{Chronicity, DisorderCategory, RespiratoryAssessment};
use gasoscan_core::models::parameter::PCO2_REFERENCE;

use crate::thresholds::{
    ACUTE_ACIDOSIS_COEFFICIENT, ACUTE_ALKALOSIS_COEFFICIENT, ACUTE_TOLERANCE,
    CHRONIC_ACIDOSIS_COEFFICIENT, CHRONIC_ALKALOSIS_COEFFICIENT, CHRONIC_TOLERANCE, NORMAL_HCO3,
    NORMAL_PCO2,
};

/// Assess a pCO2 outside its reference band. `None` when pCO2 is normal.
pub fn assess(record: &BloodGasRecord) -> Option<RespiratoryAssessment> {
    let pco2 = record.pco2();
    let delta_pco2 = (pco2 - NORMAL_PCO2).abs();

    let (category, expected_acute_hco3, expected_chronic_hco3) = if pco2 > PCO2_REFERENCE.max {
        (
            DisorderCategory::RespiratoryAcidosis,
            NORMAL_HCO3 + ACUTE_ACIDOSIS_COEFFICIENT * delta_pco2,
            NORMAL_HCO3 + CHRONIC_ACIDOSIS_COEFFICIENT * delta_pco2,
        )
    } else if pco2 < PCO2_REFERENCE.min {
        (
            DisorderCategory::RespiratoryAlkalosis,
            NORMAL_HCO3 - ACUTE_ALKALOSIS_COEFFICIENT * delta_pco2,
            NORMAL_HCO3 - CHRONIC_ALKALOSIS_COEFFICIENT * delta_pco2,
        )
    } else {
        return None;
    };

    Some(RespiratoryAssessment {
        category,
        delta_pco2,
        expected_acute_hco3,
        expected_chronic_hco3,
        chronicity: classify_chronicity(record.hco3(), expected_acute_hco3, expected_chronic_hco3),
    })
}

/// Acute wins when HCO3 sits within both tolerances.
pub fn classify_chronicity(hco3: f64, expected_acute: f64, expected_chronic: f64) -> Chronicity {
    if (hco3 - expected_acute).abs() <= ACUTE_TOLERANCE {
        Chronicity::Acute
    } else if (hco3 - expected_chronic).abs() <= CHRONIC_TOLERANCE {
        Chronicity::Chronic
    } else {
        Chronicity::AcuteOnChronic
    }
}
