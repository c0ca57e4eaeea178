use gasoscan_core::models::blood_gas::BloodGasRecord;
use gasoscan_core::models::diagnosis::AcidBaseStatus;
use gasoscan_core::models::parameter::{HCO3_REFERENCE, PCO2_REFERENCE, PH_REFERENCE};

/// Classify blood acidity. Depends on pH, pCO2 and HCO3 only; electrolytes
/// never influence the status.
pub fn classify(record: &BloodGasRecord) -> AcidBaseStatus {
    if record.ph() < PH_REFERENCE.min {
        AcidBaseStatus::Acidemia
    } else if record.ph() > PH_REFERENCE.max {
        AcidBaseStatus::Alkalemia
    } else if PCO2_REFERENCE.contains(record.pco2()) && HCO3_REFERENCE.contains(record.hco3()) {
        AcidBaseStatus::Normal
    } else {
        AcidBaseStatus::NormalWithMixedDisorder
    }
}
