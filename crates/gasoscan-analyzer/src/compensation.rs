//! Respiratory compensation of a primary metabolic disorder.

use gasoscan_core::models::diagnosis::{
    CompensationAssessment, CompensationRule, CompensationVerdict, DisorderCategory,
};
use gasoscan_core::models::parameter::{PCO2_REFERENCE, ReferenceRange};

use crate::thresholds::{COMPENSATION_TOLERANCE, NEUTRAL_PH, NORMAL_HCO3, NORMAL_PCO2};

/// The metabolic disorder that matches the pH direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetabolicPrimary {
    Acidosis,
    Alkalosis,
}

impl MetabolicPrimary {
    /// Acidosis takes precedence when both metabolic disorders coexist.
    pub fn select(ph: f64, has_acidosis: bool, has_alkalosis: bool) -> Option<Self> {
        if has_acidosis && ph <= NEUTRAL_PH {
            Some(MetabolicPrimary::Acidosis)
        } else if has_alkalosis && ph > NEUTRAL_PH {
            Some(MetabolicPrimary::Alkalosis)
        } else {
            None
        }
    }

    pub fn rule(self) -> CompensationRule {
        match self {
            MetabolicPrimary::Acidosis => CompensationRule::WintersFormula,
            MetabolicPrimary::Alkalosis => CompensationRule::MetabolicAlkalosisResponse,
        }
    }

    pub fn expected_pco2(self, hco3: f64) -> f64 {
        match self {
            MetabolicPrimary::Acidosis => 1.5 * hco3 + 8.0,
            MetabolicPrimary::Alkalosis => NORMAL_PCO2 + 0.7 * (hco3 - NORMAL_HCO3),
        }
    }

    /// Whether an out-of-band pCO2 moves in the direction of the expected
    /// respiratory response, so it is judged here rather than as a primary
    /// respiratory disorder.
    pub fn is_compensatory(self, pco2: f64) -> bool {
        match self {
            MetabolicPrimary::Acidosis => pco2 < PCO2_REFERENCE.min,
            MetabolicPrimary::Alkalosis => pco2 > PCO2_REFERENCE.max,
        }
    }

    fn label(self) -> &'static str {
        match self {
            MetabolicPrimary::Acidosis => "metabolic acidosis",
            MetabolicPrimary::Alkalosis => "metabolic alkalosis",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompensationOutcome {
    pub assessment: CompensationAssessment,
    /// Respiratory disorder implied by a pCO2 outside the expected band.
    pub associated: Option<DisorderCategory>,
    pub note: String,
}

/// Judge the respiratory response to `primary`.
pub fn assess(primary: MetabolicPrimary, pco2: f64, hco3: f64) -> CompensationOutcome {
    let expected_pco2 = primary.expected_pco2(hco3);
    let band = ReferenceRange::around(expected_pco2, COMPENSATION_TOLERANCE);

    let (verdict, associated, note) = if pco2 > band.max {
        (
            CompensationVerdict::UnderCompensatedRespiratoryAcidosis,
            Some(DisorderCategory::RespiratoryAcidosis),
            format!(
                "Not compensated: associated respiratory acidosis (pCO2 {pco2:.1} > expected {:.1})",
                band.max
            ),
        )
    } else if pco2 < band.min {
        (
            CompensationVerdict::UnderCompensatedRespiratoryAlkalosis,
            Some(DisorderCategory::RespiratoryAlkalosis),
            format!(
                "Not compensated: associated respiratory alkalosis (pCO2 {pco2:.1} < expected {:.1})",
                band.min
            ),
        )
    } else {
        (
            CompensationVerdict::Compensated,
            None,
            format!(
                "Compensated: adequate respiratory response to {} (expected pCO2 {expected_pco2:.1} ± {COMPENSATION_TOLERANCE:.0})",
                primary.label()
            ),
        )
    };

    CompensationOutcome {
        assessment: CompensationAssessment {
            verdict,
            rule: Some(primary.rule()),
            expected_pco2: Some(expected_pco2),
            expected_band: Some(band),
        },
        associated,
        note,
    }
}
