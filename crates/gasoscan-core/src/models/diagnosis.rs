use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::parameter::ReferenceRange;

/// Blood acidity classification derived from pH, refined by the
/// pCO2/HCO3 reference bands when pH itself is normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AcidBaseStatus {
    Acidemia,
    Alkalemia,
    Normal,
    /// pH in range but pCO2 or HCO3 outside theirs.
    NormalWithMixedDisorder,
}

impl fmt::Display for AcidBaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AcidBaseStatus::Acidemia => "Acidemia",
            AcidBaseStatus::Alkalemia => "Alkalemia",
            AcidBaseStatus::Normal => "Normal",
            AcidBaseStatus::NormalWithMixedDisorder => "Normal pH (mixed disorder)",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Axis {
    Metabolic,
    Respiratory,
}

/// The five disorder categories that carry an etiology list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DisorderCategory {
    HighAnionGapMetabolicAcidosis,
    NormalAnionGapMetabolicAcidosis,
    MetabolicAlkalosis,
    RespiratoryAcidosis,
    RespiratoryAlkalosis,
}

impl DisorderCategory {
    pub fn axis(self) -> Axis {
        match self {
            DisorderCategory::HighAnionGapMetabolicAcidosis
            | DisorderCategory::NormalAnionGapMetabolicAcidosis
            | DisorderCategory::MetabolicAlkalosis => Axis::Metabolic,
            DisorderCategory::RespiratoryAcidosis | DisorderCategory::RespiratoryAlkalosis => {
                Axis::Respiratory
            }
        }
    }

    pub fn is_metabolic_acidosis(self) -> bool {
        matches!(
            self,
            DisorderCategory::HighAnionGapMetabolicAcidosis
                | DisorderCategory::NormalAnionGapMetabolicAcidosis
        )
    }
}

impl fmt::Display for DisorderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DisorderCategory::HighAnionGapMetabolicAcidosis => "High-AG Metabolic Acidosis",
            DisorderCategory::NormalAnionGapMetabolicAcidosis => "Normal-AG Metabolic Acidosis",
            DisorderCategory::MetabolicAlkalosis => "Metabolic Alkalosis",
            DisorderCategory::RespiratoryAcidosis => "Respiratory Acidosis",
            DisorderCategory::RespiratoryAlkalosis => "Respiratory Alkalosis",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Chronicity {
    Acute,
    Chronic,
    AcuteOnChronic,
}

impl fmt::Display for Chronicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Chronicity::Acute => "Acute",
            Chronicity::Chronic => "Chronic",
            Chronicity::AcuteOnChronic => "Acute-on-Chronic",
        })
    }
}

/// Which step of the rule cascade asserted a disorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FindingOrigin {
    /// Detected directly from the primary values.
    Primary,
    /// Secondary disorder inferred from the delta/delta ratio.
    DeltaDelta,
    /// Secondary disorder inferred from a compensation mismatch.
    Compensation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisorderLabel {
    pub category: DisorderCategory,
    /// Only set for primary respiratory disorders.
    pub chronicity: Option<Chronicity>,
    pub origin: FindingOrigin,
}

impl DisorderLabel {
    pub fn primary(category: DisorderCategory) -> Self {
        Self {
            category,
            chronicity: None,
            origin: FindingOrigin::Primary,
        }
    }

    pub fn associated(category: DisorderCategory, origin: FindingOrigin) -> Self {
        Self {
            category,
            chronicity: None,
            origin,
        }
    }

    pub fn respiratory(category: DisorderCategory, chronicity: Chronicity) -> Self {
        Self {
            category,
            chronicity: Some(chronicity),
            origin: FindingOrigin::Primary,
        }
    }

    pub fn is_associated(&self) -> bool {
        self.origin != FindingOrigin::Primary
    }
}

impl fmt::Display for DisorderLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.category, self.origin) {
            (DisorderCategory::HighAnionGapMetabolicAcidosis, _) => {
                f.write_str("Metabolic Acidosis, High AG")?
            }
            (DisorderCategory::NormalAnionGapMetabolicAcidosis, FindingOrigin::Primary) => {
                f.write_str("Metabolic Acidosis, Normal AG")?
            }
            (DisorderCategory::NormalAnionGapMetabolicAcidosis, _) => {
                f.write_str("Metabolic Acidosis, Normal AG (Hyperchloremic)")?
            }
            (DisorderCategory::MetabolicAlkalosis, _) => f.write_str("Metabolic Alkalosis")?,
            (DisorderCategory::RespiratoryAcidosis, _) => f.write_str("Respiratory Acidosis")?,
            (DisorderCategory::RespiratoryAlkalosis, _) => {
                f.write_str("Respiratory Alkalosis")?
            }
        }
        if let Some(chronicity) = self.chronicity {
            write!(f, ", {chronicity}")?;
        }
        if self.is_associated() {
            f.write_str(", associated")?;
        }
        Ok(())
    }
}

/// Anion gap computed from the ionogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnionGap {
    /// `Na - (Cl + HCO3)`.
    pub value: f64,
    /// Albumin-corrected gap; equals `value` when albumin is the default.
    pub corrected: f64,
    pub albumin_corrected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DeltaRatioInterpretation {
    /// Bicarbonate fell more than the gap rose.
    HyperchloremicAcidosisAssociated,
    PureHighAnionGapAcidosis,
    /// Bicarbonate fell less than the gap rose, or rose.
    MetabolicAlkalosisAssociated,
}

impl fmt::Display for DeltaRatioInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeltaRatioInterpretation::HyperchloremicAcidosisAssociated => {
                "associated normal-AG (hyperchloremic) metabolic acidosis"
            }
            DeltaRatioInterpretation::PureHighAnionGapAcidosis => "pure high-AG metabolic acidosis",
            DeltaRatioInterpretation::MetabolicAlkalosisAssociated => {
                "associated metabolic alkalosis"
            }
        })
    }
}

/// Delta/delta evaluation of a high anion gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeltaDelta {
    pub delta_anion_gap: f64,
    pub delta_hco3: f64,
    /// Absent when `delta_hco3` is zero.
    pub ratio: Option<f64>,
    pub interpretation: Option<DeltaRatioInterpretation>,
}

/// Expected renal response for a primary respiratory disorder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RespiratoryAssessment {
    pub category: DisorderCategory,
    pub delta_pco2: f64,
    pub expected_acute_hco3: f64,
    pub expected_chronic_hco3: f64,
    pub chronicity: Chronicity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompensationVerdict {
    Compensated,
    /// pCO2 above the expected band.
    UnderCompensatedRespiratoryAcidosis,
    /// pCO2 below the expected band.
    UnderCompensatedRespiratoryAlkalosis,
    NotApplicable,
}

/// Which expected-pCO2 formula produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompensationRule {
    /// `1.5 * HCO3 + 8 ± 2`.
    WintersFormula,
    /// `40 + 0.7 * (HCO3 - 24) ± 2`.
    MetabolicAlkalosisResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompensationAssessment {
    pub verdict: CompensationVerdict,
    pub rule: Option<CompensationRule>,
    pub expected_pco2: Option<f64>,
    pub expected_band: Option<ReferenceRange>,
}

impl CompensationAssessment {
    pub fn not_applicable() -> Self {
        Self {
            verdict: CompensationVerdict::NotApplicable,
            rule: None,
            expected_pco2: None,
            expected_band: None,
        }
    }
}

/// Structured result of one acid-base analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Diagnosis {
    pub status: AcidBaseStatus,
    /// In detection order: primary metabolic, primary respiratory, then
    /// associated findings.
    pub disorders: Vec<DisorderLabel>,
    /// Absent only for a fully normal record.
    pub compensation: Option<CompensationAssessment>,
    /// Present only when both sodium and chloride were reported.
    pub anion_gap: Option<AnionGap>,
    pub delta_delta: Option<DeltaDelta>,
    pub respiratory: Option<RespiratoryAssessment>,
    /// Candidate causes for every category in `disorders`, most common first.
    pub etiologies: BTreeMap<DisorderCategory, Vec<String>>,
    pub notes: Vec<String>,
}

impl Diagnosis {
    /// The result for a record with every value inside its reference band.
    pub fn normal() -> Self {
        Self {
            status: AcidBaseStatus::Normal,
            disorders: Vec::new(),
            compensation: None,
            anion_gap: None,
            delta_delta: None,
            respiratory: None,
            etiologies: BTreeMap::new(),
            notes: Vec::new(),
        }
    }

    pub fn delta_ratio(&self) -> Option<f64> {
        self.delta_delta.and_then(|dd| dd.ratio)
    }

    pub fn has_category(&self, category: DisorderCategory) -> bool {
        self.disorders.iter().any(|d| d.category == category)
    }

    pub fn has_disorder(&self) -> bool {
        !self.disorders.is_empty()
    }

    /// One-line rendering of the disorder list.
    pub fn summary(&self) -> String {
        if self.disorders.is_empty() {
            return "No disorder".to_string();
        }
        self.disorders
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
