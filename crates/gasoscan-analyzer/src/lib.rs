//! gasoscan-analyzer
//!
//! Acid-base interpretation of a validated arterial blood gas. Pure and
//! deterministic: [`analyze`] holds no state, performs no I/O, and returns a
//! complete [`Diagnosis`] for every valid record.
//!
//! The rule cascade runs in a fixed order:
//! 1. pH status (the only early exit, for a fully normal record)
//! 2. anion gap and delta/delta (ionogram required)
//! 3. normal anion gap metabolic acidosis
//! 4. primary metabolic alkalosis
//! 5. primary respiratory disorder and its chronicity
//! 6. respiratory compensation of the pH-matching metabolic disorder

pub mod anion_gap;
pub mod compensation;
pub mod etiology;
pub mod respiratory;
pub mod status;
pub mod thresholds;

use std::collections::BTreeMap;

use gasoscan_core::models::blood_gas::BloodGasRecord;
use gasoscan_core::models::diagnosis::{
    AcidBaseStatus, Axis, CompensationAssessment, DeltaRatioInterpretation, Diagnosis,
    DisorderCategory, DisorderLabel, FindingOrigin,
};
use gasoscan_core::models::parameter::HCO3_REFERENCE;
use tracing::debug;

use compensation::MetabolicPrimary;

/// Interpret a validated blood-gas record.
pub fn analyze(record: BloodGasRecord) -> Diagnosis {
    let status = status::classify(&record);
    debug!(ph = record.ph(), ?status, "classified pH status");
    if status == AcidBaseStatus::Normal {
        return Diagnosis::normal();
    }

    let hco3 = record.hco3();
    let mut findings = Findings::default();

    let measured_gap = anion_gap::evaluate(&record);
    let mut delta_delta = None;
    if let Some(gap) = measured_gap {
        debug!(
            anion_gap = gap.value,
            corrected = gap.corrected,
            "computed anion gap"
        );
        if gap.albumin_corrected {
            findings.note(format!(
                "Anion gap corrected for albumin {:.1} g/dL: {:.1} -> {:.1}",
                record.albumin(),
                gap.value,
                gap.corrected
            ));
        }
        if anion_gap::is_high(&gap) {
            findings.assert(DisorderLabel::primary(
                DisorderCategory::HighAnionGapMetabolicAcidosis,
            ));

            let dd = anion_gap::delta_delta(&gap, hco3);
            debug!(ratio = ?dd.ratio, interpretation = ?dd.interpretation, "delta/delta");
            match dd.interpretation {
                Some(DeltaRatioInterpretation::HyperchloremicAcidosisAssociated) => {
                    findings.assert(DisorderLabel::associated(
                        DisorderCategory::NormalAnionGapMetabolicAcidosis,
                        FindingOrigin::DeltaDelta,
                    ));
                }
                Some(DeltaRatioInterpretation::MetabolicAlkalosisAssociated) => {
                    findings.assert(DisorderLabel::associated(
                        DisorderCategory::MetabolicAlkalosis,
                        FindingOrigin::DeltaDelta,
                    ));
                }
                Some(DeltaRatioInterpretation::PureHighAnionGapAcidosis) => {}
                None => findings.note(
                    "Delta/delta ratio not computable: HCO3 equals 24 mEq/L".to_string(),
                ),
            }
            delta_delta = Some(dd);
        }
    }

    let high_gap = measured_gap.is_some_and(|gap| anion_gap::is_high(&gap));
    if hco3 < HCO3_REFERENCE.min && !high_gap {
        findings.assert(DisorderLabel::primary(
            DisorderCategory::NormalAnionGapMetabolicAcidosis,
        ));
    }

    if hco3 > HCO3_REFERENCE.max && !findings.has(DisorderCategory::MetabolicAlkalosis) {
        findings.assert(DisorderLabel::primary(DisorderCategory::MetabolicAlkalosis));
    }

    let metabolic_primary = MetabolicPrimary::select(
        record.ph(),
        findings.has_metabolic_acidosis(),
        findings.has(DisorderCategory::MetabolicAlkalosis),
    );

    let mut respiratory = None;
    if metabolic_primary.is_some_and(|primary| primary.is_compensatory(record.pco2())) {
        debug!(
            pco2 = record.pco2(),
            "pCO2 deviation left to compensation assessment"
        );
    } else if let Some(assessment) = respiratory::assess(&record) {
        debug!(
            category = ?assessment.category,
            chronicity = ?assessment.chronicity,
            "primary respiratory disorder"
        );
        findings.assert(DisorderLabel::respiratory(
            assessment.category,
            assessment.chronicity,
        ));
        respiratory = Some(assessment);
    }

    let compensation = match metabolic_primary {
        Some(primary) => {
            let outcome = compensation::assess(primary, record.pco2(), hco3);
            debug!(verdict = ?outcome.assessment.verdict, "compensation assessed");
            let respiratory_asserted = findings.has_axis(Axis::Respiratory);
            if let Some(category) = outcome.associated.filter(|_| !respiratory_asserted) {
                findings.assert(DisorderLabel::associated(
                    category,
                    FindingOrigin::Compensation,
                ));
            }
            findings.note(outcome.note);
            outcome.assessment
        }
        None => {
            if respiratory.is_some() {
                findings.note(
                    "Primary respiratory disorder: compensation is judged by chronicity"
                        .to_string(),
                );
            } else if findings.has_axis(Axis::Metabolic) {
                findings.note(
                    "Metabolic disorder does not match the pH direction: compensation not evaluated"
                        .to_string(),
                );
            } else {
                findings.note("No acid-base disorder identified".to_string());
            }
            CompensationAssessment::not_applicable()
        }
    };

    Diagnosis {
        status,
        disorders: findings.disorders,
        compensation: Some(compensation),
        anion_gap: measured_gap,
        delta_delta,
        respiratory,
        etiologies: findings.etiologies,
        notes: findings.notes,
    }
}

/// Disorders asserted so far, tracked by category rather than by label text.
#[derive(Default)]
struct Findings {
    disorders: Vec<DisorderLabel>,
    etiologies: BTreeMap<DisorderCategory, Vec<String>>,
    notes: Vec<String>,
}

impl Findings {
    fn assert(&mut self, label: DisorderLabel) {
        self.etiologies
            .entry(label.category)
            .or_insert_with(|| etiology::owned_causes(label.category));
        self.disorders.push(label);
    }

    fn has(&self, category: DisorderCategory) -> bool {
        self.disorders.iter().any(|d| d.category == category)
    }

    fn has_axis(&self, axis: Axis) -> bool {
        self.disorders.iter().any(|d| d.category.axis() == axis)
    }

    fn has_metabolic_acidosis(&self) -> bool {
        self.disorders
            .iter()
            .any(|d| d.category.is_metabolic_acidosis())
    }

    fn note(&mut self, note: String) {
        self.notes.push(note);
    }
}
