use gasoscan_analyzer::compensation::{self, MetabolicPrimary};
use gasoscan_analyzer::{anion_gap, etiology, respiratory, status};
use gasoscan_core::models::blood_gas::BloodGasInput;
use gasoscan_core::models::diagnosis::{
    AcidBaseStatus, AnionGap, Chronicity, CompensationVerdict, DeltaRatioInterpretation, DisorderCategory,
};

#[test]
fn status_bands_are_inclusive() {
    let at = |ph: f64| status::classify(&BloodGasInput::new(ph, 40.0, 24.0).validate().unwrap());
    assert_eq!(at(7.34), AcidBaseStatus::Acidemia);
    assert_eq!(at(7.35), AcidBaseStatus::Normal);
    assert_eq!(at(7.45), AcidBaseStatus::Normal);
    assert_eq!(at(7.46), AcidBaseStatus::Alkalemia);
}

#[test]
fn status_detects_mixed_disorder_at_normal_ph() {
    let record = BloodGasInput::new(7.40, 60.0, 36.0).validate().unwrap();
    assert_eq!(
        status::classify(&record),
        AcidBaseStatus::NormalWithMixedDisorder
    );
}

#[test]
fn anion_gap_absent_without_ionogram() {
    let record = BloodGasInput::new(7.20, 30.0, 12.0).validate().unwrap();
    assert_eq!(anion_gap::evaluate(&record), None);
}

#[test]
fn anion_gap_of_exactly_twelve_is_normal() {
    let record = BloodGasInput::new(7.30, 30.0, 20.0)
        .with_electrolytes(140.0, 108.0)
        .validate()
        .unwrap();
    let gap = anion_gap::evaluate(&record).unwrap();
    assert_eq!(gap.value, 12.0);
    assert!(!anion_gap::is_high(&gap));
}

#[test]
fn delta_ratio_bands() {
    assert_eq!(
        anion_gap::interpret_ratio(0.39),
        DeltaRatioInterpretation::HyperchloremicAcidosisAssociated
    );
    assert_eq!(
        anion_gap::interpret_ratio(0.4),
        DeltaRatioInterpretation::PureHighAnionGapAcidosis
    );
    assert_eq!(
        anion_gap::interpret_ratio(2.0),
        DeltaRatioInterpretation::PureHighAnionGapAcidosis
    );
    assert_eq!(
        anion_gap::interpret_ratio(2.01),
        DeltaRatioInterpretation::MetabolicAlkalosisAssociated
    );
}

#[test]
fn negative_delta_ratio_falls_in_the_hyperchloremic_band() {
    let gap = AnionGap {
        value: 20.0,
        corrected: 20.0,
        albumin_corrected: false,
    };
    let dd = anion_gap::delta_delta(&gap, 25.0);
    assert_eq!(dd.delta_hco3, -1.0);
    assert_eq!(dd.ratio, Some(-8.0));
    assert_eq!(
        dd.interpretation,
        Some(DeltaRatioInterpretation::HyperchloremicAcidosisAssociated)
    );
}

#[test]
fn respiratory_assessment_absent_for_normal_pco2() {
    let record = BloodGasInput::new(7.30, 40.0, 18.0).validate().unwrap();
    assert_eq!(respiratory::assess(&record), None);
}

#[test]
fn chronic_respiratory_acidosis() {
    // delta 20: acute 26, chronic 32.
    let record = BloodGasInput::new(7.36, 60.0, 32.0).validate().unwrap();
    let assessment = respiratory::assess(&record).unwrap();
    assert_eq!(assessment.category, DisorderCategory::RespiratoryAcidosis);
    assert_eq!(assessment.chronicity, Chronicity::Chronic);
}

#[test]
fn acute_on_chronic_between_expectations() {
    // delta 30: acute 27, chronic 36.
    let record = BloodGasInput::new(7.28, 70.0, 30.0).validate().unwrap();
    assert_eq!(
        respiratory::assess(&record).unwrap().chronicity,
        Chronicity::AcuteOnChronic
    );
}

#[test]
fn acute_wins_when_both_expectations_match() {
    assert_eq!(
        respiratory::classify_chronicity(25.0, 24.5, 26.0),
        Chronicity::Acute
    );
}

#[test]
fn chronicity_tolerances_are_inclusive() {
    assert_eq!(
        respiratory::classify_chronicity(23.5, 22.0, 18.0),
        Chronicity::Acute
    );
    assert_eq!(
        respiratory::classify_chronicity(20.0, 22.0, 18.0),
        Chronicity::Chronic
    );
}

#[test]
fn metabolic_primary_follows_ph_direction() {
    assert_eq!(
        MetabolicPrimary::select(7.40, true, false),
        Some(MetabolicPrimary::Acidosis)
    );
    assert_eq!(MetabolicPrimary::select(7.41, true, false), None);
    assert_eq!(
        MetabolicPrimary::select(7.41, true, true),
        Some(MetabolicPrimary::Alkalosis)
    );
    assert_eq!(MetabolicPrimary::select(7.40, false, true), None);
    assert_eq!(
        MetabolicPrimary::select(7.30, true, true),
        Some(MetabolicPrimary::Acidosis)
    );
}

#[test]
fn winters_band_edges_are_compensated() {
    // Expected 23, band 21..25.
    for pco2 in [21.0, 23.0, 25.0] {
        let outcome = compensation::assess(MetabolicPrimary::Acidosis, pco2, 10.0);
        assert_eq!(outcome.assessment.verdict, CompensationVerdict::Compensated);
        assert_eq!(outcome.associated, None);
    }
    let below = compensation::assess(MetabolicPrimary::Acidosis, 20.0, 10.0);
    assert_eq!(
        below.assessment.verdict,
        CompensationVerdict::UnderCompensatedRespiratoryAlkalosis
    );
    assert_eq!(below.associated, Some(DisorderCategory::RespiratoryAlkalosis));
}

#[test]
fn alkalosis_response_above_band_is_respiratory_acidosis() {
    // Expected 40 + 0.7 * 6 = 44.2.
    let outcome = compensation::assess(MetabolicPrimary::Alkalosis, 50.0, 30.0);
    assert_eq!(
        outcome.assessment.verdict,
        CompensationVerdict::UnderCompensatedRespiratoryAcidosis
    );
    assert_eq!(outcome.associated, Some(DisorderCategory::RespiratoryAcidosis));
    assert!(outcome.note.starts_with("Not compensated"));
}

#[test]
fn every_category_has_four_ordered_causes() {
    for category in [
        DisorderCategory::HighAnionGapMetabolicAcidosis,
        DisorderCategory::NormalAnionGapMetabolicAcidosis,
        DisorderCategory::MetabolicAlkalosis,
        DisorderCategory::RespiratoryAcidosis,
        DisorderCategory::RespiratoryAlkalosis,
    ] {
        let causes = etiology::causes(category);
        assert_eq!(causes.len(), 4, "{category}");
        assert_eq!(etiology::owned_causes(category).len(), causes.len());
    }
    assert!(etiology::causes(DisorderCategory::HighAnionGapMetabolicAcidosis)[0]
        .starts_with("Ketoacidosis"));
}
