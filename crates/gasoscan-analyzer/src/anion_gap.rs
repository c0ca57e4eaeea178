//! Anion gap, albumin correction, and delta/delta evaluation.

use gasoscan_core::models::blood_gas::BloodGasRecord;
use gasoscan_core::models::diagnosis::{AnionGap, DeltaDelta, DeltaRatioInterpretation};

use crate::thresholds::{
    ALBUMIN_GAP_FACTOR, ANION_GAP_UPPER, DELTA_RATIO_ALKALOSIS_ABOVE,
    DELTA_RATIO_HYPERCHLOREMIC_BELOW, NORMAL_HCO3, REFERENCE_ALBUMIN,
};

/// Compute the anion gap. `None` when the record has no ionogram.
pub fn evaluate(record: &BloodGasRecord) -> Option<AnionGap> {
    let ionogram = record.ionogram()?;
    let value = ionogram.na - (ionogram.cl + record.hco3());

    let albumin_corrected = record.albumin() != REFERENCE_ALBUMIN;
    let corrected = if albumin_corrected {
        value + ALBUMIN_GAP_FACTOR * (REFERENCE_ALBUMIN - record.albumin())
    } else {
        value
    };

    Some(AnionGap {
        value,
        corrected,
        albumin_corrected,
    })
}

pub fn is_high(gap: &AnionGap) -> bool {
    gap.corrected > ANION_GAP_UPPER
}

/// Compare the rise in anion gap with the fall in bicarbonate.
///
/// A zero bicarbonate delta leaves the ratio undefined; both `ratio` and
/// `interpretation` are then `None`. Every other ratio, negative ones
/// included, goes through [`interpret_ratio`].
pub fn delta_delta(gap: &AnionGap, hco3: f64) -> DeltaDelta {
    let delta_anion_gap = gap.corrected - ANION_GAP_UPPER;
    let delta_hco3 = NORMAL_HCO3 - hco3;

    if delta_hco3 == 0.0 {
        return DeltaDelta {
            delta_anion_gap,
            delta_hco3,
            ratio: None,
            interpretation: None,
        };
    }

    let ratio = delta_anion_gap / delta_hco3;
    DeltaDelta {
        delta_anion_gap,
        delta_hco3,
        ratio: Some(ratio),
        interpretation: Some(interpret_ratio(ratio)),
    }
}

/// Bands: `< 0.4` hyperchloremic, `0.4..=2.0` pure, `> 2.0` alkalosis.
pub fn interpret_ratio(ratio: f64) -> DeltaRatioInterpretation {
    if ratio < DELTA_RATIO_HYPERCHLOREMIC_BELOW {
        DeltaRatioInterpretation::HyperchloremicAcidosisAssociated
    } else if ratio > DELTA_RATIO_ALKALOSIS_ABOVE {
        DeltaRatioInterpretation::MetabolicAlkalosisAssociated
    } else {
        DeltaRatioInterpretation::PureHighAnionGapAcidosis
    }
}
