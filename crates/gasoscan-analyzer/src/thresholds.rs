//! Fixed constants of the interpretation rules.
//!
//! Reference bands for pH, pCO2 and HCO3 live on
//! [`gasoscan_core::models::parameter::Parameter::normal_range`].

/// pH that separates acid-leaning from alkaline-leaning primaries.
pub const NEUTRAL_PH: f64 = 7.40;

pub const NORMAL_PCO2: f64 = 40.0;
pub const NORMAL_HCO3: f64 = 24.0;

/// Upper limit of a normal anion gap (mEq/L).
pub const ANION_GAP_UPPER: f64 = 12.0;
/// Normal albumin (g/dL) the gap correction is anchored to.
pub const REFERENCE_ALBUMIN: f64 = 4.5;
/// Anion gap change per g/dL of albumin below reference.
pub const ALBUMIN_GAP_FACTOR: f64 = 2.5;

pub const DELTA_RATIO_HYPERCHLOREMIC_BELOW: f64 = 0.4;
pub const DELTA_RATIO_ALKALOSIS_ABOVE: f64 = 2.0;

/// HCO3 change per mmHg of pCO2 deviation.
pub const ACUTE_ACIDOSIS_COEFFICIENT: f64 = 0.1;
pub const CHRONIC_ACIDOSIS_COEFFICIENT: f64 = 0.4;
pub const ACUTE_ALKALOSIS_COEFFICIENT: f64 = 0.2;
pub const CHRONIC_ALKALOSIS_COEFFICIENT: f64 = 0.4;

pub const ACUTE_TOLERANCE: f64 = 1.5;
pub const CHRONIC_TOLERANCE: f64 = 2.0;

/// Half-width of every expected-pCO2 band (mmHg).
pub const COMPENSATION_TOLERANCE: f64 = 2.0;
