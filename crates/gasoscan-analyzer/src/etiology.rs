//! Candidate causes per disorder category, most common first.

use gasoscan_core::models::diagnosis::DisorderCategory;

const HIGH_ANION_GAP_METABOLIC_ACIDOSIS: &[&str] = &[
    "Ketoacidosis (diabetic, alcoholic, starvation)",
    "Lactic acidosis (sepsis, shock, mesenteric ischemia)",
    "Acute or chronic kidney failure (uremia)",
    "Intoxication (methanol, ethylene glycol, late salicylate)",
];

const NORMAL_ANION_GAP_METABOLIC_ACIDOSIS: &[&str] = &[
    "Lower gastrointestinal losses: severe diarrhea, biliary or pancreatic fistula",
    "Renal losses: renal tubular acidosis (type I, II or IV)",
    "Carbonic anhydrase inhibitors (e.g. acetazolamide)",
    "Massive volume expansion with 0.9% saline",
];

const METABOLIC_ALKALOSIS: &[&str] = &[
    "Gastric losses: intractable vomiting, nasogastric suction",
    "Diuretics (furosemide, thiazides) with volume contraction",
    "Severe hypokalemia (intracellular H+ shift)",
    "Primary or secondary hyperaldosteronism",
];

const RESPIRATORY_ACIDOSIS: &[&str] = &[
    "CNS depression (opioid or benzodiazepine intoxication, brainstem lesion)",
    "Respiratory muscle fatigue (severe asthma, COPD exacerbation)",
    "Neuromuscular disease (Guillain-Barré, myasthenia gravis, ALS)",
    "Upper airway obstruction or severe obstructive sleep apnea",
];

const RESPIRATORY_ALKALOSIS: &[&str] = &[
    "Psychogenic hyperventilation (anxiety, panic attack)",
    "Respiratory center stimulation (pain, fever, early sepsis)",
    "Hypoxemia (pulmonary embolism, pneumonia, high altitude)",
    "Pregnancy (progesterone effect)",
];

pub fn causes(category: DisorderCategory) -> &'static [&'static str] {
    match category {
        DisorderCategory::HighAnionGapMetabolicAcidosis => HIGH_ANION_GAP_METABOLIC_ACIDOSIS,
        DisorderCategory::NormalAnionGapMetabolicAcidosis => NORMAL_ANION_GAP_METABOLIC_ACIDOSIS,
        DisorderCategory::MetabolicAlkalosis => METABOLIC_ALKALOSIS,
        DisorderCategory::RespiratoryAcidosis => RESPIRATORY_ACIDOSIS,
        DisorderCategory::RespiratoryAlkalosis => RESPIRATORY_ALKALOSIS,
    }
}

pub fn owned_causes(category: DisorderCategory) -> Vec<String> {
    causes(category).iter().map(|c| (*c).to_string()).collect()
}
