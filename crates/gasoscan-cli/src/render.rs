use gasoscan_core::models::diagnosis::{CompensationVerdict, Diagnosis};
use gasoscan_core::models::parameter::Parameter;

use crate::config::OutputFormat;

pub fn render(diagnosis: &Diagnosis, format: OutputFormat) -> eyre::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(diagnosis)?),
        OutputFormat::Text => Ok(render_text(diagnosis)),
    }
}

/// Plain-text report: status, disorders, derived values, notes, causes.
pub fn render_text(diagnosis: &Diagnosis) -> String {
    let mut output = format!("Status: {}\n", diagnosis.status);
    output.push_str(&format!("Diagnosis: {}\n", diagnosis.summary()));

    if let Some(gap) = diagnosis.anion_gap {
        if gap.albumin_corrected {
            output.push_str(&format!(
                "Anion gap: {:.1} (albumin-corrected {:.1}) {}\n",
                gap.value,
                gap.corrected,
                Parameter::Na.unit()
            ));
        } else {
            output.push_str(&format!(
                "Anion gap: {:.1} {}\n",
                gap.value,
                Parameter::Na.unit()
            ));
        }
    }

    if let Some(dd) = diagnosis.delta_delta {
        match (dd.ratio, dd.interpretation) {
            (Some(ratio), Some(interpretation)) => {
                output.push_str(&format!("Delta/delta: {ratio:.2} ({interpretation})\n"));
            }
            _ => output.push_str("Delta/delta: not computable\n"),
        }
    }

    if let Some(respiratory) = diagnosis.respiratory {
        output.push_str(&format!(
            "Expected HCO3: acute {:.1}, chronic {:.1} {}\n",
            respiratory.expected_acute_hco3,
            respiratory.expected_chronic_hco3,
            Parameter::Hco3.unit()
        ));
    }

    let expected_band = diagnosis
        .compensation
        .filter(|c| c.verdict != CompensationVerdict::NotApplicable)
        .and_then(|c| c.expected_band);
    if let Some(band) = expected_band {
        output.push_str(&format!(
            "Expected pCO2: {:.1} - {:.1} {}\n",
            band.min,
            band.max,
            Parameter::Pco2.unit()
        ));
    }

    for note in &diagnosis.notes {
        output.push_str(&format!("Note: {note}\n"));
    }

    for (category, causes) in &diagnosis.etiologies {
        output.push_str(&format!("\nPossible causes of {category}:\n"));
        for cause in causes {
            output.push_str(&format!("  - {cause}\n"));
        }
    }

    output
}
