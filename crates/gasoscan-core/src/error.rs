use thiserror::Error;

use crate::models::parameter::{Parameter, ReferenceRange};

/// Rejection raised by the validation boundary. The analysis never runs
/// on an input that produced one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{parameter} is not a finite number")]
    NotFinite { parameter: Parameter },

    #[error("{parameter} {value} is outside the physiological range [{}, {}]", .range.min, .range.max)]
    OutOfRange {
        parameter: Parameter,
        value: f64,
        range: ReferenceRange,
    },

    #[error("missing required field: {0}")]
    MissingField(Parameter),

    #[error("{present} was given without {missing}; sodium and chloride must be provided together")]
    UnpairedElectrolyte {
        present: Parameter,
        missing: Parameter,
    },
}
