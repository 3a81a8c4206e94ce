use thiserror::Error;

use crate::entities::pressure::{
    AdvisoryMessage, FormMessage, MapResult, PressureForm, PressureReading,
};

/// PAM at or below this value gets no treatment and must be reported
pub const NO_TREATMENT_MAX: f64 = 60.0;

/// PAM at or above this value gets the extra furosemide
pub const FUROSEMIDE_MIN: f64 = 82.0;

/// Which of the two inputs a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureField {
    Systolic,
    Diastolic,
}

impl std::fmt::Display for PressureField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PressureField::Systolic => write!(f, "systolic"),
            PressureField::Diastolic => write!(f, "diastolic"),
        }
    }
}

/// Reasons a form cannot produce a MAP value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// One or both inputs are empty
    #[error("Missing input: both pressure values are required")]
    MissingInput,

    /// An input is not a finite number
    #[error("Invalid number in {field} field")]
    InvalidNumber { field: PressureField },

    /// Systolic is not greater than diastolic
    #[error("Invalid range: systolic must be greater than diastolic")]
    InvalidRange,

    /// Both inputs are finite but the computed PAM is not
    #[error("Pressure values are too large to compute a PAM")]
    OutOfRange,
}

impl FormError {
    /// Message shown to the user for this error
    pub fn message(&self) -> FormMessage {
        match self {
            FormError::MissingInput
            | FormError::InvalidNumber { .. }
            | FormError::OutOfRange => FormMessage::MissingInput,
            FormError::InvalidRange => FormMessage::InvalidRange,
        }
    }
}

/// Parse one pressure input.
///
/// Blank text is `Ok(None)`. Anything that is not a finite `f64` is rejected,
/// including `NaN` and `inf` which `str::parse` would otherwise accept.
pub fn parse_pressure(field: PressureField, text: &str) -> Result<Option<f64>, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(FormError::InvalidNumber { field }),
    }
}

/// Mean arterial pressure rounded to one decimal
pub fn mean_arterial_pressure(reading: &PressureReading) -> f64 {
    let pam = (reading.systolic + 2.0 * reading.diastolic) / 3.0;
    round_one_decimal(pam)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Classify a (rounded) PAM into its treatment advisory
pub fn classify(pam: f64) -> AdvisoryMessage {
    if pam <= NO_TREATMENT_MAX {
        AdvisoryMessage::NoTreatmentReport
    } else if pam < FUROSEMIDE_MIN {
        AdvisoryMessage::BaseDoseOnly
    } else {
        AdvisoryMessage::AddHalfFurosemide
    }
}

/// Validate a reading: systolic must be strictly greater than diastolic
pub fn validate_reading(reading: &PressureReading) -> Result<(), FormError> {
    if reading.systolic <= reading.diastolic {
        return Err(FormError::InvalidRange);
    }
    Ok(())
}

/// Run the full pipeline on the raw form text
pub fn evaluate(form: &PressureForm) -> Result<MapResult, FormError> {
    let systolic = parse_pressure(PressureField::Systolic, &form.systolic);
    let diastolic = parse_pressure(PressureField::Diastolic, &form.diastolic);

    // Emptiness wins over a parse failure in the other field
    if matches!(systolic, Ok(None)) || matches!(diastolic, Ok(None)) {
        return Err(FormError::MissingInput);
    }

    let reading = match (systolic?, diastolic?) {
        (Some(systolic), Some(diastolic)) => PressureReading { systolic, diastolic },
        _ => return Err(FormError::MissingInput),
    };

    validate_reading(&reading)?;

    let pam = mean_arterial_pressure(&reading);
    if !pam.is_finite() {
        return Err(FormError::OutOfRange);
    }

    Ok(MapResult {
        pam,
        advisory: classify(pam),
    })
}
