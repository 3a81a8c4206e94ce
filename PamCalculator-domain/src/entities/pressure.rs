use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Raw text of the two pressure inputs, exactly as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct PressureForm {
    /// Systolic pressure text (mmHg)
    pub systolic: String,

    /// Diastolic pressure text (mmHg)
    pub diastolic: String,
}

impl PressureForm {
    pub fn new(systolic: impl Into<String>, diastolic: impl Into<String>) -> Self {
        Self {
            systolic: systolic.into(),
            diastolic: diastolic.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.systolic.is_empty() && self.diastolic.is_empty()
    }
}

/// A parsed blood pressure reading in mmHg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureReading {
    /// Systolic blood pressure (the higher number)
    pub systolic: f64,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: f64,
}

/// Treatment guidance derived from a mean arterial pressure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvisoryMessage {
    /// PAM at or below 60: give nothing and report
    NoTreatmentReport,

    /// PAM strictly between 60 and 82: base dose only
    BaseDoseOnly,

    /// PAM at or above 82: add half a 40mg furosemide tablet
    AddHalfFurosemide,
}

impl AdvisoryMessage {
    pub fn text(&self) -> &'static str {
        match self {
            AdvisoryMessage::NoTreatmentReport => "Atención: No dar nada. Reportar!",
            AdvisoryMessage::BaseDoseOnly => "Dar sólo la dosis base.",
            AdvisoryMessage::AddHalfFurosemide => "Añadir media pastilla de Furosemida 40mg",
        }
    }
}

/// Successful MAP computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapResult {
    /// Mean arterial pressure, already rounded to one decimal
    pub pam: f64,

    /// Classification of `pam`
    pub advisory: AdvisoryMessage,
}

impl MapResult {
    /// PAM formatted the way it is displayed, always with one decimal
    pub fn formatted(&self) -> String {
        format!("{:.1}", self.pam)
    }
}

/// Contents of the message area below the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormMessage {
    /// Either input is empty or unreadable
    MissingInput,

    /// Systolic is not greater than diastolic
    InvalidRange,

    /// A treatment advisory for a computed PAM
    Advisory(AdvisoryMessage),
}

impl FormMessage {
    pub fn text(&self) -> &'static str {
        match self {
            FormMessage::MissingInput => "Ingrese los valores de presión",
            FormMessage::InvalidRange => "Error: La presión sistólica debe ser mayor a la diastólica",
            FormMessage::Advisory(advisory) => advisory.text(),
        }
    }

    /// Flat machine-readable tag for the message
    pub fn kind(&self) -> &'static str {
        match self {
            FormMessage::MissingInput => "MISSING_INPUT",
            FormMessage::InvalidRange => "INVALID_RANGE",
            FormMessage::Advisory(AdvisoryMessage::NoTreatmentReport) => "NO_TREATMENT_REPORT",
            FormMessage::Advisory(AdvisoryMessage::BaseDoseOnly) => "BASE_DOSE_ONLY",
            FormMessage::Advisory(AdvisoryMessage::AddHalfFurosemide) => "ADD_HALF_FUROSEMIDE",
        }
    }

    pub fn tone(&self) -> MessageTone {
        match self {
            FormMessage::MissingInput => MessageTone::Prompt,
            FormMessage::InvalidRange => MessageTone::Alert,
            FormMessage::Advisory(AdvisoryMessage::NoTreatmentReport) => MessageTone::Alert,
            FormMessage::Advisory(_) => MessageTone::Info,
        }
    }
}

/// Visual weight of a form message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum MessageTone {
    Alert,
    Prompt,
    Info,
}

impl MessageTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageTone::Alert => "alert",
            MessageTone::Prompt => "prompt",
            MessageTone::Info => "info",
        }
    }
}
