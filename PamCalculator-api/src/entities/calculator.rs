use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use pam_calculator_domain::entities::PressureForm;

/// Request payload for the calculate action
///
/// Values are text, as typed into the form. A missing field counts as empty.
/// Each input is capped at 32 characters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CalculateRequest {
    /// Systolic pressure in mmHg, e.g. "120"
    #[validate(length(max = 32, message = "Systolic input cannot exceed 32 characters"))]
    #[serde(default)]
    pub systolic: Option<String>,

    /// Diastolic pressure in mmHg, e.g. "80"
    #[validate(length(max = 32, message = "Diastolic input cannot exceed 32 characters"))]
    #[serde(default)]
    pub diastolic: Option<String>,
}

impl From<CalculateRequest> for PressureForm {
    fn from(request: CalculateRequest) -> Self {
        PressureForm::new(
            request.systolic.unwrap_or_default(),
            request.diastolic.unwrap_or_default(),
        )
    }
}
