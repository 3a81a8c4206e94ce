use axum::{
    extract::{Json, State},
    response::{IntoResponse, Response},
};
use tracing::{info, instrument, warn};
use validator::Validate;

use pam_calculator_domain::entities::PressureForm;
use pam_calculator_domain::services::CalculatorView;

use crate::api::state::{read_calculator, with_calculator, SharedCalculator};
use crate::entities::calculator::CalculateRequest;
use crate::entities::common::ErrorResponse;

/// Reject over-long inputs before they reach the calculator
pub(crate) fn validate_request(request: &CalculateRequest) -> Result<(), ErrorResponse> {
    request.validate().map_err(|errors| {
        warn!("Invalid calculate request: {}", errors);
        ErrorResponse::validation_error(
            "Invalid pressure input",
            serde_json::to_value(&errors).ok(),
        )
    })
}

/// Current state of the calculator
#[utoipa::path(
    get,
    path = "/api/v1/calculator",
    responses(
        (status = 200, description = "Current calculator state", body = CalculatorView),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "calculator"
)]
#[instrument(skip(state))]
pub async fn get_calculator(State(state): State<SharedCalculator>) -> Result<Json<CalculatorView>, Response> {
    let view = read_calculator(&state, |calculator| calculator.view())
        .map_err(IntoResponse::into_response)?;
    Ok(Json(view))
}

/// Set both inputs and compute the PAM
///
/// Missing or invalid pressures are not request errors: the returned view carries
/// the matching message and no PAM value.
#[utoipa::path(
    post,
    path = "/api/v1/calculator/calculate",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Calculator state after the calculation", body = CalculatorView),
        (status = 400, description = "Input text too long", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "calculator"
)]
#[instrument(skip(state, request))]
pub async fn calculate(
    State(state): State<SharedCalculator>,
    Json(request): Json<CalculateRequest>,
) -> Result<Json<CalculatorView>, Response> {
    validate_request(&request).map_err(IntoResponse::into_response)?;

    let form = PressureForm::from(request);
    let view = with_calculator(&state, |calculator| {
        calculator.set_form(form);
        calculator.calculate()
    })
    .map_err(IntoResponse::into_response)?;

    info!(pam = ?view.pam, "Calculation requested");
    Ok(Json(view))
}

/// Reset the inputs and the result, keeping the syrup advisory
#[utoipa::path(
    post,
    path = "/api/v1/calculator/clear",
    responses(
        (status = 200, description = "Calculator state after the reset", body = CalculatorView),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "calculator"
)]
#[instrument(skip(state))]
pub async fn clear(State(state): State<SharedCalculator>) -> Result<Json<CalculatorView>, Response> {
    let view = with_calculator(&state, |calculator| calculator.clear())
        .map_err(IntoResponse::into_response)?;

    info!("Calculator cleared");
    Ok(Json(view))
}
