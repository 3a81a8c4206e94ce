// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, instrument};

use pam_calculator_domain::entities::PressureForm;
use pam_calculator_domain::services::CalculatorView;

use crate::api::handlers::calculator::validate_request;
use crate::api::state::{read_calculator, with_calculator, SharedCalculator};
use crate::entities::calculator::CalculateRequest;

pub const PAGE_TITLE: &str = "Calculadora de PAM";

#[derive(Template)]
#[template(path = "calculator.html")]
pub struct CalculatorPage {
    pub title: &'static str,
    pub view: CalculatorView,
}

impl CalculatorPage {
    pub fn new(view: CalculatorView) -> Self {
        Self {
            title: PAGE_TITLE,
            view,
        }
    }
}

fn render(view: CalculatorView) -> Response {
    match CalculatorPage::new(view).render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Render the calculator page
#[instrument(skip(state))]
pub async fn show_page(State(state): State<SharedCalculator>) -> Response {
    match read_calculator(&state, |calculator| calculator.view()) {
        Ok(view) => render(view),
        Err(e) => e.into_response(),
    }
}

/// "Calcular" button
#[instrument(skip(state, request))]
pub async fn calculate_page(
    State(state): State<SharedCalculator>,
    Form(request): Form<CalculateRequest>,
) -> Response {
    if let Err(e) = validate_request(&request) {
        return e.into_response();
    }

    let form = PressureForm::from(request);
    match with_calculator(&state, |calculator| {
        calculator.set_form(form);
        calculator.calculate()
    }) {
        Ok(view) => render(view),
        Err(e) => e.into_response(),
    }
}

/// "Limpiar" button
#[instrument(skip(state))]
pub async fn clear_page(State(state): State<SharedCalculator>) -> Response {
    match with_calculator(&state, |calculator| calculator.clear()) {
        Ok(view) => render(view),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pam_calculator_domain::testing::calculator_on;

    #[test]
    fn test_fresh_page_shows_only_syrup() {
        let html = CalculatorPage::new(calculator_on(2025, 1, 1).view()).render().unwrap();

        assert!(html.contains("Calculadora de PAM"));
        assert!(html.contains("Hoy no se debe tomar el jarabe (día impar)"));
        assert!(!html.contains("id=\"pam\""));
        assert!(!html.contains("id=\"message\""));
    }

    #[test]
    fn test_clear_button_skips_browser_validation() {
        let html = CalculatorPage::new(calculator_on(2025, 1, 1).view()).render().unwrap();

        assert!(html.contains("formaction=\"/clear\" formnovalidate"));
    }

    #[test]
    fn test_page_after_calculation() {
        let mut calculator = calculator_on(2025, 1, 2);
        calculator.set_form(PressureForm::new("120", "80"));
        let html = CalculatorPage::new(calculator.calculate()).render().unwrap();

        assert!(html.contains("PAM = 93.3 mmHg"));
        assert!(html.contains("class=\"box tone-info\""));
        assert!(html.contains("data-kind=\"ADD_HALF_FUROSEMIDE\""));
        assert!(html.contains("value=\"120\""));
        assert!(html.contains("Hoy se debe tomar el jarabe (día par)"));
    }

    #[test]
    fn test_page_alert_tone() {
        let mut calculator = calculator_on(2025, 1, 1);
        calculator.set_form(PressureForm::new("80", "100"));
        let html = CalculatorPage::new(calculator.calculate()).render().unwrap();

        assert!(html.contains("class=\"box tone-alert\""));
        assert!(html.contains("Error: La presión sistólica debe ser mayor a la diastólica"));
        assert!(!html.contains("id=\"pam\""));
    }

    #[test]
    fn test_inputs_are_escaped() {
        let mut calculator = calculator_on(2025, 1, 1);
        calculator.set_form(PressureForm::new("\"><script>", "80"));
        let html = CalculatorPage::new(calculator.calculate()).render().unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("class=\"box tone-prompt\""));
    }
}
