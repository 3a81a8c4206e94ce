use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::handlers::{calculator, health, page};
use crate::api::state::{create_calculator, SharedCalculator};
use crate::config::AppConfig;
use crate::openapi::configure_swagger_routes;

/// Create the application router with a fresh calculator built from the configured clock
pub fn create_app(config: &AppConfig) -> Router {
    let clock = config.clock();
    let calculator = create_calculator(clock.as_ref());
    create_app_with_state(config, calculator)
}

/// Create the application router around an existing calculator
pub fn create_app_with_state(config: &AppConfig, calculator: SharedCalculator) -> Router {
    debug!("Creating application router");

    let health_service = health::create_health_service(calculator.clone());

    // The HTML page and its form actions
    let page_routes = Router::new()
        .route("/", get(page::show_page))
        .route("/calculate", post(page::calculate_page))
        .route("/clear", post(page::clear_page));

    debug!("Page routes configured");

    // JSON surface for the same calculator
    let api_routes = Router::new()
        .route("/calculator", get(calculator::get_calculator))
        .route("/calculator/calculate", post(calculator::calculate))
        .route("/calculator/clear", post(calculator::clear));

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service))
        .layer(Extension(Arc::new(config.clone())));

    let app = Router::new()
        .merge(page_routes)
        .nest("/api/v1", api_routes)
        .with_state(calculator)
        .merge(public_routes);

    // Configure the Swagger UI using the helper function
    let app = add_swagger_ui(app);

    debug!("Swagger UI merged");

    health::initialize_server_start_time();

    app.layer(TraceLayer::new_for_http())
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    let swagger = configure_swagger_routes();
    app.merge(swagger)
}
