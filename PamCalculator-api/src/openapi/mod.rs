use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Calculator endpoints
        crate::api::handlers::calculator::get_calculator,
        crate::api::handlers::calculator::calculate,
        crate::api::handlers::calculator::clear,
    ),
    components(
        schemas(
            // Entities
            crate::entities::calculator::CalculateRequest,
            crate::entities::common::ErrorResponse,

            // Calculator views
            pam_calculator_domain::services::CalculatorView,
            pam_calculator_domain::services::MessageView,
            pam_calculator_domain::services::SyrupView,
            pam_calculator_domain::entities::MessageTone,
            pam_calculator_domain::entities::SyrupAdvisory,
            pam_calculator_domain::entities::AdvisoryMessage,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "calculator", description = "Mean arterial pressure calculator")
    ),
    info(
        title = "PAM Calculator API",
        version = "0.1.0",
        description = "Mean arterial pressure calculator with treatment guidance",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_generation() {
        let openapi = ApiDoc::openapi();

        assert_eq!(openapi.info.title, "PAM Calculator API");
        assert_eq!(openapi.info.version, "0.1.0");

        let tags = openapi.tags.as_ref().expect("tags should be defined");
        assert!(tags.iter().any(|tag| tag.name == "health"));
        assert!(tags.iter().any(|tag| tag.name == "calculator"));

        assert!(openapi.paths.paths.contains_key("/health"));
        assert!(openapi.paths.paths.contains_key("/api/v1/calculator"));
        assert!(openapi.paths.paths.contains_key("/api/v1/calculator/calculate"));
        assert!(openapi.paths.paths.contains_key("/api/v1/calculator/clear"));
    }

    #[test]
    fn test_schemas_are_registered() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.expect("components should be defined");

        for name in ["CalculateRequest", "CalculatorView", "SyrupView", "ErrorResponse"] {
            assert!(components.schemas.contains_key(name), "missing schema {}", name);
        }
    }
}
