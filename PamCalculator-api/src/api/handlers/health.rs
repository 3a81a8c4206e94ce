use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use std::time::{SystemTime, UNIX_EPOCH};
use std::sync::{Arc, Once};
use std::collections::HashMap;
use once_cell::sync::OnceCell;
use async_trait::async_trait;

use pam_calculator_domain::health::{
    calculator_component, check_calculator_state, ComponentStatus as DomainComponentStatus,
    HealthComponent as DomainHealthComponent, HealthServiceTrait, SystemHealth, SystemStatus,
};

use crate::api::state::SharedCalculator;
use crate::config::AppConfig;

/// Health check response model
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status ("ok", "degraded", or "error")
    pub status: String,
    /// Current application version from Cargo manifest
    pub version: String,
    /// Timestamp of when the response was generated
    pub timestamp: u64,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Details about various components of the system
    pub components: ComponentStatus,
    /// Environment information
    pub environment: String,
}

/// Status of individual system components
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentStatus {
    /// Calculator state status
    pub calculator: ComponentHealthStatus,
    /// API status
    pub api: ComponentHealthStatus,
}

/// Health status for an individual component
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// Status of the component ("ok", "degraded", or "error")
    pub status: String,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// Track the time when the server started using a thread-safe OnceCell
static SERVER_START_TIME: OnceCell<u64> = OnceCell::new();
static INIT: Once = Once::new();

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

// Initialize the server start time
pub fn initialize_server_start_time() {
    INIT.call_once(|| {
        let _ = SERVER_START_TIME.set(unix_now());
    });
}

/// Health check endpoint to verify the service is running
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Service is not healthy", body = HealthResponse),
        (status = 503, description = "Service is degraded", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip(health_service, config))]
pub async fn health_check(
    Extension(health_service): Extension<Arc<dyn HealthServiceTrait + Send + Sync>>,
    Extension(config): Extension<Arc<AppConfig>>,
) -> impl IntoResponse {
    info!("Health check requested");

    let now = unix_now();
    let uptime = SERVER_START_TIME.get().map(|&start_time| now.saturating_sub(start_time));

    let system_health = health_service.get_system_health().await;

    let overall_status = match system_health.status {
        SystemStatus::Healthy => "ok",
        SystemStatus::Degraded => "degraded",
        SystemStatus::Unhealthy => "error",
    };

    let response = HealthResponse {
        status: overall_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now,
        uptime,
        components: ComponentStatus {
            calculator: component_health(&system_health, "calculator"),
            api: component_health(&system_health, "api"),
        },
        environment: config.environment.clone(),
    };

    let status = match system_health.status {
        SystemStatus::Healthy => StatusCode::OK,
        SystemStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
        SystemStatus::Unhealthy => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(response))
}

fn component_health(system_health: &SystemHealth, name: &str) -> ComponentHealthStatus {
    let component = system_health.components.get(name);
    ComponentHealthStatus {
        status: map_component_status(
            component.map(|c| &c.status).unwrap_or(&DomainComponentStatus::Healthy),
        ),
        message: component.and_then(|c| c.details.clone()),
    }
}

/// Map domain component status to API status string
fn map_component_status(status: &DomainComponentStatus) -> String {
    match status {
        DomainComponentStatus::Healthy => "ok",
        DomainComponentStatus::Degraded => "degraded",
        DomainComponentStatus::Unhealthy => "error",
    }.to_string()
}

/// Health service backed by the live calculator state
#[derive(Debug)]
pub struct HealthService {
    calculator: SharedCalculator,
}

impl HealthService {
    /// Create a new health service
    pub fn new(calculator: SharedCalculator) -> Self {
        HealthService { calculator }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();

        components.insert(
            "calculator".to_string(),
            calculator_component(self.check_calculator_status().await),
        );

        // Add API component (always healthy in this implementation)
        components.insert(
            "api".to_string(),
            DomainHealthComponent {
                status: DomainComponentStatus::Healthy,
                details: None,
            },
        );

        SystemHealth::from_components(components)
    }

    async fn check_calculator_status(&self) -> Result<(), String> {
        check_calculator_state(&self.calculator)
    }
}

/// Factory function to create a health service
pub fn create_health_service(calculator: SharedCalculator) -> Arc<dyn HealthServiceTrait + Send + Sync> {
    Arc::new(HealthService::new(calculator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pam_calculator_domain::testing::{shared_calculator_on, MockHealthService};

    #[tokio::test]
    async fn test_health_check_response() {
        initialize_server_start_time();

        let health_service = create_health_service(shared_calculator_on(2025, 1, 1));

        let response = health_check(
            Extension(health_service),
            Extension(Arc::new(AppConfig::default())),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unhealthy_calculator_reports_error() {
        let health_service: Arc<dyn HealthServiceTrait + Send + Sync> =
            Arc::new(MockHealthService::new().with_unhealthy_calculator());

        let response = health_check(
            Extension(health_service),
            Extension(Arc::new(AppConfig::default())),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
