// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use async_trait::async_trait;

use crate::clock::FixedClock;
use crate::health::{ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth};
use crate::services::calculator::Calculator;

/// Calculator whose syrup advisory was evaluated on the given date
///
/// Panics on a date that does not exist.
pub fn calculator_on(year: i32, month: u32, day: u32) -> Calculator {
    let clock = FixedClock::from_ymd(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {}-{}-{}", year, month, day));
    Calculator::new(&clock)
}

/// Shared calculator state on the given date, as held by the server
pub fn shared_calculator_on(year: i32, month: u32, day: u32) -> Arc<RwLock<Calculator>> {
    Arc::new(RwLock::new(calculator_on(year, month, day)))
}

/// Mock implementation of the HealthServiceTrait for testing
#[derive(Debug)]
pub struct MockHealthService {
    components: HashMap<String, HealthComponent>,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a mock health service where every component is healthy
    pub fn new() -> Self {
        let mut components = HashMap::new();
        components.insert(
            "calculator".to_string(),
            HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
        );
        components.insert(
            "api".to_string(),
            HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
        );
        Self { components }
    }

    /// Configure the mock to report an unusable calculator state
    pub fn with_unhealthy_calculator(mut self) -> Self {
        self.components.insert(
            "calculator".to_string(),
            HealthComponent {
                status: ComponentStatus::Unhealthy,
                details: Some("Calculator state lock is poisoned".to_string()),
            },
        );
        self
    }

    /// Add or replace a component
    pub fn with_component(mut self, name: &str, status: ComponentStatus, details: Option<String>) -> Self {
        self.components.insert(name.to_string(), HealthComponent { status, details });
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        SystemHealth::from_components(self.components.clone())
    }

    async fn check_calculator_status(&self) -> Result<(), String> {
        match self.components.get("calculator") {
            Some(component) if component.status == ComponentStatus::Unhealthy => Err(component
                .details
                .clone()
                .unwrap_or_else(|| "Calculator unavailable".to_string())),
            _ => Ok(()),
        }
    }
}
