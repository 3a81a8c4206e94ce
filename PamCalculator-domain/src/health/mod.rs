//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;

use crate::services::calculator::Calculator;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced performance
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

impl SystemHealth {
    /// Build a system health report, deriving the overall status from the components
    pub fn from_components(components: HashMap<String, HealthComponent>) -> Self {
        let status = if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
            SystemStatus::Unhealthy
        } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
            SystemStatus::Degraded
        } else {
            SystemStatus::Healthy
        };

        Self { status, components }
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check the status of the calculator state
    /// Returns an error if the state cannot be accessed
    async fn check_calculator_status(&self) -> Result<(), String>;
}

/// Check that the shared calculator state is still usable
///
/// A poisoned lock means a handler panicked while holding the state.
pub fn check_calculator_state(state: &RwLock<Calculator>) -> Result<(), String> {
    match state.read() {
        Ok(_) => Ok(()),
        Err(_) => Err("Calculator state lock is poisoned".to_string()),
    }
}

/// Health component for a calculator check result
pub fn calculator_component(check: Result<(), String>) -> HealthComponent {
    match check {
        Ok(()) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(e),
        },
    }
}
