// PamCalculator Domain
// This crate contains the business logic for the PAM calculator

// Time sources
pub mod clock;

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// Testing utilities - only available with mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;
