pub mod calculator;
pub mod date_parity;
pub mod map_classifier;

// Domain services
// This module contains business logic implementations.

// Re-export the controller and pure computations
pub use calculator::{Calculator, CalculatorView, MessageView, SyrupView};
pub use date_parity::{day_of_year, syrup_advisory};
pub use map_classifier::{classify, evaluate, mean_arterial_pressure, FormError, PressureField};
