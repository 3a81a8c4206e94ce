// Public entities for the PAM calculator API
// This module contains data structures that are shared across the application boundary

// Request payloads for the calculator form
pub mod calculator;

// Common entities for error handling
pub mod common;
