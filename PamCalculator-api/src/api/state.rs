use std::sync::{Arc, RwLock};

use tracing::error;

use pam_calculator_domain::clock::Clock;
use pam_calculator_domain::services::Calculator;

use crate::entities::common::ErrorResponse;

/// The one calculator instance served by this process
pub type SharedCalculator = Arc<RwLock<Calculator>>;

/// Build the shared calculator, reading the clock once
pub fn create_calculator(clock: &dyn Clock) -> SharedCalculator {
    Arc::new(RwLock::new(Calculator::new(clock)))
}

/// Run `f` against the calculator under the write lock
pub fn with_calculator<T>(
    state: &SharedCalculator,
    f: impl FnOnce(&mut Calculator) -> T,
) -> Result<T, ErrorResponse> {
    match state.write() {
        Ok(mut calculator) => Ok(f(&mut calculator)),
        Err(_) => {
            error!("Calculator state lock is poisoned");
            Err(ErrorResponse::internal_error())
        }
    }
}

/// Run `f` against the calculator under the read lock
pub fn read_calculator<T>(
    state: &SharedCalculator,
    f: impl FnOnce(&Calculator) -> T,
) -> Result<T, ErrorResponse> {
    match state.read() {
        Ok(calculator) => Ok(f(&calculator)),
        Err(_) => {
            error!("Calculator state lock is poisoned");
            Err(ErrorResponse::internal_error())
        }
    }
}
