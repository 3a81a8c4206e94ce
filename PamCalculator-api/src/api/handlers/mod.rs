pub mod calculator;
pub mod health;
pub mod page;


// Re-export handlers for easier imports
pub use calculator::{calculate, clear, get_calculator};
pub use health::health_check;
pub use page::{calculate_page, clear_page, show_page};
