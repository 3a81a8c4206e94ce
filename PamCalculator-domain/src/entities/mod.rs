// Domain entities and value objects
pub mod pressure;
pub mod syrup;

// Re-export common types for easier imports
pub use pressure::{
    AdvisoryMessage, FormMessage, MapResult, MessageTone, PressureForm, PressureReading,
};
pub use syrup::SyrupAdvisory;
