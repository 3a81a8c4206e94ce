use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Day-parity advisory about the syrup, unrelated to the pressure reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyrupAdvisory {
    /// Even day of the year
    TakeSyrup,

    /// Odd day of the year
    NoSyrup,
}

impl SyrupAdvisory {
    pub fn text(&self) -> &'static str {
        match self {
            SyrupAdvisory::TakeSyrup => "Hoy se debe tomar el jarabe (día par)",
            SyrupAdvisory::NoSyrup => "Hoy no se debe tomar el jarabe (día impar)",
        }
    }
}
