//! Runtime configuration read from the environment
//!
//! `.env` is loaded by the binary before [`AppConfig::from_env`] runs.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;

use pam_calculator_domain::clock::{Clock, FixedClock, SystemClock};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("HOST must be an IP address, got {0:?}")]
    InvalidHost(String),

    #[error("PAM_FIXED_DATE must use the YYYY-MM-DD format, got {0:?}")]
    InvalidFixedDate(String),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Reported by the health endpoint
    pub environment: String,
    /// When set, the syrup advisory is evaluated on this date instead of today
    pub fixed_date: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            fixed_date: None,
        }
    }
}

impl AppConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let host_raw = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_raw
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_raw.clone()))?;

        let environment = lookup("APP_ENV")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let fixed_date = match lookup("PAM_FIXED_DATE").filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| ConfigError::InvalidFixedDate(raw.clone()))?,
            ),
            None => None,
        };

        Ok(Self {
            host,
            port,
            environment,
            fixed_date,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Clock the calculator reads its date from
    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.fixed_date {
            Some(date) => Arc::new(FixedClock::new(date)),
            None => Arc::new(SystemClock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_values_from_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("APP_ENV", "production"),
            ("PAM_FIXED_DATE", "2025-01-02"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.environment, "production");
        assert_eq!(config.fixed_date, NaiveDate::from_ymd_opt(2025, 1, 2));
        assert_eq!(config.clock().today(), NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));

        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));

        let err = AppConfig::from_lookup(lookup_from(&[("HOST", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost(_)));

        let err = AppConfig::from_lookup(lookup_from(&[("PAM_FIXED_DATE", "02/01/2025")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFixedDate(_)));
    }

    #[test]
    fn test_blank_optional_values_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[("APP_ENV", " "), ("PAM_FIXED_DATE", "")])).unwrap();
        assert_eq!(config.environment, DEFAULT_ENVIRONMENT);
        assert!(config.fixed_date.is_none());
    }
}
