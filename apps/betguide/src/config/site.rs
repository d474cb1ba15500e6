use std::env;

use crate::error::AppError;

pub const DEFAULT_SITE_NAME: &str = "BetGuide";

/// Site-wide settings substituted into titles, headers and footers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_name: String,
}

impl SiteConfig {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
        }
    }

    /// Reads `SITE_NAME`; blank or missing falls back to the default.
    pub fn from_env() -> Self {
        let site_name = env::var("SITE_NAME")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_NAME.to_string());
        Self { site_name }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_NAME)
    }
}

/// Bind address for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let raw_port = env::var("BACKEND_PORT").unwrap_or_else(|_| "3001".to_string());
        let port = raw_port.parse::<u16>().map_err(|_| {
            AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw_port}'"))
        })?;
        Ok(Self { host, port })
    }
}
