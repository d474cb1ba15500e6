//! Log output for the service. `RUST_LOG` narrows the filter and
//! `BETGUIDE_LOG_FORMAT` picks JSON lines (default) or a compact format.

use std::env;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_FORMAT_VAR: &str = "BETGUIDE_LOG_FORMAT";

/// Catalog queries are logged at warn by the ORM layers unless asked for.
pub const DEFAULT_FILTER: &str = "info,betguide=info,actix_web=info,sqlx=warn,sea_orm=warn";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Compact,
}

impl LogFormat {
    /// Unknown values fall back to JSON.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "pretty" | "text" => Self::Compact,
            _ => Self::Json,
        }
    }

    pub fn from_env() -> Self {
        env::var(LOG_FORMAT_VAR)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(env_filter);

    match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(fmt::layer().with_target(false).with_ansi(false).json())
            .init(),
        LogFormat::Compact => registry
            .with(fmt::layer().with_target(false).compact())
            .init(),
    }
}
