#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod i18n;
pub mod infra;
pub mod listing;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod trace_ctx;
pub mod views;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::db::{db_url, DbKind};
pub use config::site::{ServerConfig, SiteConfig};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use extractors::{CasinoSlug, CountryCode, LicenseId};
pub use i18n::{Language, SiteContext};
pub use infra::db::connect_db;
pub use infra::state::build_state;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::security_headers::SecurityHeaders;
pub use middleware::structured_logger::StructuredLogger;
pub use services::Catalog;
pub use state::app_state::AppState;

// Prelude for test convenience
pub mod prelude {
    pub use super::config::db::*;
    pub use super::config::site::*;
    pub use super::error::*;
    pub use super::extractors::*;
    pub use super::infra::*;
    pub use super::middleware::*;
    pub use super::state::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
