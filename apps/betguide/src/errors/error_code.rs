//! Error codes for the betguide API.
//!
//! Every code that can appear in a Problem Details body is listed here.
//! Never pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes. Each variant maps to the SCREAMING_SNAKE_CASE
/// string that appears in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Malformed country code path segment
    InvalidCountryCode,
    /// Malformed casino slug path segment
    InvalidSlug,
    /// License id is not a positive integer
    InvalidLicenseId,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    CasinoNotFound,
    CountryNotFound,
    LicenseNotFound,
    /// General not found error
    NotFound,

    // System Errors
    DbUnavailable,
    DbTimeout,
    DataCorruption,
    InternalError,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCountryCode => "INVALID_COUNTRY_CODE",
            Self::InvalidSlug => "INVALID_SLUG",
            Self::InvalidLicenseId => "INVALID_LICENSE_ID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::CasinoNotFound => "CASINO_NOT_FOUND",
            Self::CountryNotFound => "COUNTRY_NOT_FOUND",
            Self::LicenseNotFound => "LICENSE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
