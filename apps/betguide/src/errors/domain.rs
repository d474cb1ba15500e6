//! Domain-level error type used across repositories and services.
//!
//! HTTP- and DB-agnostic. Handlers return `Result<T, crate::error::AppError>`
//! and convert with `From<DomainError> for AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use tracing::warn;

use crate::trace_ctx;

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    /// Stored row does not have the shape the service expects
    DataCorruption,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Casino,
    Country,
    License,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation failure
    Validation(String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Shorthand for a stored value that failed validation.
    pub fn corrupt(detail: impl Into<String>) -> Self {
        Self::Infra(InfraErrorKind::DataCorruption, detail.into())
    }
}

/// Translate a `DbErr` into a `DomainError`.
///
/// The service only reads, so constraint violations cannot happen here;
/// only not-found, connectivity, timeouts and decode failures are told apart.
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        let error_msg = e.to_string();
        let trace_id = trace_ctx::trace_id();

        match &e {
            sea_orm::DbErr::RecordNotFound(_) => {
                return DomainError::not_found(
                    NotFoundKind::Other("Record".into()),
                    "Record not found",
                );
            }
            sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
                warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
                return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
            }
            sea_orm::DbErr::Type(_) | sea_orm::DbErr::TryIntoErr { .. } => {
                warn!(trace_id = %trace_id, raw_error = %error_msg, "Row decode failed");
                return DomainError::corrupt(format!("Row decode failed: {error_msg}"));
            }
            _ => {}
        }

        if error_msg.contains("timeout") || error_msg.contains("pool timed out") {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout");
            return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
        }

        DomainError::infra(
            InfraErrorKind::Other("DbErr".into()),
            format!("Database operation failed: {error_msg}"),
        )
    }
}
