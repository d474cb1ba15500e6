//! Typed domain records and repository functions (generic over ConnectionTrait).
//!
//! Rows are validated on the way in; a stored value that does not fit its
//! record surfaces as `InfraErrorKind::DataCorruption`.

pub mod bonuses;
pub mod casinos;
pub mod countries;
pub mod licenses;

/// Ratings and scores must at least be real numbers.
pub(crate) fn finite(value: f64, what: &str, id: i64) -> Result<f64, crate::errors::DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(crate::errors::DomainError::corrupt(format!(
            "non-finite {what} stored for id={id}"
        )))
    }
}

pub(crate) fn finite_opt(
    value: Option<f64>,
    what: &str,
    id: i64,
) -> Result<Option<f64>, crate::errors::DomainError> {
    value.map(|v| finite(v, what, id)).transpose()
}
