//! Natural keys taken from the route path, validated before any lookup.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

const MAX_SLUG_LEN: usize = 100;

/// Lowercased country code from `{code}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCode(pub String);

/// Casino slug from `{slug}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasinoSlug(pub String);

/// License id from `{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LicenseId(pub i64);

pub fn parse_country_code(raw: &str) -> Result<CountryCode, AppError> {
    let valid = (2..=8).contains(&raw.len())
        && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !valid {
        return Err(AppError::bad_request(
            ErrorCode::InvalidCountryCode,
            format!("Invalid country code: {raw}"),
        ));
    }
    Ok(CountryCode(raw.to_ascii_lowercase()))
}

pub fn parse_slug(raw: &str) -> Result<CasinoSlug, AppError> {
    let valid = !raw.is_empty()
        && raw.len() <= MAX_SLUG_LEN
        && raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid {
        return Err(AppError::bad_request(
            ErrorCode::InvalidSlug,
            format!("Invalid casino slug: {raw}"),
        ));
    }
    Ok(CasinoSlug(raw.to_string()))
}

pub fn parse_license_id(raw: &str) -> Result<LicenseId, AppError> {
    let id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidLicenseId, format!("Invalid license id: {raw}"))
    })?;
    if id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidLicenseId,
            format!("License id must be positive, got: {id}"),
        ));
    }
    Ok(LicenseId(id))
}

fn segment<'a>(req: &'a HttpRequest, name: &str, code: ErrorCode) -> Result<&'a str, AppError> {
    req.match_info()
        .get(name)
        .ok_or_else(|| AppError::bad_request(code, format!("Missing {name} parameter")))
}

impl FromRequest for CountryCode {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(segment(req, "code", ErrorCode::InvalidCountryCode).and_then(parse_country_code))
    }
}

impl FromRequest for CasinoSlug {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(segment(req, "slug", ErrorCode::InvalidSlug).and_then(parse_slug))
    }
}

impl FromRequest for LicenseId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(segment(req, "id", ErrorCode::InvalidLicenseId).and_then(parse_license_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_codes() {
        assert_eq!(parse_country_code("ES").unwrap(), CountryCode("es".into()));
        assert_eq!(parse_country_code("es-mx").unwrap().0, "es-mx");
        for bad in ["e", "toolongcode", "e s", "es_"] {
            let err = parse_country_code(bad).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidCountryCode, "{bad}");
        }
    }

    #[test]
    fn slugs() {
        assert!(parse_slug("bet-365").is_ok());
        assert!(parse_slug("").is_err());
        assert!(parse_slug("Bet365").is_err());
        assert!(parse_slug("a/b").is_err());
        assert!(parse_slug(&"a".repeat(101)).is_err());
    }

    #[test]
    fn license_ids() {
        assert_eq!(parse_license_id("7").unwrap(), LicenseId(7));
        for bad in ["0", "-3", "x", "1.5"] {
            let err = parse_license_id(bad).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidLicenseId, "{bad}");
        }
    }
}
