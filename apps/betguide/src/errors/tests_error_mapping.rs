// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_422() {
    let app: AppError = DomainError::validation("bad field").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_not_found_per_entity() {
    let app: AppError = DomainError::not_found(NotFoundKind::Casino, "no casino").into();
    assert_eq!(app.code().as_str(), "CASINO_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Country, "no country").into();
    assert_eq!(app.code().as_str(), "COUNTRY_NOT_FOUND");

    let app: AppError = DomainError::not_found(NotFoundKind::License, "no license").into();
    assert_eq!(app.code().as_str(), "LICENSE_NOT_FOUND");

    let app: AppError =
        DomainError::not_found(NotFoundKind::Other("Record".into()), "missing").into();
    assert_eq!(app.code().as_str(), "NOT_FOUND");
}

#[test]
fn maps_infra() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let app: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError = DomainError::corrupt("bad tier").into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let app: AppError = DomainError::infra(InfraErrorKind::Other("x".into()), "other").into();
    assert_eq!(app.code().as_str(), "INTERNAL_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn db_record_not_found_becomes_generic_not_found() {
    let de = DomainError::from(sea_orm::DbErr::RecordNotFound("casinos".into()));
    assert!(matches!(de, DomainError::NotFound(NotFoundKind::Other(_), _)));
}

#[test]
fn db_type_error_is_data_corruption() {
    let de = DomainError::from(sea_orm::DbErr::Type("expected f64".into()));
    assert!(matches!(
        de,
        DomainError::Infra(InfraErrorKind::DataCorruption, _)
    ));
}

#[test]
fn humanized_title_in_problem_body() {
    use actix_web::ResponseError;

    let err = AppError::not_found(ErrorCode::CasinoNotFound, "missing");
    let resp = err.error_response();
    assert_eq!(resp.status().as_u16(), 404);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/problem+json"
    );
    assert!(resp.headers().contains_key("x-trace-id"));
}
