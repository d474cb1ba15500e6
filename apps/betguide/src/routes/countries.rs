//! Country list, legal detail and per-country home page.

use actix_web::http::header::CACHE_CONTROL;
use actix_web::{web, HttpResponse};
use futures_util::future::join;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::CountryCode;
use crate::i18n::SiteContext;
use crate::listing::countries::search_term;
use crate::listing::QueryParams;
use crate::repos::countries::Country;
use crate::services::Catalog;
use crate::state::app_state::AppState;
use crate::views::countries::{country_detail, country_home, country_list};

/// Country pages are regenerated every two days.
pub const COUNTRY_CACHE_CONTROL: &str = "public, max-age=172800";

/// GET /api/countries?q=
async fn list(
    query: QueryParams,
    ctx: SiteContext,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let rows = Catalog::from_state(&app_state).countries().await;
    Ok(HttpResponse::Ok().json(country_list(rows, &search_term(&query), &ctx)))
}

async fn require_country(catalog: &Catalog<'_>, code: &CountryCode) -> Result<Country, AppError> {
    catalog.country_by_code(&code.0).await.ok_or_else(|| {
        AppError::not_found(
            ErrorCode::CountryNotFound,
            format!("Country '{}' not found", code.0),
        )
    })
}

/// GET /api/countries/{code}
///
/// The casino and bonus sections are fetched side by side and degrade on
/// their own.
async fn detail(
    code: CountryCode,
    ctx: SiteContext,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let catalog = Catalog::from_state(&app_state);
    let country = require_country(&catalog, &code).await?;
    let (casinos, bonuses) = join(catalog.casinos_by_country(&code.0), catalog.bonuses(None)).await;

    Ok(HttpResponse::Ok()
        .insert_header((CACHE_CONTROL, COUNTRY_CACHE_CONTROL))
        .json(country_detail(country, casinos, bonuses, &ctx)))
}

/// GET /api/countries/{code}/home
async fn home(
    code: CountryCode,
    ctx: SiteContext,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let catalog = Catalog::from_state(&app_state);
    let country = require_country(&catalog, &code).await?;
    let (featured, casinos) = join(
        catalog.featured_casino(Some(&code.0)),
        catalog.casinos_by_country(&code.0),
    )
    .await;
    let today = OffsetDateTime::now_utc().date();

    Ok(HttpResponse::Ok()
        .insert_header((CACHE_CONTROL, COUNTRY_CACHE_CONTROL))
        .json(country_home(country, featured, casinos, today, &ctx)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("/{code}", web::get().to(detail))
        .route("/{code}/home", web::get().to(home));
}
