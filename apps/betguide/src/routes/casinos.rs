//! Casino ranking, casino of the month and casino detail.

use actix_web::{web, HttpRequest, HttpResponse};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::CasinoSlug;
use crate::i18n::SiteContext;
use crate::listing::casinos::CasinoFilters;
use crate::listing::{FilterState, QueryParams};
use crate::services::Catalog;
use crate::state::app_state::AppState;
use crate::views::casinos::{casino_detail, casino_list, featured_casino, CasinoListOptions};

/// GET /api/casinos
///
/// Ranked casinos, global or scoped by `country`, narrowed by the filter bar
/// and paged by `skip`/`limit`. A failed fetch answers with the empty message.
async fn list(
    req: HttpRequest,
    query: QueryParams,
    ctx: SiteContext,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let catalog = Catalog::from_state(&app_state);
    let options = CasinoListOptions::from_query(&query);
    let filters = CasinoFilters::from_query(&query);

    let rows = match options.country_scope() {
        Some(code) => catalog.casinos_by_country(code).await,
        None => catalog.casinos().await,
    };

    let bar = filters.bar_view(req.path(), &query, ctx.language);
    Ok(HttpResponse::Ok().json(casino_list(rows, &filters, &options, bar, &ctx)))
}

/// GET /api/casinos/featured
async fn featured(
    query: QueryParams,
    ctx: SiteContext,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let options = CasinoListOptions::from_query(&query);
    let casino = Catalog::from_state(&app_state)
        .featured_casino(options.country_scope())
        .await;
    let today = OffsetDateTime::now_utc().date();
    Ok(HttpResponse::Ok().json(featured_casino(casino, &options.country, today, &ctx)))
}

/// GET /api/casinos/{slug}
async fn detail(
    slug: CasinoSlug,
    ctx: SiteContext,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let detail = Catalog::from_state(&app_state)
        .casino_details(&slug.0)
        .await
        .ok_or_else(|| {
            AppError::not_found(
                ErrorCode::CasinoNotFound,
                format!("Casino '{}' not found", slug.0),
            )
        })?;
    Ok(HttpResponse::Ok().json(casino_detail(detail, &ctx)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("/featured", web::get().to(featured))
        .route("/{slug}", web::get().to(detail));
}
