use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::LicenseId;
use crate::i18n::SiteContext;
use crate::listing::licenses::LicenseFilters;
use crate::listing::{page_from, FilterState, QueryParams};
use crate::services::Catalog;
use crate::state::app_state::AppState;
use crate::views::licenses::{license_detail, license_list};

/// GET /api/licenses
async fn list(
    req: HttpRequest,
    query: QueryParams,
    ctx: SiteContext,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let filters = LicenseFilters::from_query(&query);
    let rows = Catalog::from_state(&app_state).licenses().await;
    let bar = filters.bar_view(req.path(), &query, ctx.language);
    Ok(HttpResponse::Ok().json(license_list(rows, &filters, page_from(&query), bar, &ctx)))
}

/// GET /api/licenses/{id}
async fn detail(
    id: LicenseId,
    ctx: SiteContext,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let detail = Catalog::from_state(&app_state)
        .license_by_id(id.0)
        .await
        .ok_or_else(|| {
            AppError::not_found(ErrorCode::LicenseNotFound, format!("License {} not found", id.0))
        })?;
    Ok(HttpResponse::Ok().json(license_detail(detail, &ctx)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("/{id}", web::get().to(detail));
}
