use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::i18n::SiteContext;
use crate::listing::QueryParams;
use crate::services::Catalog;
use crate::state::app_state::AppState;
use crate::views::compare::{casino_comparison, license_comparison};

/// GET /api/compare/casinos?ids=a,b
async fn casinos(
    query: QueryParams,
    ctx: SiteContext,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let rows = Catalog::from_state(&app_state).casinos().await;
    Ok(HttpResponse::Ok().json(casino_comparison(rows, &query, &ctx)))
}

/// GET /api/compare/licenses?ids=a,b
async fn licenses(
    query: QueryParams,
    ctx: SiteContext,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let rows = Catalog::from_state(&app_state).licenses().await;
    Ok(HttpResponse::Ok().json(license_comparison(rows, &query, &ctx)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/casinos", web::get().to(casinos))
        .route("/licenses", web::get().to(licenses));
}
