use actix_web::{web, HttpResponse};
use futures_util::future::join;

use crate::error::AppError;
use crate::services::Catalog;
use crate::state::app_state::AppState;
use crate::views::static_params::static_params;

/// GET /api/static-params
///
/// Every country code and casino slug with a detail page.
async fn list(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let catalog = Catalog::from_state(&app_state);
    let (countries, casinos) = join(catalog.countries(), catalog.casinos()).await;
    Ok(HttpResponse::Ok().json(static_params(countries, casinos)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list));
}
