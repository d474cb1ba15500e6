use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::i18n::SiteContext;
use crate::listing::bonuses::BonusFilters;
use crate::listing::{page_from, FilterState, QueryParams};
use crate::services::Catalog;
use crate::state::app_state::AppState;
use crate::views::bonuses::bonus_list;

/// GET /api/bonuses
///
/// `type` narrows the fetch itself; the remaining filters run over the
/// loaded rows.
async fn list(
    req: HttpRequest,
    query: QueryParams,
    ctx: SiteContext,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let filters = BonusFilters::from_query(&query);
    let rows = Catalog::from_state(&app_state)
        .bonuses(filters.type_filter())
        .await;

    let bar = filters.bar_view(req.path(), &query, ctx.language);
    Ok(HttpResponse::Ok().json(bonus_list(rows, &filters, page_from(&query), bar, &ctx)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list));
}
