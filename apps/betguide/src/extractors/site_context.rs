use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::config::site::SiteConfig;
use crate::error::AppError;
use crate::i18n::{SiteContext, LANG_COOKIE, LANG_PARAM};
use crate::listing::QueryParams;
use crate::state::app_state::AppState;

/// Per-request site context: `lang` query parameter, then the remembered
/// `preferredLanguage` cookie, then the default language.
impl FromRequest for SiteContext {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let query = QueryParams::parse(req.query_string());
        let cookie = req.cookie(LANG_COOKIE);
        let remembered = cookie.as_ref().map(|c| c.value());

        let ctx = match req.app_data::<web::Data<AppState>>() {
            Some(state) => SiteContext::resolve(query.get(LANG_PARAM), remembered, &state.site),
            None => SiteContext::resolve(query.get(LANG_PARAM), remembered, &SiteConfig::default()),
        };
        ready(Ok(ctx))
    }
}
