use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::listing::QueryParams;

/// The raw query string, kept in order so filter bars can pass foreign
/// parameters through untouched.
impl FromRequest for QueryParams {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(QueryParams::parse(req.query_string())))
    }
}
