//! Request correlation: one trace id per request, one `request` span around
//! the handler, and the task-local scope error bodies read from.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderMap, HeaderValue};
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::i18n::LANG_PARAM;
use crate::listing::QueryParams;
use crate::trace_ctx;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_INBOUND_LEN: usize = 64;

/// Trace id of the current request, stored in the request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

/// An upstream `x-request-id` is kept when it is a short token of
/// alphanumerics, `-` and `_`; anything else gets a fresh id.
pub fn inbound_trace_id(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(REQUEST_ID_HEADER)?.to_str().ok()?.trim();
    let well_formed = !value.is_empty()
        && value.len() <= MAX_INBOUND_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    well_formed.then(|| value.to_string())
}

pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id =
            inbound_trace_id(req.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());
        req.extensions_mut().insert(TraceId(trace_id.clone()));

        let query = QueryParams::parse(req.query_string());
        let span = info_span!(
            "request",
            trace_id = %trace_id,
            http.method = %req.method(),
            url.path = %req.path(),
            lang = query.get(LANG_PARAM).unwrap_or("-"),
        );

        let fut = self.service.call(req);
        let scoped = trace_ctx::with_trace_id(trace_id.clone(), async move {
            let mut res = fut.await?;
            if let Ok(value) = HeaderValue::from_str(&trace_id) {
                res.headers_mut()
                    .insert(header::HeaderName::from_static(REQUEST_ID_HEADER), value);
            }
            Ok(res)
        });

        Box::pin(scoped.instrument(span))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App, HttpResponse};

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            HeaderValue::from_str(value).unwrap(),
        );
        map
    }

    #[::core::prelude::v1::test]
    fn inbound_ids_must_be_short_tokens() {
        assert_eq!(inbound_trace_id(&headers("edge-42_a")).as_deref(), Some("edge-42_a"));
        assert_eq!(inbound_trace_id(&headers("has space")), None);
        assert_eq!(inbound_trace_id(&headers("a;b")), None);
        assert_eq!(inbound_trace_id(&headers(&"x".repeat(65))), None);
        assert_eq!(inbound_trace_id(&HeaderMap::new()), None);
    }

    async fn echo_trace_id() -> HttpResponse {
        HttpResponse::Ok().body(trace_ctx::trace_id())
    }

    #[actix_web::test]
    async fn handler_sees_the_id_it_returns() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(echo_trace_id)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let header = resp.headers().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap().to_string();
        assert!(Uuid::parse_str(&header).is_ok());
        let body = test::read_body(resp).await;
        assert_eq!(body, header.as_bytes());
    }

    #[actix_web::test]
    async fn upstream_id_is_carried_through() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(echo_trace_id)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/?lang=en")
            .insert_header((REQUEST_ID_HEADER, "cdn-7f3a"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.headers().get(REQUEST_ID_HEADER).unwrap(), "cdn-7f3a");
        assert_eq!(test::read_body(resp).await, "cdn-7f3a".as_bytes());
    }
}
