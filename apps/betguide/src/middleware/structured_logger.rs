//! One `request_completed` line per request with the directory's own view of
//! it: which scope was asked for, how many listing filters were active, which
//! page, and whether the answer may be cached downstream.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::CACHE_CONTROL;
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn, Level};

use super::request_trace::TraceId;
use crate::i18n::LANG_PARAM;
use crate::listing::countries::SEARCH;
use crate::listing::params::{LIMIT, SKIP};
use crate::listing::QueryParams;
use crate::views::casinos::{COUNTRY, HIGHLIGHT_FIRST, STYLE};
use crate::views::compare::IDS;

/// Parameters that shape presentation or paging rather than narrow a listing.
const PRESENTATION: [&str; 8] = [LANG_PARAM, COUNTRY, SKIP, LIMIT, STYLE, HIGHLIGHT_FIRST, IDS, SEARCH];

/// What the access log records about a listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingSummary {
    pub country: Option<String>,
    pub search: bool,
    pub filters: usize,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

impl ListingSummary {
    pub fn from_query(query: &QueryParams) -> Self {
        Self {
            country: query
                .get(COUNTRY)
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_lowercase),
            search: query.get(SEARCH).is_some_and(|q| !q.trim().is_empty()),
            filters: query.without(&PRESENTATION).len(),
            skip: query.count(SKIP),
            limit: query.count(LIMIT).filter(|n| *n > 0),
        }
    }
}

/// Unknown slugs and codes are routine crawler traffic, so 404 stays at info.
pub fn level_for(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
        Level::WARN
    } else {
        Level::INFO
    }
}

fn opt(n: Option<usize>) -> String {
    n.map_or_else(|| "-".to_string(), |n| n.to_string())
}

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let summary = ListingSummary::from_query(&QueryParams::parse(req.query_string()));
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, cacheable) = match &result {
                Ok(res) => (
                    res.status(),
                    res.headers()
                        .get(CACHE_CONTROL)
                        .and_then(|v| v.to_str().ok())
                        .is_some_and(|v| v.starts_with("public")),
                ),
                Err(err) => (err.as_response_error().status_code(), false),
            };

            let duration_us = start.elapsed().as_micros() as u64;
            let status_code = status.as_u16();
            let country = summary.country.as_deref().unwrap_or("global");
            let skip = opt(summary.skip);
            let limit = opt(summary.limit);

            macro_rules! completed {
                ($log:ident) => {
                    $log!(
                        http.method = %method,
                        url.path = %path,
                        http.status_code = status_code,
                        duration_us,
                        trace_id = %trace_id,
                        country,
                        search = summary.search,
                        filters = summary.filters,
                        skip = %skip,
                        limit = %limit,
                        cacheable,
                        message = "request_completed"
                    )
                };
            }

            let level = level_for(status);
            if level == Level::ERROR {
                completed!(error);
            } else if level == Level::WARN {
                completed!(warn);
            } else {
                completed!(info);
            }

            result
        })
    }
}
