use actix_web::{web, HttpResponse};
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::infra::require_db;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
    db: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    time: String,
}

/// GET /health
///
/// Always answers 200; the `db` field reports connectivity.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let app_version = env!("CARGO_PKG_VERSION").to_string();

    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let (db, db_error) = match require_db(&app_state) {
        Ok(conn) => {
            let probe = Statement::from_string(
                conn.get_database_backend(),
                "SELECT 1 AS health_check".to_string(),
            );
            match conn.query_one(probe).await {
                Ok(_) => ("ok".to_string(), None),
                Err(e) => ("error".to_string(), Some(format!("DB query failed: {e}"))),
            }
        }
        Err(e) => ("error".to_string(), Some(format!("DB unavailable: {e}"))),
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        app_version,
        db,
        db_error,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
