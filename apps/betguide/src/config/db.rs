use std::env;

use crate::error::AppError;

/// Which database the service talks to.
#[derive(Debug, Clone, PartialEq)]
pub enum DbKind {
    /// The hosted Postgres backend (URL from the environment)
    Postgres,
    /// Throwaway in-memory SQLite, schema built from the entities
    SqliteMemory,
}

/// Builds the Postgres URL from the environment.
///
/// `DATABASE_URL` wins when present; otherwise the URL is assembled from
/// `POSTGRES_HOST`, `POSTGRES_PORT`, `BETGUIDE_DB`, `BETGUIDE_DB_USER` and
/// `BETGUIDE_DB_PASSWORD`.
pub fn db_url() -> Result<String, AppError> {
    if let Ok(url) = env::var("DATABASE_URL") {
        if !url.trim().is_empty() {
            return Ok(url);
        }
    }

    let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
    let db_name = must_var("BETGUIDE_DB")?;
    let username = must_var("BETGUIDE_DB_USER")?;
    let password = must_var("BETGUIDE_DB_PASSWORD")?;

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

/// URL for a connection of the given kind.
pub fn url_for(kind: &DbKind) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => db_url(),
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Strip the password out of a URL before it reaches a log line.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((creds, host)) = rest.split_once('@') else {
        return url.to_string();
    };
    match creds.split_once(':') {
        Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
        None => url.to_string(),
    }
}

fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
