use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{sanitize_db_url, url_for, DbKind};
use crate::error::AppError;

/// Open a connection for the given kind. No schema work happens here.
pub async fn connect_db(kind: &DbKind) -> Result<DatabaseConnection, AppError> {
    let url = url_for(kind)?;
    info!(db_url = %sanitize_db_url(&url), "connecting to database");

    let mut opts = ConnectOptions::new(url);
    if *kind == DbKind::SqliteMemory {
        // Every pooled connection to sqlite::memory: is its own database.
        opts.max_connections(1).min_connections(1);
    }
    opts.sqlx_logging(false);

    let conn = Database::connect(opts).await?;
    Ok(conn)
}
