use sea_orm::DatabaseConnection;

use crate::config::db::DbKind;
use crate::config::site::SiteConfig;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::state::app_state::AppState;

enum DbSource {
    None,
    Connect(DbKind),
    Existing(DatabaseConnection),
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    site: SiteConfig,
    db: DbSource,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            site: SiteConfig::default(),
            db: DbSource::None,
        }
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db = DbSource::Connect(kind);
        self
    }

    /// Use a connection the caller already prepared (seeded test databases).
    pub fn with_connection(mut self, conn: DatabaseConnection) -> Self {
        self.db = DbSource::Existing(conn);
        self
    }

    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db {
            DbSource::None => Ok(AppState::new_without_db(self.site)),
            DbSource::Connect(kind) => {
                let conn = connect_db(&kind).await?;
                Ok(AppState::new(conn, self.site))
            }
            DbSource::Existing(conn) => Ok(AppState::new(conn, self.site)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_succeeds_without_db_option() {
        let state = build_state().build().await.unwrap();
        assert!(state.db().is_none());
        assert_eq!(state.site.site_name, "BetGuide");
    }

    #[tokio::test]
    async fn test_build_with_sqlite_memory() {
        let state = build_state()
            .with_db(DbKind::SqliteMemory)
            .with_site(SiteConfig::new("ApuestasPro"))
            .build()
            .await
            .unwrap();
        assert!(state.db().is_some());
        assert_eq!(state.site.site_name, "ApuestasPro");
    }

    #[tokio::test]
    async fn require_db_fails_without_connection() {
        let state = build_state().build().await.unwrap();
        let err = crate::infra::require_db(&state).unwrap_err();
        assert_eq!(err.status().as_u16(), 503);
    }
}
