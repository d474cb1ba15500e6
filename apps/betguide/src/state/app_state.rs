use sea_orm::DatabaseConnection;

use crate::config::site::SiteConfig;

/// Application state shared by every worker
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in tests that never touch storage)
    pub db: Option<DatabaseConnection>,
    /// Site name and other presentation settings
    pub site: SiteConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, site: SiteConfig) -> Self {
        Self { db: Some(db), site }
    }

    pub fn new_without_db(site: SiteConfig) -> Self {
        Self { db: None, site }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
