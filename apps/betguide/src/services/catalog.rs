//! Read accessors for every page of the directory.
//!
//! Each accessor issues its query, logs any failure with the operation name
//! and parameter, and hands back a sentinel: `None` for "nothing to show".
//! List accessors never return `Some(vec![])`, so callers handle "failed" and
//! "empty" through the same branch.

use sea_orm::DatabaseConnection;
use tracing::{debug, error};

use crate::errors::domain::DomainError;
use crate::repos::bonuses::{self, BonusType, BonusWithCasino};
use crate::repos::casinos::{self, Casino, CasinoDetail};
use crate::repos::countries::{self, Country};
use crate::repos::licenses::{self, LicenseDetail};
use crate::state::app_state::AppState;

/// Country scope that means "no country constraint".
pub const GLOBAL_SCOPE: &str = "global";
/// Bonus category that means "every type".
pub const ALL_BONUSES: &str = "all";

#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    db: Option<&'a DatabaseConnection>,
}

impl<'a> Catalog<'a> {
    pub fn new(db: Option<&'a DatabaseConnection>) -> Self {
        Self { db }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(state.db())
    }

    /// All casinos, best rated first.
    pub async fn casinos(&self) -> Option<Vec<Casino>> {
        let result = match self.conn("casinos") {
            Ok(db) => casinos::list_by_rating(db).await,
            Err(e) => Err(e),
        };
        settle_list("casinos", "", result)
    }

    /// Casinos available in a country, best rated first.
    pub async fn casinos_by_country(&self, code: &str) -> Option<Vec<Casino>> {
        let result = match self.conn("casinos_by_country") {
            Ok(db) => casinos::list_by_country(db, code).await,
            Err(e) => Err(e),
        };
        settle_list("casinos_by_country", code, result)
    }

    /// Casino of the month. `None` or `"global"` skips the country constraint.
    pub async fn featured_casino(&self, code: Option<&str>) -> Option<Casino> {
        let scope = code.filter(|c| *c != GLOBAL_SCOPE);
        let result = match self.conn("featured_casino") {
            Ok(db) => casinos::find_featured(db, scope).await,
            Err(e) => Err(e),
        };
        settle_one("featured_casino", code.unwrap_or(GLOBAL_SCOPE), result)
    }

    pub async fn casino_details(&self, slug: &str) -> Option<CasinoDetail> {
        let result = match self.conn("casino_details") {
            Ok(db) => casinos::find_detail_by_slug(db, slug).await,
            Err(e) => Err(e),
        };
        settle_one("casino_details", slug, result)
    }

    /// Bonuses newest first. `None` or `"all"` lists every type; an unknown
    /// tag matches nothing.
    pub async fn bonuses(&self, bonus_type: Option<&str>) -> Option<Vec<BonusWithCasino>> {
        let param = bonus_type.unwrap_or(ALL_BONUSES);
        let filter = match bonus_type.filter(|t| *t != ALL_BONUSES) {
            None => None,
            Some(tag) => match BonusType::parse(tag) {
                Some(t) => Some(t),
                None => {
                    debug!(operation = "bonuses", bonus_type = %tag, "unknown bonus type");
                    return None;
                }
            },
        };
        let result = match self.conn("bonuses") {
            Ok(db) => bonuses::list_with_casino(db, filter).await,
            Err(e) => Err(e),
        };
        settle_list("bonuses", param, result)
    }

    /// All countries by name.
    pub async fn countries(&self) -> Option<Vec<Country>> {
        let result = match self.conn("countries") {
            Ok(db) => countries::list_by_name(db).await,
            Err(e) => Err(e),
        };
        settle_list("countries", "", result)
    }

    pub async fn country_by_code(&self, code: &str) -> Option<Country> {
        let result = match self.conn("country_by_code") {
            Ok(db) => countries::find_by_code(db, code).await,
            Err(e) => Err(e),
        };
        settle_one("country_by_code", code, result)
    }

    /// All licenses with child collections, highest trust score first.
    pub async fn licenses(&self) -> Option<Vec<LicenseDetail>> {
        let result = match self.conn("licenses") {
            Ok(db) => licenses::list_by_trust_score(db).await,
            Err(e) => Err(e),
        };
        settle_list("licenses", "", result)
    }

    pub async fn license_by_id(&self, id: i64) -> Option<LicenseDetail> {
        let result = match self.conn("license_by_id") {
            Ok(db) => licenses::find_by_id(db, id).await,
            Err(e) => Err(e),
        };
        settle_one("license_by_id", &id.to_string(), result)
    }

    fn conn(&self, operation: &str) -> Result<&'a DatabaseConnection, DomainError> {
        self.db.ok_or_else(|| {
            DomainError::infra(
                crate::errors::domain::InfraErrorKind::DbUnavailable,
                format!("no database configured for {operation}"),
            )
        })
    }
}

fn settle_list<T>(
    operation: &'static str,
    param: &str,
    result: Result<Vec<T>, DomainError>,
) -> Option<Vec<T>> {
    match result {
        Ok(rows) if rows.is_empty() => {
            debug!(operation, param, "no rows");
            None
        }
        Ok(rows) => Some(rows),
        Err(err) => {
            error!(operation, param, error = %err, "catalog query failed");
            None
        }
    }
}

fn settle_one<T>(
    operation: &'static str,
    param: &str,
    result: Result<Option<T>, DomainError>,
) -> Option<T> {
    match result {
        Ok(found) => {
            if found.is_none() {
                debug!(operation, param, "no row");
            }
            found
        }
        Err(err) => {
            error!(operation, param, error = %err, "catalog query failed");
            None
        }
    }
}
