//! SeaORM adapter for license authorities and their child collections.
//!
//! Child rows are fetched in one query per table for a whole batch of
//! license ids rather than per license.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{
    license_player_protections, license_pros_cons, license_requirements, licenses,
};

pub async fn list_by_trust_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<licenses::Model>, sea_orm::DbErr> {
    licenses::Entity::find()
        .order_by_desc(licenses::Column::TrustScore)
        .order_by_asc(licenses::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    license_id: i64,
) -> Result<Option<licenses::Model>, sea_orm::DbErr> {
    licenses::Entity::find_by_id(license_id).one(conn).await
}

pub async fn requirements_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    license_ids: &[i64],
) -> Result<Vec<license_requirements::Model>, sea_orm::DbErr> {
    license_requirements::Entity::find()
        .filter(license_requirements::Column::LicenseId.is_in(license_ids.iter().copied()))
        .order_by_asc(license_requirements::Column::Id)
        .all(conn)
        .await
}

pub async fn protections_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    license_ids: &[i64],
) -> Result<Vec<license_player_protections::Model>, sea_orm::DbErr> {
    license_player_protections::Entity::find()
        .filter(license_player_protections::Column::LicenseId.is_in(license_ids.iter().copied()))
        .order_by_asc(license_player_protections::Column::Id)
        .all(conn)
        .await
}

pub async fn pros_cons_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    license_ids: &[i64],
) -> Result<Vec<license_pros_cons::Model>, sea_orm::DbErr> {
    license_pros_cons::Entity::find()
        .filter(license_pros_cons::Column::LicenseId.is_in(license_ids.iter().copied()))
        .order_by_asc(license_pros_cons::Column::Id)
        .all(conn)
        .await
}
