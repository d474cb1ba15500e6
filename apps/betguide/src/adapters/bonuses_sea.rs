//! SeaORM adapter for bonuses.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{bonuses, casinos};

/// Bonuses with their owning casino, newest first. `None` lists every type.
pub async fn list_with_casino<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    bonus_type: Option<&str>,
) -> Result<Vec<(bonuses::Model, Option<casinos::Model>)>, sea_orm::DbErr> {
    let mut query = bonuses::Entity::find();
    if let Some(tag) = bonus_type {
        query = query.filter(bonuses::Column::BonusType.eq(tag));
    }

    query
        .order_by_desc(bonuses::Column::CreatedAt)
        .order_by_desc(bonuses::Column::Id)
        .find_also_related(casinos::Entity)
        .all(conn)
        .await
}
