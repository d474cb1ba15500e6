//! SeaORM adapter for countries.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::countries;

pub async fn list_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<countries::Model>, sea_orm::DbErr> {
    countries::Entity::find()
        .order_by_asc(countries::Column::Name)
        .all(conn)
        .await
}

pub async fn find_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<Option<countries::Model>, sea_orm::DbErr> {
    countries::Entity::find()
        .filter(countries::Column::Code.eq(code))
        .one(conn)
        .await
}
