//! SeaORM adapter for casinos and their joined sub-tables.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::entities::{
    casino_countries, casino_features, casino_game_providers, casino_licenses,
    casino_payment_methods, casino_security_features, casinos, countries, features,
    game_providers, licenses, payment_methods, pros_cons, security_features, support_channels,
    supported_languages,
};

pub async fn list_by_rating<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<casinos::Model>, sea_orm::DbErr> {
    casinos::Entity::find()
        .order_by_desc(casinos::Column::Rating)
        .order_by_asc(casinos::Column::Id)
        .all(conn)
        .await
}

/// Casinos linked to the country with the given code, best rated first.
pub async fn list_by_country<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    country_code: &str,
) -> Result<Vec<casinos::Model>, sea_orm::DbErr> {
    casinos::Entity::find()
        .join(JoinType::InnerJoin, casinos::Relation::CasinoCountries.def())
        .join(JoinType::InnerJoin, casino_countries::Relation::Country.def())
        .filter(countries::Column::Code.eq(country_code))
        .order_by_desc(casinos::Column::Rating)
        .order_by_asc(casinos::Column::Id)
        .distinct()
        .all(conn)
        .await
}

/// Best-rated featured casino, optionally limited to one country.
pub async fn find_featured<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    country_code: Option<&str>,
) -> Result<Option<casinos::Model>, sea_orm::DbErr> {
    let mut query = casinos::Entity::find().filter(casinos::Column::Featured.eq(true));

    if let Some(code) = country_code {
        query = query
            .join(JoinType::InnerJoin, casinos::Relation::CasinoCountries.def())
            .join(JoinType::InnerJoin, casino_countries::Relation::Country.def())
            .filter(countries::Column::Code.eq(code));
    }

    query
        .order_by_desc(casinos::Column::Rating)
        .order_by_asc(casinos::Column::Id)
        .one(conn)
        .await
}

pub async fn find_by_slug<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    slug: &str,
) -> Result<Option<casinos::Model>, sea_orm::DbErr> {
    casinos::Entity::find()
        .filter(casinos::Column::Slug.eq(slug))
        .one(conn)
        .await
}

pub async fn features_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    casino_id: i64,
) -> Result<Vec<features::Model>, sea_orm::DbErr> {
    features::Entity::find()
        .join(JoinType::InnerJoin, features::Relation::Casinos.def())
        .filter(casino_features::Column::CasinoId.eq(casino_id))
        .order_by_asc(casino_features::Column::Id)
        .all(conn)
        .await
}

pub async fn payment_methods_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    casino_id: i64,
) -> Result<Vec<payment_methods::Model>, sea_orm::DbErr> {
    payment_methods::Entity::find()
        .join(JoinType::InnerJoin, payment_methods::Relation::Casinos.def())
        .filter(casino_payment_methods::Column::CasinoId.eq(casino_id))
        .order_by_asc(casino_payment_methods::Column::Id)
        .all(conn)
        .await
}

pub async fn game_providers_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    casino_id: i64,
) -> Result<Vec<game_providers::Model>, sea_orm::DbErr> {
    game_providers::Entity::find()
        .join(JoinType::InnerJoin, game_providers::Relation::Casinos.def())
        .filter(casino_game_providers::Column::CasinoId.eq(casino_id))
        .order_by_asc(casino_game_providers::Column::Id)
        .all(conn)
        .await
}

pub async fn security_features_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    casino_id: i64,
) -> Result<Vec<security_features::Model>, sea_orm::DbErr> {
    security_features::Entity::find()
        .join(JoinType::InnerJoin, security_features::Relation::Casinos.def())
        .filter(casino_security_features::Column::CasinoId.eq(casino_id))
        .order_by_asc(casino_security_features::Column::Id)
        .all(conn)
        .await
}

/// License links of a casino; the license side is `None` only for a dangling key.
pub async fn licenses_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    casino_id: i64,
) -> Result<Vec<(casino_licenses::Model, Option<licenses::Model>)>, sea_orm::DbErr> {
    casino_licenses::Entity::find()
        .filter(casino_licenses::Column::CasinoId.eq(casino_id))
        .order_by_asc(casino_licenses::Column::Id)
        .find_also_related(licenses::Entity)
        .all(conn)
        .await
}

pub async fn pros_cons_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    casino_id: i64,
) -> Result<Vec<pros_cons::Model>, sea_orm::DbErr> {
    pros_cons::Entity::find()
        .filter(pros_cons::Column::CasinoId.eq(casino_id))
        .order_by_asc(pros_cons::Column::Id)
        .all(conn)
        .await
}

pub async fn languages_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    casino_id: i64,
) -> Result<Vec<supported_languages::Model>, sea_orm::DbErr> {
    supported_languages::Entity::find()
        .filter(supported_languages::Column::CasinoId.eq(casino_id))
        .order_by_asc(supported_languages::Column::Id)
        .all(conn)
        .await
}

pub async fn support_channels_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    casino_id: i64,
) -> Result<Vec<support_channels::Model>, sea_orm::DbErr> {
    support_channels::Entity::find()
        .filter(support_channels::Column::CasinoId.eq(casino_id))
        .order_by_asc(support_channels::Column::Id)
        .all(conn)
        .await
}
