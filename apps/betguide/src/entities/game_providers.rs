use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_providers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::casino_game_providers::Entity")]
    Casinos,
}

impl Related<super::casino_game_providers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Casinos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
