use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "casino_game_providers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub casino_id: i64,
    pub game_provider_id: i64,
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::casinos::Entity",
        from = "Column::CasinoId",
        to = "super::casinos::Column::Id"
    )]
    Casino,
    #[sea_orm(
        belongs_to = "super::game_providers::Entity",
        from = "Column::GameProviderId",
        to = "super::game_providers::Column::Id"
    )]
    GameProvider,
}

impl Related<super::casinos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Casino.def()
    }
}

impl Related<super::game_providers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameProvider.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
