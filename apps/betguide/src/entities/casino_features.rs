use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "casino_features")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub casino_id: i64,
    pub feature_id: i64,
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
        belongs_to = "super::features::Entity",
        from = "Column::FeatureId",
        to = "super::features::Column::Id"
    )]
    Feature,
}

impl Related<super::casinos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Casino.def()
    }
}

impl Related<super::features::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feature.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
