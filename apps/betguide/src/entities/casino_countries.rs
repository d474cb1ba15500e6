use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "casino_countries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub casino_id: i64,
    pub country_id: i64,
    pub is_restricted: bool,
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
        belongs_to = "super::countries::Entity",
        from = "Column::CountryId",
        to = "super::countries::Column::Id"
    )]
    Country,
}

impl Related<super::casinos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Casino.def()
    }
}

impl Related<super::countries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
