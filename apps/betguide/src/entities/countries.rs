use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    pub flag_emoji: String,
    pub legal_status: String,
    pub regulatory_body: Option<String>,
    pub legal_age: Option<String>,
    pub tax_info: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub legal_info: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::casino_countries::Entity")]
    CasinoCountries,
}

impl Related<super::casino_countries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CasinoCountries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
