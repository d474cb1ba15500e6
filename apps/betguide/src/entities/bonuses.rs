use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bonuses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub casino_id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub bonus_code: Option<String>,
    pub wagering_requirement: Option<f64>,
    pub min_deposit: Option<f64>,
    pub max_amount: Option<f64>,
    pub valid_until: Option<Date>,
    /// Stored as free text; `repos::bonuses::BonusType` validates it.
    pub bonus_type: String,
    pub is_exclusive: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::casinos::Entity",
        from = "Column::CasinoId",
        to = "super::casinos::Column::Id"
    )]
    Casino,
}

impl Related<super::casinos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Casino.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
