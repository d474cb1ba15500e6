use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "casino_licenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub casino_id: i64,
    pub license_id: i64,
    pub license_number: Option<String>,
    pub issue_date: Option<Date>,
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
        belongs_to = "super::licenses::Entity",
        from = "Column::LicenseId",
        to = "super::licenses::Column::Id"
    )]
    License,
}

impl Related<super::casinos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Casino.def()
    }
}

impl Related<super::licenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::License.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
