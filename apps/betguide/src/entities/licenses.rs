use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "licenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub country: String,
    pub established_year: i32,
    pub website_url: String,
    /// Qualitative tier ("Excellent", "Good", ...)
    pub rating: String,
    pub trust_score: f64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub application_process: Option<String>,
    pub annual_fees: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::license_requirements::Entity")]
    Requirements,
    #[sea_orm(has_many = "super::license_player_protections::Entity")]
    PlayerProtections,
    #[sea_orm(has_many = "super::license_pros_cons::Entity")]
    ProsCons,
    #[sea_orm(has_many = "super::casino_licenses::Entity")]
    CasinoLicenses,
}

impl Related<super::license_requirements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Requirements.def()
    }
}

impl Related<super::license_player_protections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerProtections.def()
    }
}

impl Related<super::license_pros_cons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProsCons.def()
    }
}

impl Related<super::casino_licenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CasinoLicenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
