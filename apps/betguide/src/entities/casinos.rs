use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "casinos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub logo_url: String,
    pub website_url: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub rating: f64,
    pub established_year: i32,
    pub min_deposit: Option<f64>,
    pub withdrawal_time: Option<String>,
    pub has_mobile_app: bool,
    pub has_live_streaming: bool,
    pub has_cash_out: bool,
    pub has_live_betting: bool,
    pub monthly_visits: Option<i64>,
    pub positive_rating_percentage: Option<f64>,
    pub user_reviews_count: Option<i32>,
    pub featured: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bonuses::Entity")]
    Bonuses,
    #[sea_orm(has_many = "super::casino_countries::Entity")]
    CasinoCountries,
    #[sea_orm(has_many = "super::casino_features::Entity")]
    CasinoFeatures,
    #[sea_orm(has_many = "super::casino_payment_methods::Entity")]
    CasinoPaymentMethods,
    #[sea_orm(has_many = "super::casino_game_providers::Entity")]
    CasinoGameProviders,
    #[sea_orm(has_many = "super::casino_licenses::Entity")]
    CasinoLicenses,
    #[sea_orm(has_many = "super::casino_security_features::Entity")]
    CasinoSecurityFeatures,
    #[sea_orm(has_many = "super::pros_cons::Entity")]
    ProsCons,
    #[sea_orm(has_many = "super::supported_languages::Entity")]
    SupportedLanguages,
    #[sea_orm(has_many = "super::support_channels::Entity")]
    SupportChannels,
}

impl Related<super::bonuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bonuses.def()
    }
}

impl Related<super::casino_countries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CasinoCountries.def()
    }
}

impl Related<super::pros_cons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProsCons.def()
    }
}

impl Related<super::supported_languages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupportedLanguages.def()
    }
}

impl Related<super::support_channels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupportChannels.def()
    }
}

impl Related<super::countries::Entity> for Entity {
    fn to() -> RelationDef {
        super::casino_countries::Relation::Country.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::casino_countries::Relation::Casino.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
