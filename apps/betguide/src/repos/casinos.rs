//! Casino records and the full casino detail aggregate.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::Date;

use super::licenses::LicenseTier;
use super::{finite, finite_opt};
use crate::adapters::casinos_sea as adapter;
use crate::entities::{casinos, casino_licenses, game_providers, licenses, payment_methods};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Casino {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub logo_url: String,
    pub website_url: String,
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
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub name: String,
    pub method_type: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProvider {
    pub name: String,
    pub website_url: Option<String>,
}

/// A license held by a casino, with the per-casino number and issue date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeldLicense {
    pub license_id: i64,
    pub name: String,
    pub country: String,
    pub tier: LicenseTier,
    pub trust_score: f64,
    pub license_number: Option<String>,
    pub issue_date: Option<Date>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CasinoDetail {
    pub casino: Casino,
    pub features: Vec<String>,
    pub payment_methods: Vec<PaymentMethod>,
    pub game_providers: Vec<GameProvider>,
    pub licenses: Vec<HeldLicense>,
    pub security_features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub languages: Vec<String>,
    pub support_channels: Vec<String>,
}

pub async fn list_by_rating<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Casino>, DomainError> {
    let rows = adapter::list_by_rating(conn).await?;
    rows.into_iter().map(Casino::try_from).collect()
}

pub async fn list_by_country<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    country_code: &str,
) -> Result<Vec<Casino>, DomainError> {
    let rows = adapter::list_by_country(conn, country_code).await?;
    rows.into_iter().map(Casino::try_from).collect()
}

pub async fn find_featured<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    country_code: Option<&str>,
) -> Result<Option<Casino>, DomainError> {
    adapter::find_featured(conn, country_code)
        .await?
        .map(Casino::try_from)
        .transpose()
}

/// Casino plus every joined sub-collection, looked up by slug.
pub async fn find_detail_by_slug<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    slug: &str,
) -> Result<Option<CasinoDetail>, DomainError> {
    let Some(model) = adapter::find_by_slug(conn, slug).await? else {
        return Ok(None);
    };
    let casino = Casino::try_from(model)?;
    let id = casino.id;

    let (features, payments, providers, held, security, pros_cons, languages, channels) =
        futures_util::try_join!(
            adapter::features_for(conn, id),
            adapter::payment_methods_for(conn, id),
            adapter::game_providers_for(conn, id),
            adapter::licenses_for(conn, id),
            adapter::security_features_for(conn, id),
            adapter::pros_cons_for(conn, id),
            adapter::languages_for(conn, id),
            adapter::support_channels_for(conn, id),
        )?;

    let licenses = held
        .into_iter()
        .map(|(link, license)| held_license(link, license))
        .collect::<Result<Vec<_>, _>>()?;

    let (pros, cons): (Vec<_>, Vec<_>) = pros_cons.into_iter().partition(|row| row.is_pro);

    Ok(Some(CasinoDetail {
        casino,
        features: features.into_iter().map(|f| f.name).collect(),
        payment_methods: payments.into_iter().map(PaymentMethod::from).collect(),
        game_providers: providers.into_iter().map(GameProvider::from).collect(),
        licenses,
        security_features: security.into_iter().map(|s| s.name).collect(),
        pros: pros.into_iter().map(|p| p.content).collect(),
        cons: cons.into_iter().map(|c| c.content).collect(),
        languages: languages.into_iter().map(|l| l.language).collect(),
        support_channels: channels.into_iter().map(|c| c.channel).collect(),
    }))
}

fn held_license(
    link: casino_licenses::Model,
    license: Option<licenses::Model>,
) -> Result<HeldLicense, DomainError> {
    let license = license.ok_or_else(|| {
        DomainError::corrupt(format!(
            "casino_licenses id={} points at missing license_id={}",
            link.id, link.license_id
        ))
    })?;
    Ok(HeldLicense {
        license_id: license.id,
        tier: LicenseTier::from_db(&license.rating, license.id)?,
        trust_score: finite(license.trust_score, "trust_score", license.id)?,
        name: license.name,
        country: license.country,
        license_number: link.license_number,
        issue_date: link.issue_date,
    })
}

impl TryFrom<casinos::Model> for Casino {
    type Error = DomainError;

    fn try_from(model: casinos::Model) -> Result<Self, Self::Error> {
        if model.slug.trim().is_empty() {
            return Err(DomainError::corrupt(format!(
                "empty slug stored for casino id={}",
                model.id
            )));
        }
        Ok(Self {
            rating: finite(model.rating, "rating", model.id)?,
            min_deposit: finite_opt(model.min_deposit, "min_deposit", model.id)?,
            positive_rating_percentage: finite_opt(
                model.positive_rating_percentage,
                "positive_rating_percentage",
                model.id,
            )?,
            id: model.id,
            name: model.name,
            slug: model.slug,
            logo_url: model.logo_url,
            website_url: model.website_url,
            description: model.description,
            established_year: model.established_year,
            withdrawal_time: model.withdrawal_time,
            has_mobile_app: model.has_mobile_app,
            has_live_streaming: model.has_live_streaming,
            has_cash_out: model.has_cash_out,
            has_live_betting: model.has_live_betting,
            monthly_visits: model.monthly_visits,
            user_reviews_count: model.user_reviews_count,
            featured: model.featured,
        })
    }
}

impl From<payment_methods::Model> for PaymentMethod {
    fn from(model: payment_methods::Model) -> Self {
        Self {
            name: model.name,
            method_type: model.method_type,
            description: model.description,
        }
    }
}

impl From<game_providers::Model> for GameProvider {
    fn from(model: game_providers::Model) -> Self {
        Self {
            name: model.name,
            website_url: model.website_url,
        }
    }
}
