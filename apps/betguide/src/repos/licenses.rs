//! License authorities with requirements, player protections and pros/cons.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;

use super::finite;
use crate::adapters::licenses_sea as adapter;
use crate::entities::{license_player_protections, license_pros_cons, license_requirements, licenses};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LicenseTier {
    Excellent,
    Good,
    Average,
    Poor,
}

impl LicenseTier {
    pub const ALL: [LicenseTier; 4] = [Self::Excellent, Self::Good, Self::Average, Self::Poor];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }

    /// Case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
    }

    pub fn from_db(value: &str, license_id: i64) -> Result<Self, DomainError> {
        Self::parse(value).ok_or_else(|| {
            DomainError::corrupt(format!(
                "invalid rating tier '{value}' stored for license id={license_id}"
            ))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub established_year: i32,
    pub website_url: String,
    pub tier: LicenseTier,
    pub trust_score: f64,
    pub description: String,
    pub application_process: Option<String>,
    pub annual_fees: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LicenseChildren {
    pub requirements: Vec<String>,
    pub player_protections: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LicenseDetail {
    pub license: License,
    pub children: LicenseChildren,
}

/// Every license with its child collections, highest trust score first.
pub async fn list_by_trust_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<LicenseDetail>, DomainError> {
    let rows = adapter::list_by_trust_score(conn).await?;
    attach_children(conn, rows).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    license_id: i64,
) -> Result<Option<LicenseDetail>, DomainError> {
    let Some(row) = adapter::find_by_id(conn, license_id).await? else {
        return Ok(None);
    };
    Ok(attach_children(conn, vec![row]).await?.into_iter().next())
}

async fn attach_children<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    rows: Vec<licenses::Model>,
) -> Result<Vec<LicenseDetail>, DomainError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();

    let (requirements, protections, pros_cons) = futures_util::try_join!(
        adapter::requirements_for(conn, &ids),
        adapter::protections_for(conn, &ids),
        adapter::pros_cons_for(conn, &ids),
    )?;

    let mut children = group_children(requirements, protections, pros_cons);

    rows.into_iter()
        .map(|row| {
            let kids = children.remove(&row.id).unwrap_or_default();
            Ok(LicenseDetail {
                license: License::try_from(row)?,
                children: kids,
            })
        })
        .collect()
}

fn group_children(
    requirements: Vec<license_requirements::Model>,
    protections: Vec<license_player_protections::Model>,
    pros_cons: Vec<license_pros_cons::Model>,
) -> HashMap<i64, LicenseChildren> {
    let mut by_license: HashMap<i64, LicenseChildren> = HashMap::new();

    for r in requirements {
        by_license
            .entry(r.license_id)
            .or_default()
            .requirements
            .push(r.requirement);
    }
    for p in protections {
        by_license
            .entry(p.license_id)
            .or_default()
            .player_protections
            .push(p.protection);
    }
    for pc in pros_cons {
        let entry = by_license.entry(pc.license_id).or_default();
        if pc.is_pro {
            entry.pros.push(pc.content);
        } else {
            entry.cons.push(pc.content);
        }
    }

    by_license
}

impl TryFrom<licenses::Model> for License {
    type Error = DomainError;

    fn try_from(model: licenses::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            tier: LicenseTier::from_db(&model.rating, model.id)?,
            trust_score: finite(model.trust_score, "trust_score", model.id)?,
            id: model.id,
            name: model.name,
            country: model.country,
            established_year: model.established_year,
            website_url: model.website_url,
            description: model.description,
            application_process: model.application_process,
            annual_fees: model.annual_fees,
        })
    }
}
