//! Bonus records, each carrying a summary of its casino.

use std::fmt::{Display, Formatter, Result as FmtResult};

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use time::Date;

use super::casinos::Casino;
use super::finite_opt;
use crate::adapters::bonuses_sea as adapter;
use crate::entities::{bonuses, casinos};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BonusType {
    Welcome,
    NoDeposit,
    FreeBets,
    FreeSpins,
    Cashback,
}

impl BonusType {
    pub const ALL: [BonusType; 5] = [
        Self::Welcome,
        Self::NoDeposit,
        Self::FreeBets,
        Self::FreeSpins,
        Self::Cashback,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::NoDeposit => "no-deposit",
            Self::FreeBets => "free-bets",
            Self::FreeSpins => "free-spins",
            Self::Cashback => "cashback",
        }
    }

    /// Parse a category tag as it appears in URLs. `None` for unknown tags.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn from_db(value: &str, bonus_id: i64) -> Result<Self, DomainError> {
        Self::parse(value).ok_or_else(|| {
            DomainError::corrupt(format!(
                "invalid bonus_type '{value}' stored for bonus id={bonus_id}"
            ))
        })
    }
}

impl Display for BonusType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bonus {
    pub id: i64,
    pub casino_id: i64,
    pub name: String,
    pub description: String,
    pub bonus_code: Option<String>,
    pub wagering_requirement: Option<f64>,
    pub min_deposit: Option<f64>,
    pub max_amount: Option<f64>,
    pub valid_until: Option<Date>,
    pub bonus_type: BonusType,
    pub is_exclusive: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BonusWithCasino {
    pub bonus: Bonus,
    pub casino: Casino,
}

/// Bonuses newest first, optionally of one type.
pub async fn list_with_casino<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    bonus_type: Option<BonusType>,
) -> Result<Vec<BonusWithCasino>, DomainError> {
    let rows = adapter::list_with_casino(conn, bonus_type.map(|t| t.as_str())).await?;
    rows.into_iter()
        .map(|(bonus, casino)| with_casino(bonus, casino))
        .collect()
}

fn with_casino(
    bonus: bonuses::Model,
    casino: Option<casinos::Model>,
) -> Result<BonusWithCasino, DomainError> {
    let casino = casino.ok_or_else(|| {
        DomainError::corrupt(format!(
            "bonus id={} points at missing casino_id={}",
            bonus.id, bonus.casino_id
        ))
    })?;
    Ok(BonusWithCasino {
        bonus: Bonus::try_from(bonus)?,
        casino: Casino::try_from(casino)?,
    })
}

impl TryFrom<bonuses::Model> for Bonus {
    type Error = DomainError;

    fn try_from(model: bonuses::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            bonus_type: BonusType::from_db(&model.bonus_type, model.id)?,
            wagering_requirement: finite_opt(
                model.wagering_requirement,
                "wagering_requirement",
                model.id,
            )?,
            min_deposit: finite_opt(model.min_deposit, "min_deposit", model.id)?,
            max_amount: finite_opt(model.max_amount, "max_amount", model.id)?,
            id: model.id,
            casino_id: model.casino_id,
            name: model.name,
            description: model.description,
            bonus_code: model.bonus_code.filter(|c| !c.trim().is_empty()),
            valid_until: model.valid_until,
            is_exclusive: model.is_exclusive,
        })
    }
}
