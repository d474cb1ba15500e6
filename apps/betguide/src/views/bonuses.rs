//! Bonus listing view.

use serde::Serialize;

use super::CasinoSummary;
use crate::i18n::SiteContext;
use crate::listing::bonuses::BonusFilters;
use crate::listing::params::format_number;
use crate::listing::{FilterBarView, Page};
use crate::repos::bonuses::{BonusType, BonusWithCasino};

pub fn type_label(bonus_type: BonusType, ctx: &SiteContext) -> &'static str {
    let m = ctx.messages();
    match bonus_type {
        BonusType::Welcome => m.welcome,
        BonusType::NoDeposit => m.no_deposit,
        BonusType::FreeBets => m.free_bets,
        BonusType::FreeSpins => m.free_spins,
        BonusType::Cashback => m.cashback,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusCard {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub bonus_type: BonusType,
    pub type_label: &'static str,
    pub casino: CasinoSummary,
    pub wagering: String,
    pub min_deposit: String,
    pub max_amount: Option<f64>,
    pub bonus_code: Option<String>,
    pub is_exclusive: bool,
    pub valid_until: Option<String>,
}

impl BonusCard {
    pub fn new(row: BonusWithCasino, ctx: &SiteContext) -> Self {
        let m = ctx.messages();
        let bonus = row.bonus;
        Self {
            type_label: type_label(bonus.bonus_type, ctx),
            casino: CasinoSummary::from(&row.casino),
            wagering: bonus
                .wagering_requirement
                .map(|w| format!("{}x", format_number(w)))
                .unwrap_or_else(|| m.not_available.to_string()),
            min_deposit: bonus
                .min_deposit
                .map(|d| format!("{}€", format_number(d)))
                .unwrap_or_else(|| m.no_minimum.to_string()),
            valid_until: bonus.valid_until.map(|d| d.to_string()),
            id: bonus.id,
            name: bonus.name,
            description: bonus.description,
            bonus_type: bonus.bonus_type,
            max_amount: bonus.max_amount,
            bonus_code: bonus.bonus_code,
            is_exclusive: bonus.is_exclusive,
        }
    }
}

/// A casino the bonus filter bar can select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CasinoOption {
    pub id: i64,
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusListView {
    pub bonus_type: String,
    pub items: Vec<BonusCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
    pub casino_options: Vec<CasinoOption>,
    pub filters: FilterBarView,
}

pub fn bonus_list(
    rows: Option<Vec<BonusWithCasino>>,
    filters: &BonusFilters,
    page: Page,
    bar: FilterBarView,
    ctx: &SiteContext,
) -> BonusListView {
    let rows = rows.unwrap_or_default();

    let mut casino_options: Vec<CasinoOption> = Vec::new();
    for row in &rows {
        if !casino_options.iter().any(|o| o.id == row.casino.id) {
            casino_options.push(CasinoOption {
                id: row.casino.id,
                name: row.casino.name.clone(),
                selected: filters.casinos.contains(&row.casino.id),
            });
        }
    }

    let items: Vec<BonusCard> = filters
        .filter_set(page)
        .apply(rows)
        .into_iter()
        .map(|row| BonusCard::new(row, ctx))
        .collect();

    BonusListView {
        bonus_type: filters.bonus_type.clone(),
        empty_message: items.is_empty().then_some(ctx.messages().no_bonuses),
        items,
        casino_options,
        filters: bar,
    }
}
