//! Bonus listing filters: wagering and deposit ranges, exclusivity, casinos.

use super::filter_bar::FilterState;
use super::params::{format_number, QueryParams, QueryWriter};
use super::predicate::{Bounds, FilterSet, Filterable, Membership, Page};
use crate::i18n::messages::fill;
use crate::i18n::Language;
use crate::repos::bonuses::BonusWithCasino;
use crate::services::catalog::ALL_BONUSES;

pub const TYPE: &str = "type";
pub const WAGERING_MIN: &str = "wageringMin";
pub const WAGERING_MAX: &str = "wageringMax";
pub const DEPOSIT_MIN: &str = "depositMin";
pub const DEPOSIT_MAX: &str = "depositMax";
pub const EXCLUSIVE: &str = "exclusive";
pub const CASINOS: &str = "casinos";

/// Slider domains; a value at either edge is the default.
pub const WAGERING_DOMAIN: (f64, f64) = (0.0, 50.0);
pub const DEPOSIT_DOMAIN: (f64, f64) = (0.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusField {
    Wagering,
    Deposit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusFlag {
    Exclusive,
}

impl Filterable for BonusWithCasino {
    type Field = BonusField;
    type Flag = BonusFlag;

    fn number(&self, field: BonusField) -> Option<f64> {
        match field {
            BonusField::Wagering => self.bonus.wagering_requirement,
            BonusField::Deposit => self.bonus.min_deposit,
        }
    }

    fn flag(&self, flag: BonusFlag) -> bool {
        match flag {
            BonusFlag::Exclusive => self.bonus.is_exclusive,
        }
    }

    fn member_key(&self) -> Option<i64> {
        Some(self.bonus.casino_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusFilterKey {
    WageringMin,
    WageringMax,
    DepositMin,
    DepositMax,
    Exclusive,
    Casinos,
}

/// State of the bonus filter bar. `bonus_type` survives resets.
#[derive(Debug, Clone, PartialEq)]
pub struct BonusFilters {
    pub bonus_type: String,
    pub wagering: Bounds,
    pub deposit: Bounds,
    pub exclusive: bool,
    pub casinos: Vec<i64>,
}

impl Default for BonusFilters {
    fn default() -> Self {
        Self {
            bonus_type: ALL_BONUSES.to_string(),
            wagering: Bounds::default(),
            deposit: Bounds::default(),
            exclusive: false,
            casinos: Vec::new(),
        }
    }
}

/// Drop slider values at or beyond the domain edges.
fn inside(bounds: Bounds, (lo, hi): (f64, f64)) -> Bounds {
    Bounds::new(
        bounds.min.filter(|v| *v > lo),
        bounds.max.filter(|v| *v < hi),
    )
}

impl BonusFilters {
    /// `None` and `"all"` both mean every type.
    pub fn type_filter(&self) -> Option<&str> {
        Some(self.bonus_type.as_str()).filter(|t| *t != ALL_BONUSES)
    }

    pub fn filter_set(&self, page: Page) -> FilterSet<BonusWithCasino> {
        FilterSet::new()
            .range(BonusField::Wagering, self.wagering)
            .range(BonusField::Deposit, self.deposit)
            .flag(BonusFlag::Exclusive, self.exclusive)
            .members(Membership::new(self.casinos.clone()))
            .page(page)
    }
}

impl FilterState for BonusFilters {
    type Key = BonusFilterKey;

    const OWNED: &'static [&'static str] = &[
        TYPE,
        WAGERING_MIN,
        WAGERING_MAX,
        DEPOSIT_MIN,
        DEPOSIT_MAX,
        EXCLUSIVE,
        CASINOS,
    ];

    fn from_query(query: &QueryParams) -> Self {
        let bonus_type = query
            .get(TYPE)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(ALL_BONUSES)
            .to_string();

        Self {
            bonus_type,
            wagering: inside(
                Bounds::new(query.number(WAGERING_MIN), query.number(WAGERING_MAX)),
                WAGERING_DOMAIN,
            ),
            deposit: inside(
                Bounds::new(query.number(DEPOSIT_MIN), query.number(DEPOSIT_MAX)),
                DEPOSIT_DOMAIN,
            ),
            exclusive: query.flag(EXCLUSIVE),
            casinos: query.ids(CASINOS),
        }
    }

    fn write(&self, out: &mut QueryWriter) {
        out.push(TYPE, &self.bonus_type);
        if let Some(v) = self.wagering.min {
            out.push(WAGERING_MIN, format_number(v));
        }
        if let Some(v) = self.wagering.max {
            out.push(WAGERING_MAX, format_number(v));
        }
        if let Some(v) = self.deposit.min {
            out.push(DEPOSIT_MIN, format_number(v));
        }
        if let Some(v) = self.deposit.max {
            out.push(DEPOSIT_MAX, format_number(v));
        }
        out.push_if(self.exclusive, EXCLUSIVE, "true");
        if !self.casinos.is_empty() {
            let ids: Vec<String> = self.casinos.iter().map(i64::to_string).collect();
            out.push(CASINOS, ids.join(","));
        }
    }

    fn active(&self) -> Vec<BonusFilterKey> {
        [
            (self.wagering.min.is_some(), BonusFilterKey::WageringMin),
            (self.wagering.max.is_some(), BonusFilterKey::WageringMax),
            (self.deposit.min.is_some(), BonusFilterKey::DepositMin),
            (self.deposit.max.is_some(), BonusFilterKey::DepositMax),
            (self.exclusive, BonusFilterKey::Exclusive),
            (!self.casinos.is_empty(), BonusFilterKey::Casinos),
        ]
        .into_iter()
        .filter_map(|(on, key)| on.then_some(key))
        .collect()
    }

    fn remove(&mut self, key: BonusFilterKey) {
        match key {
            BonusFilterKey::WageringMin => self.wagering.min = None,
            BonusFilterKey::WageringMax => self.wagering.max = None,
            BonusFilterKey::DepositMin => self.deposit.min = None,
            BonusFilterKey::DepositMax => self.deposit.max = None,
            BonusFilterKey::Exclusive => self.exclusive = false,
            BonusFilterKey::Casinos => self.casinos.clear(),
        }
    }

    fn reset(&mut self) {
        *self = Self {
            bonus_type: std::mem::take(&mut self.bonus_type),
            ..Self::default()
        };
    }

    fn key_name(key: BonusFilterKey) -> &'static str {
        match key {
            BonusFilterKey::WageringMin => WAGERING_MIN,
            BonusFilterKey::WageringMax => WAGERING_MAX,
            BonusFilterKey::DepositMin => DEPOSIT_MIN,
            BonusFilterKey::DepositMax => DEPOSIT_MAX,
            BonusFilterKey::Exclusive => EXCLUSIVE,
            BonusFilterKey::Casinos => CASINOS,
        }
    }

    fn chip_label(&self, key: BonusFilterKey, language: Language) -> String {
        let m = language.messages();
        let num = |v: Option<f64>| format_number(v.unwrap_or_default());
        match key {
            BonusFilterKey::WageringMin => fill(m.min_wagering, num(self.wagering.min)),
            BonusFilterKey::WageringMax => fill(m.max_wagering, num(self.wagering.max)),
            BonusFilterKey::DepositMin => fill(m.min_deposit, num(self.deposit.min)),
            BonusFilterKey::DepositMax => fill(m.max_deposit, num(self.deposit.max)),
            BonusFilterKey::Exclusive => m.exclusive.to_string(),
            BonusFilterKey::Casinos => fill(m.casinos_selected, self.casinos.len()),
        }
    }
}
