//! License listing filters: trust score, documented protections and tier.

use super::filter_bar::FilterState;
use super::params::{format_number, QueryParams, QueryWriter};
use super::predicate::{Bounds, FilterSet, Filterable, Page};
use crate::i18n::messages::fill;
use crate::i18n::Language;
use crate::repos::licenses::LicenseDetail;

pub const MIN_TRUST_SCORE: &str = "minTrustScore";
pub const HAS_PLAYER_PROTECTION: &str = "hasPlayerProtection";
pub const HAS_ANNUAL_FEES: &str = "hasAnnualFees";
pub const HAS_APPLICATION_PROCESS: &str = "hasApplicationProcess";
pub const TIER: &str = "tier";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseField {
    TrustScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseFlag {
    PlayerProtection,
    AnnualFees,
    ApplicationProcess,
}

impl LicenseFlag {
    pub const ALL: [LicenseFlag; 3] = [
        Self::PlayerProtection,
        Self::AnnualFees,
        Self::ApplicationProcess,
    ];

    fn param(&self) -> &'static str {
        match self {
            Self::PlayerProtection => HAS_PLAYER_PROTECTION,
            Self::AnnualFees => HAS_ANNUAL_FEES,
            Self::ApplicationProcess => HAS_APPLICATION_PROCESS,
        }
    }
}

impl Filterable for LicenseDetail {
    type Field = LicenseField;
    type Flag = LicenseFlag;

    fn number(&self, field: LicenseField) -> Option<f64> {
        match field {
            LicenseField::TrustScore => Some(self.license.trust_score),
        }
    }

    fn flag(&self, flag: LicenseFlag) -> bool {
        match flag {
            LicenseFlag::PlayerProtection => !self.children.player_protections.is_empty(),
            LicenseFlag::AnnualFees => self.license.annual_fees.is_some(),
            LicenseFlag::ApplicationProcess => self.license.application_process.is_some(),
        }
    }

    fn member_key(&self) -> Option<i64> {
        Some(self.license.id)
    }

    fn tag(&self) -> Option<&str> {
        Some(self.license.tier.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseFilterKey {
    MinTrustScore,
    Flag(LicenseFlag),
    Tier,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LicenseFilters {
    pub min_trust_score: Option<f64>,
    pub has_player_protection: bool,
    pub has_annual_fees: bool,
    pub has_application_process: bool,
    /// Raw tier label; one that names no tier matches nothing.
    pub tier: Option<String>,
}

impl LicenseFilters {
    pub fn flag_on(&self, flag: LicenseFlag) -> bool {
        match flag {
            LicenseFlag::PlayerProtection => self.has_player_protection,
            LicenseFlag::AnnualFees => self.has_annual_fees,
            LicenseFlag::ApplicationProcess => self.has_application_process,
        }
    }

    fn flag_mut(&mut self, flag: LicenseFlag) -> &mut bool {
        match flag {
            LicenseFlag::PlayerProtection => &mut self.has_player_protection,
            LicenseFlag::AnnualFees => &mut self.has_annual_fees,
            LicenseFlag::ApplicationProcess => &mut self.has_application_process,
        }
    }

    pub fn filter_set(&self, page: Page) -> FilterSet<LicenseDetail> {
        let mut set = FilterSet::new().tag(self.tier.as_deref()).page(page);
        if let Some(min) = self.min_trust_score {
            set = set.range(LicenseField::TrustScore, Bounds::at_least(min));
        }
        for flag in LicenseFlag::ALL {
            set = set.flag(flag, self.flag_on(flag));
        }
        set
    }
}

impl FilterState for LicenseFilters {
    type Key = LicenseFilterKey;

    const OWNED: &'static [&'static str] = &[
        MIN_TRUST_SCORE,
        HAS_PLAYER_PROTECTION,
        HAS_ANNUAL_FEES,
        HAS_APPLICATION_PROCESS,
        TIER,
    ];

    fn from_query(query: &QueryParams) -> Self {
        let mut state = Self {
            min_trust_score: query.number(MIN_TRUST_SCORE).filter(|v| *v > 0.0),
            tier: query
                .get(TIER)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            ..Self::default()
        };
        for flag in LicenseFlag::ALL {
            *state.flag_mut(flag) = query.flag(flag.param());
        }
        state
    }

    fn write(&self, out: &mut QueryWriter) {
        if let Some(min) = self.min_trust_score {
            out.push(MIN_TRUST_SCORE, format_number(min));
        }
        for flag in LicenseFlag::ALL {
            out.push_if(self.flag_on(flag), flag.param(), "true");
        }
        if let Some(tier) = &self.tier {
            out.push(TIER, tier);
        }
    }

    fn active(&self) -> Vec<LicenseFilterKey> {
        let mut keys = Vec::new();
        if self.min_trust_score.is_some() {
            keys.push(LicenseFilterKey::MinTrustScore);
        }
        keys.extend(
            LicenseFlag::ALL
                .into_iter()
                .filter(|f| self.flag_on(*f))
                .map(LicenseFilterKey::Flag),
        );
        if self.tier.is_some() {
            keys.push(LicenseFilterKey::Tier);
        }
        keys
    }

    fn remove(&mut self, key: LicenseFilterKey) {
        match key {
            LicenseFilterKey::MinTrustScore => self.min_trust_score = None,
            LicenseFilterKey::Flag(flag) => *self.flag_mut(flag) = false,
            LicenseFilterKey::Tier => self.tier = None,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn key_name(key: LicenseFilterKey) -> &'static str {
        match key {
            LicenseFilterKey::MinTrustScore => MIN_TRUST_SCORE,
            LicenseFilterKey::Flag(flag) => flag.param(),
            LicenseFilterKey::Tier => TIER,
        }
    }

    fn chip_label(&self, key: LicenseFilterKey, language: Language) -> String {
        let m = language.messages();
        match key {
            LicenseFilterKey::MinTrustScore => fill(
                m.trust_score,
                format_number(self.min_trust_score.unwrap_or_default()),
            ),
            LicenseFilterKey::Flag(LicenseFlag::PlayerProtection) => m.player_protection.to_string(),
            LicenseFilterKey::Flag(LicenseFlag::AnnualFees) => m.annual_fees.to_string(),
            LicenseFilterKey::Flag(LicenseFlag::ApplicationProcess) => {
                m.application_process.to_string()
            }
            LicenseFilterKey::Tier => fill(m.tier, self.tier.as_deref().unwrap_or_default()),
        }
    }
}
