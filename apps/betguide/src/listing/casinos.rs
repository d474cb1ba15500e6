//! Casino listing filters: minimum rating and feature flags.

use super::filter_bar::FilterState;
use super::params::{format_number, QueryParams, QueryWriter};
use super::predicate::{Bounds, FilterSet, Filterable, Page};
use crate::i18n::messages::fill;
use crate::i18n::Language;
use crate::repos::casinos::Casino;

pub const MIN_RATING: &str = "minRating";
pub const HAS_APP: &str = "hasApp";
pub const HAS_LIVE_STREAMING: &str = "hasLiveStreaming";
pub const HAS_CASH_OUT: &str = "hasCashOut";
pub const HAS_LIVE_BETTING: &str = "hasLiveBetting";

pub const RATING_MAX: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasinoField {
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasinoFlag {
    MobileApp,
    LiveStreaming,
    CashOut,
    LiveBetting,
}

impl CasinoFlag {
    pub const ALL: [CasinoFlag; 4] = [
        Self::MobileApp,
        Self::LiveStreaming,
        Self::CashOut,
        Self::LiveBetting,
    ];

    pub fn label(&self, language: Language) -> &'static str {
        let m = language.messages();
        match self {
            Self::MobileApp => m.mobile_app,
            Self::LiveStreaming => m.live_streaming,
            Self::CashOut => m.cash_out,
            Self::LiveBetting => m.live_betting,
        }
    }
}

impl Filterable for Casino {
    type Field = CasinoField;
    type Flag = CasinoFlag;

    fn number(&self, field: CasinoField) -> Option<f64> {
        match field {
            CasinoField::Rating => Some(self.rating),
        }
    }

    fn flag(&self, flag: CasinoFlag) -> bool {
        match flag {
            CasinoFlag::MobileApp => self.has_mobile_app,
            CasinoFlag::LiveStreaming => self.has_live_streaming,
            CasinoFlag::CashOut => self.has_cash_out,
            CasinoFlag::LiveBetting => self.has_live_betting,
        }
    }

    fn member_key(&self) -> Option<i64> {
        Some(self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasinoFilterKey {
    MinRating,
    Flag(CasinoFlag),
}

/// State of the casino filter bar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CasinoFilters {
    /// `None` is the slider's 0 position.
    pub min_rating: Option<f64>,
    pub has_app: bool,
    pub has_live_streaming: bool,
    pub has_cash_out: bool,
    pub has_live_betting: bool,
}

impl CasinoFilters {
    pub fn flag_on(&self, flag: CasinoFlag) -> bool {
        match flag {
            CasinoFlag::MobileApp => self.has_app,
            CasinoFlag::LiveStreaming => self.has_live_streaming,
            CasinoFlag::CashOut => self.has_cash_out,
            CasinoFlag::LiveBetting => self.has_live_betting,
        }
    }

    fn flag_mut(&mut self, flag: CasinoFlag) -> &mut bool {
        match flag {
            CasinoFlag::MobileApp => &mut self.has_app,
            CasinoFlag::LiveStreaming => &mut self.has_live_streaming,
            CasinoFlag::CashOut => &mut self.has_cash_out,
            CasinoFlag::LiveBetting => &mut self.has_live_betting,
        }
    }

    fn flag_param(flag: CasinoFlag) -> &'static str {
        match flag {
            CasinoFlag::MobileApp => HAS_APP,
            CasinoFlag::LiveStreaming => HAS_LIVE_STREAMING,
            CasinoFlag::CashOut => HAS_CASH_OUT,
            CasinoFlag::LiveBetting => HAS_LIVE_BETTING,
        }
    }

    pub fn filter_set(&self, page: Page) -> FilterSet<Casino> {
        let mut set = FilterSet::new().page(page);
        if let Some(min) = self.min_rating {
            set = set.range(CasinoField::Rating, Bounds::at_least(min));
        }
        for flag in CasinoFlag::ALL {
            set = set.flag(flag, self.flag_on(flag));
        }
        set
    }
}

impl FilterState for CasinoFilters {
    type Key = CasinoFilterKey;

    const OWNED: &'static [&'static str] = &[
        MIN_RATING,
        HAS_APP,
        HAS_LIVE_STREAMING,
        HAS_CASH_OUT,
        HAS_LIVE_BETTING,
    ];

    fn from_query(query: &QueryParams) -> Self {
        let mut state = Self {
            min_rating: query.number(MIN_RATING).filter(|r| *r > 0.0),
            ..Self::default()
        };
        for flag in CasinoFlag::ALL {
            *state.flag_mut(flag) = query.flag(Self::flag_param(flag));
        }
        state
    }

    fn write(&self, out: &mut QueryWriter) {
        if let Some(min) = self.min_rating {
            out.push(MIN_RATING, format_number(min));
        }
        for flag in CasinoFlag::ALL {
            out.push_if(self.flag_on(flag), Self::flag_param(flag), "true");
        }
    }

    fn active(&self) -> Vec<CasinoFilterKey> {
        let mut keys = Vec::new();
        if self.min_rating.is_some() {
            keys.push(CasinoFilterKey::MinRating);
        }
        keys.extend(
            CasinoFlag::ALL
                .into_iter()
                .filter(|f| self.flag_on(*f))
                .map(CasinoFilterKey::Flag),
        );
        keys
    }

    fn remove(&mut self, key: CasinoFilterKey) {
        match key {
            CasinoFilterKey::MinRating => self.min_rating = None,
            CasinoFilterKey::Flag(flag) => *self.flag_mut(flag) = false,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn key_name(key: CasinoFilterKey) -> &'static str {
        match key {
            CasinoFilterKey::MinRating => MIN_RATING,
            CasinoFilterKey::Flag(flag) => Self::flag_param(flag),
        }
    }

    fn chip_label(&self, key: CasinoFilterKey, language: Language) -> String {
        match key {
            CasinoFilterKey::MinRating => fill(
                language.messages().min_rating,
                format_number(self.min_rating.unwrap_or_default()),
            ),
            CasinoFilterKey::Flag(flag) => flag.label(language).to_string(),
        }
    }
}
