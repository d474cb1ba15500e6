//! Country list, legal-information detail and per-country home page.

use serde::Serialize;
use time::Date;

use super::bonuses::BonusCard;
use super::casinos::{featured_casino, ranked, CasinoCard, FeaturedCasinoView, ListStyle};
use super::Section;
use crate::i18n::SiteContext;
use crate::listing::countries::search;
use crate::listing::Page;
use crate::repos::bonuses::BonusWithCasino;
use crate::repos::casinos::Casino;
use crate::repos::countries::{Country, LegalStatus};

/// Home-page hero: the best ranked casino, then the next few in compact form.
pub const TOP_PICK: Page = Page {
    skip: None,
    limit: Some(1),
};
pub const RUNNERS_UP: Page = Page {
    skip: Some(1),
    limit: Some(4),
};

pub fn legal_label(status: LegalStatus, ctx: &SiteContext) -> &'static str {
    let m = ctx.messages();
    match status {
        LegalStatus::Legal => m.legal,
        LegalStatus::Partial => m.partially_legal,
        LegalStatus::Restricted => m.restricted,
    }
}

pub fn country_href(code: &str) -> String {
    format!("/countries/{code}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryItem {
    pub code: String,
    pub name: String,
    pub flag: String,
    pub legal_class: LegalStatus,
    pub legal_status: &'static str,
    pub href: String,
}

impl CountryItem {
    fn new(country: Country, ctx: &SiteContext) -> Self {
        Self {
            legal_status: legal_label(country.legal_class, ctx),
            href: country_href(&country.code),
            legal_class: country.legal_class,
            code: country.code,
            name: country.name,
            flag: country.flag_emoji,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryListView {
    pub search: String,
    pub items: Vec<CountryItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

pub fn country_list(rows: Option<Vec<Country>>, term: &str, ctx: &SiteContext) -> CountryListView {
    let items: Vec<CountryItem> = search(rows.unwrap_or_default(), term)
        .into_iter()
        .map(|c| CountryItem::new(c, ctx))
        .collect();
    CountryListView {
        search: term.to_string(),
        empty_message: items.is_empty().then_some(ctx.messages().no_countries),
        items,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDetailView {
    pub code: String,
    pub name: String,
    pub flag: String,
    pub legal_status: String,
    pub legal_class: LegalStatus,
    pub legal_label: &'static str,
    pub regulatory_body: String,
    pub legal_age: String,
    pub tax_info: String,
    pub legal_info: Option<String>,
    pub top_casinos: Section<CasinoCard>,
    pub bonuses: Section<BonusCard>,
}

/// Legal information for one country. The casino and bonus sections load
/// separately; a missing one shows its own message and leaves the rest intact.
pub fn country_detail(
    country: Country,
    casinos: Option<Vec<Casino>>,
    bonuses: Option<Vec<BonusWithCasino>>,
    ctx: &SiteContext,
) -> CountryDetailView {
    let m = ctx.messages();
    let or_unspecified = |v: Option<String>| v.unwrap_or_else(|| m.not_specified.to_string());

    let top_casinos = ranked(casinos.unwrap_or_default(), 0, ListStyle::Standard, ctx);
    let bonuses: Vec<BonusCard> = bonuses
        .unwrap_or_default()
        .into_iter()
        .map(|row| BonusCard::new(row, ctx))
        .collect();

    CountryDetailView {
        legal_label: legal_label(country.legal_class, ctx),
        regulatory_body: or_unspecified(country.regulatory_body),
        legal_age: or_unspecified(country.legal_age),
        tax_info: or_unspecified(country.tax_info),
        legal_info: country.legal_info.filter(|s| !s.trim().is_empty()),
        code: country.code,
        name: country.name,
        flag: country.flag_emoji,
        legal_status: country.legal_status,
        legal_class: country.legal_class,
        top_casinos: Section::from_items(top_casinos, m.no_results),
        bonuses: Section::from_items(bonuses, m.no_bonuses),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryHomeView {
    pub country: CountryItem,
    pub featured: FeaturedCasinoView,
    pub top_pick: Section<CasinoCard>,
    pub runners_up: Section<CasinoCard>,
}

pub fn country_home(
    country: Country,
    featured: Option<Casino>,
    casinos: Option<Vec<Casino>>,
    today: Date,
    ctx: &SiteContext,
) -> CountryHomeView {
    let m = ctx.messages();
    let casinos = casinos.unwrap_or_default();
    let slice = |page: Page, style| {
        let offset = page.skip.unwrap_or(0);
        ranked(page.apply(casinos.clone()), offset, style, ctx)
    };
    let mut top_pick = slice(TOP_PICK, ListStyle::Featured);
    if let Some(first) = top_pick.first_mut() {
        first.highlighted = true;
    }
    let runners_up = slice(RUNNERS_UP, ListStyle::Compact);

    CountryHomeView {
        featured: featured_casino(featured, &country.code, today, ctx),
        country: CountryItem::new(country, ctx),
        top_pick: Section::from_items(top_pick, m.no_results),
        runners_up: Section::from_items(runners_up, m.no_results),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::i18n::Language;

    fn country(name: &str, code: &str, legal: &str) -> Country {
        Country {
            id: 1,
            name: name.into(),
            code: code.into(),
            flag_emoji: "🏳".into(),
            legal_status: legal.into(),
            legal_class: LegalStatus::classify(legal),
            regulatory_body: None,
            legal_age: Some("18".into()),
            tax_info: None,
            legal_info: Some("  ".into()),
        }
    }

    fn casino(id: i64, rating: f64) -> Casino {
        Casino {
            id,
            name: format!("Casino {id}"),
            slug: format!("casino-{id}"),
            logo_url: String::new(),
            website_url: String::new(),
            description: "desc".into(),
            rating,
            established_year: 2010,
            min_deposit: None,
            withdrawal_time: None,
            has_mobile_app: true,
            has_live_streaming: false,
            has_cash_out: false,
            has_live_betting: false,
            monthly_visits: None,
            positive_rating_percentage: None,
            user_reviews_count: None,
            featured: false,
        }
    }

    fn en() -> SiteContext {
        SiteContext::default().with_language(Language::En)
    }

    #[test]
    fn list_filters_by_search_and_labels_status() {
        let rows = vec![
            country("Spain", "es", "Legal"),
            country("Mexico", "mx", "Partially legal"),
        ];
        let view = country_list(Some(rows), "MEX", &en());
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].legal_class, LegalStatus::Partial);
        assert_eq!(view.items[0].legal_status, "Partially legal");
        assert_eq!(view.items[0].href, "/countries/mx");
        assert_eq!(view.empty_message, None);

        let none = country_list(None, "", &en());
        assert!(none.items.is_empty());
        assert!(none.empty_message.is_some());
    }

    #[test]
    fn detail_falls_back_and_sections_fail_alone() {
        let view = country_detail(
            country("Spain", "es", "Legal"),
            Some(vec![casino(1, 4.8), casino(2, 4.1)]),
            None,
            &en(),
        );
        assert_eq!(view.regulatory_body, "Not specified");
        assert_eq!(view.legal_age, "18");
        assert_eq!(view.legal_info, None);
        assert_eq!(view.top_casinos.items.len(), 2);
        assert_eq!(view.top_casinos.items[1].rank, 2);
        assert_eq!(view.top_casinos.message, None);
        assert!(view.bonuses.items.is_empty());
        assert!(view.bonuses.message.is_some());
    }

    #[test]
    fn home_splits_top_pick_from_runners_up() {
        let rows: Vec<Casino> = (1..=7).map(|i| casino(i, 5.0 - i as f64 * 0.1)).collect();
        let view = country_home(
            country("Spain", "es", "Legal"),
            None,
            Some(rows),
            date!(2026 - 03 - 01),
            &en(),
        );
        assert_eq!(view.top_pick.items.len(), 1);
        assert!(view.top_pick.items[0].highlighted);
        let ranks: Vec<usize> = view.runners_up.items.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![2, 3, 4, 5]);
        assert!(view.runners_up.items.iter().all(|c| c.badges.is_empty()));
        assert_eq!(view.featured.country, "es");
        assert!(view.featured.casino.is_none());
    }
}
