//! Casino ranking, detail and casino-of-the-month views.

use serde::Serialize;
use time::Date;

use super::stars;
use crate::i18n::SiteContext;
use crate::listing::casinos::{CasinoFilters, CasinoFlag};
use crate::listing::{FilterBarView, Page, QueryParams};
use crate::repos::casinos::{Casino, CasinoDetail, GameProvider, HeldLicense, PaymentMethod};
use crate::services::catalog::GLOBAL_SCOPE;

pub const COUNTRY: &str = "country";
pub const HIGHLIGHT_FIRST: &str = "highlightFirst";
pub const STYLE: &str = "style";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    #[default]
    Standard,
    Featured,
    Compact,
}

impl ListStyle {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "standard" => Some(Self::Standard),
            "featured" => Some(Self::Featured),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

/// Presentation options of a casino listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CasinoListOptions {
    pub country: String,
    pub page: Page,
    pub highlight_first: bool,
    pub style: ListStyle,
}

impl Default for CasinoListOptions {
    fn default() -> Self {
        Self {
            country: GLOBAL_SCOPE.to_string(),
            page: Page::default(),
            highlight_first: false,
            style: ListStyle::default(),
        }
    }
}

impl CasinoListOptions {
    pub fn from_query(query: &QueryParams) -> Self {
        Self {
            country: query
                .get(COUNTRY)
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .unwrap_or(GLOBAL_SCOPE)
                .to_string(),
            page: crate::listing::page_from(query),
            highlight_first: query.flag(HIGHLIGHT_FIRST),
            style: query.get(STYLE).and_then(ListStyle::parse).unwrap_or_default(),
        }
    }

    /// Country code to scope by, `None` for the global ranking.
    pub fn country_scope(&self) -> Option<&str> {
        Some(self.country.as_str()).filter(|c| *c != GLOBAL_SCOPE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CasinoCard {
    pub rank: usize,
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub logo_url: String,
    pub website_url: String,
    pub rating: f64,
    pub stars: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
    pub min_deposit: Option<f64>,
    pub withdrawal_time: Option<String>,
    pub highlighted: bool,
}

impl CasinoCard {
    fn new(casino: Casino, rank: usize, style: ListStyle, ctx: &SiteContext) -> Self {
        let compact = style == ListStyle::Compact;
        let badges = if compact {
            Vec::new()
        } else {
            badges(&casino, ctx)
        };
        Self {
            rank,
            stars: stars(casino.rating),
            badges,
            description: (!compact).then_some(casino.description),
            id: casino.id,
            name: casino.name,
            slug: casino.slug,
            logo_url: casino.logo_url,
            website_url: casino.website_url,
            rating: casino.rating,
            min_deposit: casino.min_deposit,
            withdrawal_time: casino.withdrawal_time,
            highlighted: false,
        }
    }
}

/// Cards numbered from `offset + 1`.
pub fn ranked(rows: Vec<Casino>, offset: usize, style: ListStyle, ctx: &SiteContext) -> Vec<CasinoCard> {
    rows.into_iter()
        .enumerate()
        .map(|(i, casino)| CasinoCard::new(casino, offset + i + 1, style, ctx))
        .collect()
}

/// Localized labels of the features a casino offers.
pub fn badges(casino: &Casino, ctx: &SiteContext) -> Vec<String> {
    use crate::listing::predicate::Filterable;
    CasinoFlag::ALL
        .into_iter()
        .filter(|flag| casino.flag(*flag))
        .map(|flag| flag.label(ctx.language).to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CasinoListView {
    pub country: String,
    pub style: ListStyle,
    pub items: Vec<CasinoCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
    pub filters: FilterBarView,
}

/// Filter, page, rank and decorate a casino collection.
///
/// Ranks are positions in the filtered collection, so a skipped page keeps
/// counting from where the previous one stopped.
pub fn casino_list(
    rows: Option<Vec<Casino>>,
    filters: &CasinoFilters,
    options: &CasinoListOptions,
    bar: FilterBarView,
    ctx: &SiteContext,
) -> CasinoListView {
    let offset = options.page.skip.unwrap_or(0);
    let kept = filters
        .filter_set(options.page)
        .apply(rows.unwrap_or_default());

    let mut items = ranked(kept, offset, options.style, ctx);

    if options.highlight_first {
        if let Some(first) = items.first_mut() {
            first.highlighted = true;
        }
    }

    CasinoListView {
        country: options.country.clone(),
        style: options.style,
        empty_message: items.is_empty().then_some(ctx.messages().no_results),
        items,
        filters: bar,
    }
}

/// A license the casino holds. Unknown number or issue date are left out.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeldLicenseView {
    pub license_id: i64,
    pub name: String,
    pub country: String,
    pub tier: String,
    pub trust_score: f64,
    pub license_number: Option<String>,
    pub issue_date: Option<String>,
}

impl From<HeldLicense> for HeldLicenseView {
    fn from(held: HeldLicense) -> Self {
        Self {
            license_id: held.license_id,
            name: held.name,
            country: held.country,
            tier: held.tier.as_str().to_string(),
            trust_score: held.trust_score,
            license_number: held.license_number,
            issue_date: held.issue_date.map(|d| d.to_string()),
        }
    }
}

/// Casino detail page. Empty sub-collections are left out entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CasinoDetailView {
    pub casino: Casino,
    pub stars: u8,
    pub badges: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payment_methods: Vec<PaymentMethod>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub game_providers: Vec<GameProvider>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<HeldLicenseView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security_features: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pros: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cons: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub support_channels: Vec<String>,
}

pub fn casino_detail(detail: CasinoDetail, ctx: &SiteContext) -> CasinoDetailView {
    CasinoDetailView {
        stars: stars(detail.casino.rating),
        badges: badges(&detail.casino, ctx),
        casino: detail.casino,
        features: detail.features,
        payment_methods: detail.payment_methods,
        game_providers: detail.game_providers,
        licenses: detail.licenses.into_iter().map(HeldLicenseView::from).collect(),
        security_features: detail.security_features,
        pros: detail.pros,
        cons: detail.cons,
        languages: detail.languages,
        support_channels: detail.support_channels,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedCasinoView {
    pub title: &'static str,
    pub month_label: String,
    pub featured_by: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub casino: Option<CasinoCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

/// Casino of the month for a country scope, labelled with `today`'s month.
pub fn featured_casino(
    casino: Option<Casino>,
    country: &str,
    today: Date,
    ctx: &SiteContext,
) -> FeaturedCasinoView {
    let m = ctx.messages();
    let card = casino.map(|c| {
        let mut card = CasinoCard::new(c, 1, ListStyle::Featured, ctx);
        card.highlighted = true;
        card
    });
    FeaturedCasinoView {
        title: m.casino_of_the_month,
        month_label: format!("{} {}", m.month(today.month()), today.year()),
        featured_by: m.featured_by.replace("{site}", &ctx.site_name),
        country: country.to_string(),
        empty_message: card.is_none().then_some(m.load_failed),
        casino: card,
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::i18n::Language;
    use crate::listing::{FilterState, QueryParams};

    fn casino(id: i64, rating: f64) -> Casino {
        Casino {
            id,
            name: format!("Casino {id}"),
            slug: format!("casino-{id}"),
            logo_url: String::new(),
            website_url: format!("https://casino-{id}.example"),
            description: "A casino".into(),
            rating,
            established_year: 2015,
            min_deposit: Some(10.0),
            withdrawal_time: None,
            has_mobile_app: id % 2 == 1,
            has_live_streaming: true,
            has_cash_out: false,
            has_live_betting: false,
            monthly_visits: None,
            positive_rating_percentage: None,
            user_reviews_count: None,
            featured: id == 1,
        }
    }

    fn render(query: &str, rows: Option<Vec<Casino>>, ctx: &SiteContext) -> CasinoListView {
        let q = QueryParams::parse(query);
        let filters = CasinoFilters::from_query(&q);
        let bar = filters.bar_view("/api/casinos", &q, ctx.language);
        casino_list(rows, &filters, &CasinoListOptions::from_query(&q), bar, ctx)
    }

    #[test]
    fn ranks_follow_filtered_positions() {
        let rows = vec![casino(1, 4.8), casino(2, 4.2), casino(3, 3.9), casino(4, 4.5)];
        let view = render("minRating=4&skip=1&limit=2", Some(rows), &SiteContext::default());
        let ranks: Vec<_> = view.items.iter().map(|c| (c.rank, c.id)).collect();
        assert_eq!(ranks, vec![(2, 2), (3, 4)]);
    }

    #[test]
    fn highlight_and_compact_style() {
        let ctx = SiteContext::default().with_language(Language::En);
        let view = render(
            "highlightFirst=true&style=compact",
            Some(vec![casino(1, 4.8), casino(2, 4.0)]),
            &ctx,
        );
        assert!(view.items[0].highlighted);
        assert!(!view.items[1].highlighted);
        assert!(view.items[0].badges.is_empty());
        assert!(view.items[0].description.is_none());

        let standard = render("", Some(vec![casino(1, 4.8)]), &ctx);
        assert_eq!(standard.items[0].badges, vec!["Mobile App", "Live Streaming"]);
        assert_eq!(standard.country, "global");
    }

    #[test]
    fn failure_and_no_match_share_the_empty_message() {
        let ctx = SiteContext::default();
        let failed = render("", None, &ctx);
        let no_match = render("minRating=5", Some(vec![casino(1, 4.0)]), &ctx);
        assert!(failed.items.is_empty());
        assert_eq!(failed.empty_message, Some(ctx.messages().no_results));
        assert_eq!(no_match.empty_message, failed.empty_message);
    }

    #[test]
    fn featured_view_labels_month_and_site() {
        let ctx = SiteContext::resolve(Some("es"), None, &crate::config::site::SiteConfig::new("ApuestasPro"));
        let view = featured_casino(Some(casino(1, 4.9)), "global", date!(2025 - 05 - 14), &ctx);
        assert_eq!(view.month_label, "Mayo 2025");
        assert_eq!(view.featured_by, "Destacado por ApuestasPro");
        assert_eq!(view.casino.as_ref().map(|c| c.stars), Some(4));
        assert!(view.empty_message.is_none());

        let none = featured_casino(None, "ar", date!(2025 - 05 - 14), &ctx);
        assert!(none.casino.is_none());
        assert!(none.empty_message.is_some());
    }
}
