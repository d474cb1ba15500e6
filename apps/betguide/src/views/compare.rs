//! Side-by-side comparison of two casinos or two license authorities.

use serde::Serialize;

use super::casinos::badges;
use super::licenses::LicenseCard;
use super::stars;
use crate::i18n::SiteContext;
use crate::listing::QueryParams;
use crate::repos::casinos::Casino;
use crate::repos::licenses::LicenseDetail;

pub const IDS: &str = "ids";

/// A selectable entry of a comparison picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareOption {
    pub id: i64,
    pub name: String,
}

/// Ids of the two compared slots: requested ids first, then the first two
/// rows for any slot left open.
pub fn selection(query: &QueryParams, available: &[i64]) -> [Option<i64>; 2] {
    let requested = query.ids(IDS);
    let mut slots = [None, None];
    for (slot, fallback) in slots.iter_mut().zip(available.iter()) {
        *slot = Some(*fallback);
    }
    for (slot, id) in slots.iter_mut().zip(requested) {
        *slot = Some(id);
    }
    slots
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparedCasino {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub logo_url: String,
    pub rating: f64,
    pub stars: u8,
    pub established_year: i32,
    pub min_deposit: Option<f64>,
    pub withdrawal_time: Option<String>,
    pub has_mobile_app: bool,
    pub has_live_streaming: bool,
    pub has_cash_out: bool,
    pub has_live_betting: bool,
    pub badges: Vec<String>,
}

impl ComparedCasino {
    fn new(casino: &Casino, ctx: &SiteContext) -> Self {
        Self {
            id: casino.id,
            name: casino.name.clone(),
            slug: casino.slug.clone(),
            logo_url: casino.logo_url.clone(),
            rating: casino.rating,
            stars: stars(casino.rating),
            established_year: casino.established_year,
            min_deposit: casino.min_deposit,
            withdrawal_time: casino.withdrawal_time.clone(),
            has_mobile_app: casino.has_mobile_app,
            has_live_streaming: casino.has_live_streaming,
            has_cash_out: casino.has_cash_out,
            has_live_betting: casino.has_live_betting,
            badges: badges(casino, ctx),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonView<T> {
    pub options: Vec<CompareOption>,
    pub selected: [Option<T>; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

pub fn casino_comparison(
    rows: Option<Vec<Casino>>,
    query: &QueryParams,
    ctx: &SiteContext,
) -> ComparisonView<ComparedCasino> {
    let rows = rows.unwrap_or_default();
    let ids: Vec<i64> = rows.iter().map(|c| c.id).collect();
    let pick = |id: Option<i64>| {
        id.and_then(|id| rows.iter().find(|c| c.id == id))
            .map(|c| ComparedCasino::new(c, ctx))
    };
    let [a, b] = selection(query, &ids);

    ComparisonView {
        options: rows
            .iter()
            .map(|c| CompareOption {
                id: c.id,
                name: c.name.clone(),
            })
            .collect(),
        selected: [pick(a), pick(b)],
        message: (rows.len() < 2).then_some(ctx.messages().not_enough_to_compare),
    }
}

pub fn license_comparison(
    rows: Option<Vec<LicenseDetail>>,
    query: &QueryParams,
    ctx: &SiteContext,
) -> ComparisonView<LicenseCard> {
    let rows = rows.unwrap_or_default();
    let ids: Vec<i64> = rows.iter().map(|l| l.license.id).collect();
    let pick = |id: Option<i64>| {
        id.and_then(|id| rows.iter().find(|l| l.license.id == id))
            .cloned()
            .map(LicenseCard::from)
    };
    let [a, b] = selection(query, &ids);

    ComparisonView {
        options: rows
            .iter()
            .map(|l| CompareOption {
                id: l.license.id,
                name: l.license.name.clone(),
            })
            .collect(),
        selected: [pick(a), pick(b)],
        message: (rows.len() < 2).then_some(ctx.messages().not_enough_to_compare),
    }
}
