//! License authority list and detail views.

use serde::Serialize;

use crate::i18n::SiteContext;
use crate::listing::licenses::LicenseFilters;
use crate::listing::{FilterBarView, Page};
use crate::repos::licenses::{LicenseDetail, LicenseTier};

pub fn trust_label(score: f64) -> String {
    format!("{}/10", crate::listing::params::format_number(score))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseCard {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub established_year: i32,
    pub tier: LicenseTier,
    pub trust_score: f64,
    pub trust_label: String,
    pub website_url: String,
    pub requirement_count: usize,
    pub protection_count: usize,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl From<LicenseDetail> for LicenseCard {
    fn from(detail: LicenseDetail) -> Self {
        let LicenseDetail { license, children } = detail;
        Self {
            trust_label: trust_label(license.trust_score),
            requirement_count: children.requirements.len(),
            protection_count: children.player_protections.len(),
            pros: children.pros,
            cons: children.cons,
            id: license.id,
            name: license.name,
            country: license.country,
            established_year: license.established_year,
            tier: license.tier,
            trust_score: license.trust_score,
            website_url: license.website_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseListView {
    pub items: Vec<LicenseCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
    pub filters: FilterBarView,
}

pub fn license_list(
    rows: Option<Vec<LicenseDetail>>,
    filters: &LicenseFilters,
    page: Page,
    bar: FilterBarView,
    ctx: &SiteContext,
) -> LicenseListView {
    let items: Vec<LicenseCard> = filters
        .filter_set(page)
        .apply(rows.unwrap_or_default())
        .into_iter()
        .map(LicenseCard::from)
        .collect();

    LicenseListView {
        empty_message: items.is_empty().then_some(ctx.messages().no_licenses),
        items,
        filters: bar,
    }
}

/// License detail page. Empty child collections are left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseDetailView {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub established_year: i32,
    pub website_url: String,
    pub tier: LicenseTier,
    pub trust_score: f64,
    pub trust_label: String,
    pub description: String,
    pub application_process: String,
    pub annual_fees: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub player_protections: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pros: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cons: Vec<String>,
}

pub fn license_detail(detail: LicenseDetail, ctx: &SiteContext) -> LicenseDetailView {
    let not_specified = ctx.messages().not_specified;
    let LicenseDetail { license, children } = detail;
    LicenseDetailView {
        trust_label: trust_label(license.trust_score),
        application_process: license
            .application_process
            .unwrap_or_else(|| not_specified.to_string()),
        annual_fees: license
            .annual_fees
            .unwrap_or_else(|| not_specified.to_string()),
        id: license.id,
        name: license.name,
        country: license.country,
        established_year: license.established_year,
        website_url: license.website_url,
        tier: license.tier,
        trust_score: license.trust_score,
        description: license.description,
        requirements: children.requirements,
        player_protections: children.player_protections,
        pros: children.pros,
        cons: children.cons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::repos::licenses::{License, LicenseChildren};

    fn detail() -> LicenseDetail {
        LicenseDetail {
            license: License {
                id: 5,
                name: "Malta Gaming Authority".into(),
                country: "Malta".into(),
                established_year: 2001,
                website_url: "https://mga.example".into(),
                tier: LicenseTier::Excellent,
                trust_score: 9.5,
                description: "EU regulator".into(),
                application_process: None,
                annual_fees: Some("€25,000".into()),
            },
            children: LicenseChildren {
                requirements: vec!["Local office".into()],
                pros: vec!["Respected".into()],
                ..LicenseChildren::default()
            },
        }
    }

    #[test]
    fn detail_omits_empty_sections_and_falls_back() {
        let ctx = SiteContext::default().with_language(Language::En);
        let view = license_detail(detail(), &ctx);
        assert_eq!(view.trust_label, "9.5/10");
        assert_eq!(view.application_process, "Not specified");

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("requirements").is_some());
        assert!(json.get("playerProtections").is_none());
        assert!(json.get("cons").is_none());
    }

    #[test]
    fn card_counts_children() {
        let card = LicenseCard::from(detail());
        assert_eq!(card.requirement_count, 1);
        assert_eq!(card.protection_count, 0);
        assert_eq!(card.pros, vec!["Respected"]);
    }
}
