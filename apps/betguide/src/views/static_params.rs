//! Natural keys of every detail page, for ahead-of-time generation.

use serde::Serialize;

use crate::repos::casinos::Casino;
use crate::repos::countries::Country;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticParamsView {
    pub countries: Vec<String>,
    pub casinos: Vec<String>,
}

pub fn static_params(countries: Option<Vec<Country>>, casinos: Option<Vec<Casino>>) -> StaticParamsView {
    StaticParamsView {
        countries: countries
            .unwrap_or_default()
            .into_iter()
            .map(|c| c.code)
            .collect(),
        casinos: casinos
            .unwrap_or_default()
            .into_iter()
            .map(|c| c.slug)
            .collect(),
    }
}
