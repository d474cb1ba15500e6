//! Country search over the already-loaded list.

use super::params::QueryParams;
use crate::repos::countries::Country;

pub const SEARCH: &str = "q";

/// Current search term; blank means no constraint.
pub fn search_term(query: &QueryParams) -> String {
    query.get(SEARCH).map(str::trim).unwrap_or_default().to_string()
}

pub fn search(countries: Vec<Country>, term: &str) -> Vec<Country> {
    countries
        .into_iter()
        .filter(|c| c.matches_search(term))
        .collect()
}
