//! List-fetch-filter composition for the directory listings.

pub mod bonuses;
pub mod casinos;
pub mod countries;
pub mod filter_bar;
pub mod licenses;
pub mod params;
pub mod predicate;

pub use filter_bar::{FilterBarView, FilterChip, FilterState};
pub use params::{QueryParams, QueryWriter};
pub use predicate::{Bounds, FilterSet, Filterable, Membership, Page};

/// Page constraints read from `skip` and `limit`.
pub fn page_from(query: &QueryParams) -> Page {
    Page::new(query.count(params::SKIP), query.count(params::LIMIT))
}
