//! JSON view models: everything a renderer needs, already filtered, ranked
//! and localized.

pub mod bonuses;
pub mod casinos;
pub mod compare;
pub mod countries;
pub mod licenses;
pub mod static_params;

use serde::Serialize;

use crate::repos::casinos::Casino;

/// Filled stars for a 0-5 rating.
pub fn stars(rating: f64) -> u8 {
    rating.floor().clamp(0.0, 5.0) as u8
}

/// One independently loaded block of a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl<T> Section<T> {
    /// Items when there are any, otherwise the fallback message.
    pub fn from_items(items: Vec<T>, empty: &'static str) -> Self {
        let message = items.is_empty().then_some(empty);
        Self { items, message }
    }
}

/// Casino fields shown wherever another entity references a casino.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CasinoSummary {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub logo_url: String,
    pub rating: f64,
    pub stars: u8,
}

impl From<&Casino> for CasinoSummary {
    fn from(casino: &Casino) -> Self {
        Self {
            id: casino.id,
            name: casino.name.clone(),
            slug: casino.slug.clone(),
            logo_url: casino.logo_url.clone(),
            rating: casino.rating,
            stars: stars(casino.rating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_floor_and_clamp() {
        assert_eq!(stars(4.9), 4);
        assert_eq!(stars(5.0), 5);
        assert_eq!(stars(7.2), 5);
        assert_eq!(stars(-1.0), 0);
        assert_eq!(stars(0.4), 0);
    }

    #[test]
    fn section_carries_message_only_when_empty() {
        let empty: Section<u8> = Section::from_items(vec![], "nothing");
        assert_eq!(empty.message, Some("nothing"));
        assert_eq!(Section::from_items(vec![1u8], "nothing").message, None);
    }
}
