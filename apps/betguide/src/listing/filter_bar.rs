//! Filter-bar state shared by every listing.
//!
//! The bar reads its state from the current URL, writes only non-default
//! values back, and describes every navigation it can trigger (remove one
//! chip, reset all) as a ready-made `path?query` target.

use serde::Serialize;

use super::params::{QueryParams, QueryWriter};
use crate::i18n::Language;

/// One active filter, removable on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterChip {
    pub key: &'static str,
    pub label: String,
    pub remove_href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterBarView {
    pub chips: Vec<FilterChip>,
    pub reset_href: String,
    pub active_count: usize,
}

pub trait FilterState: Clone + PartialEq + Sized {
    type Key: Copy + PartialEq;

    /// Query parameters this bar owns; everything else passes through.
    const OWNED: &'static [&'static str];

    fn from_query(query: &QueryParams) -> Self;

    /// Append the non-default values.
    fn write(&self, out: &mut QueryWriter);

    /// Active filters in display order.
    fn active(&self) -> Vec<Self::Key>;

    fn remove(&mut self, key: Self::Key);

    /// Clear every filter (state the bar keeps across resets stays).
    fn reset(&mut self);

    fn key_name(key: Self::Key) -> &'static str;

    fn chip_label(&self, key: Self::Key, language: Language) -> String;

    fn to_query(&self) -> String {
        let mut out = QueryWriter::new();
        self.write(&mut out);
        out.finish()
    }

    /// Navigation target for this state, carrying the foreign parameters.
    fn href(&self, path: &str, passthrough: Vec<(String, String)>) -> String {
        let mut out = QueryWriter::with_pairs(passthrough);
        self.write(&mut out);
        out.href(path)
    }

    fn without(&self, key: Self::Key) -> Self {
        let mut next = self.clone();
        next.remove(key);
        next
    }

    fn cleared(&self) -> Self {
        let mut next = self.clone();
        next.reset();
        next
    }

    fn bar_view(&self, path: &str, query: &QueryParams, language: Language) -> FilterBarView {
        let passthrough = query.without(Self::OWNED);
        let chips: Vec<FilterChip> = self
            .active()
            .into_iter()
            .map(|key| FilterChip {
                key: Self::key_name(key),
                label: self.chip_label(key, language),
                remove_href: self.without(key).href(path, passthrough.clone()),
            })
            .collect();

        FilterBarView {
            active_count: chips.len(),
            chips,
            reset_href: self.cleared().href(path, Vec::new()),
        }
    }
}
