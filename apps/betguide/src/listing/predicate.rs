//! The single predicate set shared by every listing.
//!
//! A row passes a `FilterSet` when it satisfies every numeric range, every
//! required flag, the membership list and the tag; the survivors are then
//! paged with skip-then-limit. Relative order is always preserved.

use serde::Serialize;

/// Inclusive numeric range. A row with no value passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: f64) -> Self {
        Self::new(Some(min), None)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn admits(&self, value: Option<f64>) -> bool {
        match value {
            None => true,
            Some(v) => self.min.map_or(true, |m| v >= m) && self.max.map_or(true, |m| v <= m),
        }
    }
}

/// Foreign-key membership. An empty list constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Membership {
    ids: Vec<i64>,
}

impl Membership {
    pub fn new(ids: Vec<i64>) -> Self {
        Self { ids }
    }

    pub fn admits(&self, key: Option<i64>) -> bool {
        self.ids.is_empty() || key.is_some_and(|k| self.ids.contains(&k))
    }
}

/// Skip then limit. A zero limit means no limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

impl Page {
    pub fn new(skip: Option<usize>, limit: Option<usize>) -> Self {
        Self {
            skip,
            limit: limit.filter(|n| *n > 0),
        }
    }

    pub fn apply<T>(&self, rows: Vec<T>) -> Vec<T> {
        rows.into_iter()
            .skip(self.skip.unwrap_or(0))
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

/// What a listing row exposes to the predicate set.
pub trait Filterable {
    /// Numeric fields that ranges can target.
    type Field: Copy;
    /// Boolean properties that flags can require.
    type Flag: Copy;

    fn number(&self, field: Self::Field) -> Option<f64>;
    fn flag(&self, flag: Self::Flag) -> bool;

    /// Key matched against the membership list.
    fn member_key(&self) -> Option<i64> {
        None
    }

    /// Label matched case-insensitively against the tag constraint.
    fn tag(&self) -> Option<&str> {
        None
    }
}

pub struct FilterSet<R: Filterable> {
    ranges: Vec<(R::Field, Bounds)>,
    flags: Vec<R::Flag>,
    membership: Membership,
    tag: Option<String>,
    page: Page,
}

impl<R: Filterable> Default for FilterSet<R> {
    fn default() -> Self {
        Self {
            ranges: Vec::new(),
            flags: Vec::new(),
            membership: Membership::default(),
            tag: None,
            page: Page::default(),
        }
    }
}

impl<R: Filterable> FilterSet<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(mut self, field: R::Field, bounds: Bounds) -> Self {
        if !bounds.is_unbounded() {
            self.ranges.push((field, bounds));
        }
        self
    }

    /// Require `flag` when `on`; a flag that is off constrains nothing.
    pub fn flag(mut self, flag: R::Flag, on: bool) -> Self {
        if on {
            self.flags.push(flag);
        }
        self
    }

    pub fn members(mut self, membership: Membership) -> Self {
        self.membership = membership;
        self
    }

    pub fn tag(mut self, tag: Option<&str>) -> Self {
        self.tag = tag.map(str::to_string);
        self
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    pub fn admits(&self, row: &R) -> bool {
        self.ranges
            .iter()
            .all(|(field, bounds)| bounds.admits(row.number(*field)))
            && self.flags.iter().all(|flag| row.flag(*flag))
            && self.membership.admits(row.member_key())
            && self.tag.as_deref().map_or(true, |want| {
                row.tag().is_some_and(|have| have.eq_ignore_ascii_case(want))
            })
    }

    pub fn apply(&self, rows: Vec<R>) -> Vec<R> {
        let kept: Vec<R> = rows.into_iter().filter(|r| self.admits(r)).collect();
        self.page.apply(kept)
    }
}
