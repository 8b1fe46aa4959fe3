//! List state management: the fetched item set, brand filtering, and
//! price ordering.
//!
//! The state holder owns two collections: `all` is the immutable snapshot
//! of the latest fetch, `current` the filtered view derived from it.
//! `current` is always recomputed from `all` on a filter change, never
//! patched incrementally, and ordering is applied fresh on every redraw
//! rather than being stored back into the state.

use crate::models::Product;

/// Ordering applied to the visible items on redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Keep the API's insertion order.
    #[default]
    Unsorted,
    /// Cheapest first; missing prices sort as zero.
    PriceAscending,
    /// Most expensive first; missing prices sort as zero.
    PriceDescending,
}

impl SortMode {
    /// Advances to the next mode, wrapping around.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::Unsorted => Self::PriceAscending,
            Self::PriceAscending => Self::PriceDescending,
            Self::PriceDescending => Self::Unsorted,
        }
    }

    /// Danish label shown in the toolbar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unsorted => "Standard",
            Self::PriceAscending => "Pris (stigende)",
            Self::PriceDescending => "Pris (faldende)",
        }
    }
}

/// Holder for the full fetched item set and the currently visible subset.
///
/// Invariant: `current` is always a subset of `all`, recomputed from `all`
/// by every filter operation.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    all: Vec<Product>,
    current: Vec<Product>,
}

impl ListState {
    /// Creates an empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            all: Vec::new(),
            current: Vec::new(),
        }
    }

    /// Replaces both the full set and the visible subset with `items`.
    pub fn load(&mut self, items: Vec<Product>) {
        self.current = items.clone();
        self.all = items;
    }

    /// The full item set from the latest fetch.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.all
    }

    /// The currently visible subset, prior to sorting.
    #[must_use]
    pub fn current(&self) -> &[Product] {
        &self.current
    }

    /// Restricts the visible subset to items whose brand is in `selected`.
    ///
    /// Matching is case-sensitive and exact; an empty selection means no
    /// filtering at all (`current` becomes the full set).
    pub fn apply_filter(&mut self, selected: &[String]) {
        if selected.is_empty() {
            self.current = self.all.clone();
            return;
        }
        self.current = self
            .all
            .iter()
            .filter(|p| {
                p.brand
                    .as_ref()
                    .is_some_and(|brand| selected.contains(brand))
            })
            .cloned()
            .collect();
    }

    /// Resets the visible subset to the full set.
    pub fn clear_filter(&mut self) {
        self.current = self.all.clone();
    }

    /// Returns a freshly ordered copy of the visible subset.
    ///
    /// The underlying subset is never mutated; ties keep their insertion
    /// order (the sort is stable), and `SortMode::Unsorted` is a plain
    /// copy.
    #[must_use]
    pub fn sorted(&self, mode: SortMode) -> Vec<Product> {
        let mut out = self.current.clone();
        match mode {
            SortMode::Unsorted => {}
            SortMode::PriceAscending => {
                out.sort_by(|a, b| a.sort_price().total_cmp(&b.sort_price()));
            }
            SortMode::PriceDescending => {
                out.sort_by(|a, b| b.sort_price().total_cmp(&a.sort_price()));
            }
        }
        out
    }
}

/// Derives the distinct, non-empty brand names of `items`, ordered
/// case-insensitively.
#[must_use]
pub fn distinct_brands(items: &[Product]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut brands: Vec<String> = items
        .iter()
        .filter_map(|p| p.brand.clone())
        .filter(|brand| !brand.is_empty())
        .filter(|brand| seen.insert(brand.clone()))
        .collect();
    brands.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    brands
}
