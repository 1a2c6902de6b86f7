//! Catalog browsing: the filter/sort pipeline.
//!
//! A pure function from (catalog, filter, query) to an ordered product list.
//! The catalog view calls it on every read; identical inputs always produce
//! the identical sequence.

use std::fmt;
use std::str::FromStr;

use riddhi_core::{CatalogStore, CategoryFilter, Product};
use serde::{Deserialize, Serialize};

/// Sort order for the catalog view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order, no comparator. The storefront's default.
    #[default]
    Featured,
    PriceAscending,
    PriceDescending,
    RatingDescending,
}

impl SortKey {
    /// The sort selector value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAscending => "price-ascending",
            Self::PriceDescending => "price-descending",
            Self::RatingDescending => "rating-descending",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "price-ascending" => Ok(Self::PriceAscending),
            "price-descending" => Ok(Self::PriceDescending),
            "rating-descending" => Ok(Self::RatingDescending),
            _ => Err(format!(
                "unknown sort key: {s}. Valid keys: featured, price-ascending, \
                 price-descending, rating-descending"
            )),
        }
    }
}

/// What the shopper has dialed in on the catalog view.
///
/// Always well-defined; the default is every category in catalog order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl FilterState {
    /// The filter a category tile applies: that category, default order.
    #[must_use]
    pub const fn for_category(category: CategoryFilter) -> Self {
        Self {
            category,
            sort: SortKey::Featured,
        }
    }
}

/// Derive the product list for the catalog view.
///
/// Category filter first, then a case-insensitive substring match of `query`
/// against name or description (blank query keeps everything), then a stable
/// sort by the selected key. Ties keep their catalog order. An empty result
/// is a perfectly valid outcome, not an error.
#[must_use]
pub fn visible_products<'a>(
    catalog: &'a CatalogStore,
    filter: FilterState,
    query: &str,
) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();

    let mut visible: Vec<&Product> = catalog
        .iter()
        .filter(|product| filter.category.matches(product.category))
        .filter(|product| {
            needle.is_empty()
                || product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
        })
        .collect();

    match filter.sort {
        SortKey::Featured => {}
        SortKey::PriceAscending => visible.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDescending => visible.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::RatingDescending => visible.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    visible
}
