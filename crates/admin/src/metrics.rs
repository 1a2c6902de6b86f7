//! Dashboard headline numbers.

use serde::Serialize;

use riddhi_core::{CatalogStore, Price};

/// The three stat cards at the top of the admin dashboard.
///
/// There is no order store behind the demo, so review counts stand in for
/// units sold: revenue is price times review count summed over the catalog,
/// and the order count is the review total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub total_revenue: Price,
    pub total_orders: u64,
    pub total_products: usize,
}

impl DashboardMetrics {
    /// Computes the metrics over `catalog`.
    #[must_use]
    pub fn compute(catalog: &CatalogStore) -> Self {
        Self {
            total_revenue: catalog
                .iter()
                .map(|product| product.price.times(product.review_count))
                .sum(),
            total_orders: catalog
                .iter()
                .map(|product| u64::from(product.review_count))
                .sum(),
            total_products: catalog.len(),
        }
    }
}
