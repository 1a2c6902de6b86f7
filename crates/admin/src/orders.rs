//! Synthesized order history.
//!
//! No orders are recorded anywhere, so the order tables are fabricated from
//! the catalog: each product stands in for one order, numbered upward from
//! #ORD1000 and dated backward one day at a time from a fixed anchor.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use riddhi_core::{CatalogStore, Price};

/// Rows shown in the dashboard's recent orders table.
pub const RECENT_ORDERS: usize = 5;

/// Fulfilment badge on an order row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Handed to the customer. Every synthesized order starts here.
    #[default]
    Delivered,
    /// In transit.
    Shipped,
    /// Being packed.
    Processing,
    /// Not yet picked up by fulfilment.
    Pending,
}

impl OrderStatus {
    /// Every status, in the order the status select lists them.
    pub const ALL: [Self; 4] = [
        Self::Delivered,
        Self::Shipped,
        Self::Processing,
        Self::Pending,
    ];

    /// Wire identifier for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::Shipped => "shipped",
            Self::Processing => "processing",
            Self::Pending => "pending",
        }
    }

    /// Badge text shown in the order tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Delivered => "Delivered",
            Self::Shipped => "Shipped",
            Self::Processing => "Processing",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of an order table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRow {
    /// Order reference, e.g. `#ORD1000`.
    pub reference: String,
    /// Placeholder customer name, e.g. `Customer 1`.
    pub customer: String,
    /// Name of the product the order stands in for.
    pub product_name: String,
    /// Order amount: the product's price.
    pub amount: Price,
    /// Synthesized order date.
    pub placed_on: NaiveDate,
    /// Current fulfilment badge.
    pub status: OrderStatus,
}

/// Fabricates the full order table from the catalog, newest first.
#[must_use]
pub fn synthesize(catalog: &CatalogStore) -> Vec<OrderRow> {
    let anchor = NaiveDate::from_ymd_opt(2025, 11, 7).expect("valid calendar date");
    catalog
        .iter()
        .zip(0u64..)
        .map(|(product, index)| OrderRow {
            reference: format!("#ORD{}", 1000 + index),
            customer: format!("Customer {}", index + 1),
            product_name: product.name.clone(),
            amount: product.price,
            placed_on: anchor - Days::new(index),
            status: OrderStatus::Delivered,
        })
        .collect()
}

/// The dashboard's short table: the first [`RECENT_ORDERS`] rows.
#[must_use]
pub fn recent(catalog: &CatalogStore) -> Vec<OrderRow> {
    let mut rows = synthesize(catalog);
    rows.truncate(RECENT_ORDERS);
    rows
}
