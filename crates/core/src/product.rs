//! The product record.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::{Category, Price, ProductId};

/// A saree in the catalog.
///
/// Products are immutable once created: the catalog store only ever appends,
/// and cart lines snapshot the fields they need at add time. `rating`,
/// `review_count`, and `stock` are display metadata - nothing in the system
/// updates them or enforces stock limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Merchandising category.
    pub category: Category,
    /// Current selling price.
    pub price: Price,
    /// Strike-through price. Expected to be >= `price`, not enforced.
    pub original_price: Price,
    /// Long-form description shown on the detail view and searched by the
    /// browse pipeline.
    pub description: String,
    /// Fabric line ("Pure Silk", "Georgette", ...).
    pub fabric: String,
    /// Primary color.
    pub color: String,
    /// Units on hand. Advisory only; never decremented.
    pub stock: u32,
    /// Average review rating on a 0-5 scale.
    pub rating: f64,
    /// Number of reviews. Doubles as the "units sold" proxy in the admin
    /// dashboard metrics.
    pub review_count: u32,
    /// Image URIs, in display order. Never empty for catalog products.
    pub images: Vec<String>,
    /// Whether the product appears in the home-page featured strip.
    pub featured: bool,
}

impl Product {
    /// Discount against the strike-through price, in whole percent,
    /// rounded half away from zero.
    ///
    /// `None` when there is no real discount (original price missing the
    /// expected margin, or zero).
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let price = self.price.amount();
        let original = self.original_price.amount();
        if original <= price || original.is_zero() {
            return None;
        }

        let percent = (Decimal::ONE - price / original) * Decimal::ONE_HUNDRED;
        percent
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
    }

    /// Whether any units are on hand.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Number of filled stars for the rating row: `floor(rating)`,
    /// clamped to the 0-5 scale.
    #[must_use]
    pub fn filled_stars(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.rating.clamp(0.0, 5.0).floor() as u32
        }
    }

    /// The first image, used wherever only one is shown (cards, cart lines).
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
