//! The shopping cart.
//!
//! A cart is an immutable value: every mutation returns a new `Cart` and the
//! session swaps it in. That keeps readers (badge counts, the order summary)
//! consistent without any locking discipline inside the engine itself.

use riddhi_core::{Price, Product, ProductId};
use serde::{Deserialize, Serialize};

/// One product's line in the cart.
///
/// Everything except `quantity` is a snapshot taken when the product was
/// first added. A later catalog change never reaches into existing carts -
/// the shopper keeps the price they saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub fabric: String,
    pub color: String,
    /// Primary image at add time, if the product had one.
    pub image: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            fabric: product.fabric.clone(),
            color: product.color.clone(),
            image: product.primary_image().map(str::to_owned),
            quantity,
        }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// An ordered sequence of cart lines, at most one per product.
///
/// Line order is insertion order; it only matters for display. Totals are
/// derived on every read, never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` units of a product.
    ///
    /// Merge semantics: if a line for the product already exists its
    /// quantity grows by `quantity`, otherwise a new line is appended with a
    /// fresh snapshot. Adding zero units returns the cart unchanged rather
    /// than creating an empty line.
    ///
    /// There is no stock check here; callers clamp first (see
    /// [`purchasable_quantity`]).
    #[must_use]
    pub fn with_added(&self, product: &Product, quantity: u32) -> Self {
        if quantity == 0 {
            return self.clone();
        }

        let mut lines = self.lines.clone();
        if let Some(line) = lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            lines.push(CartLine::snapshot(product, quantity));
        }
        Self { lines }
    }

    /// Remove a product's line. Removing an absent line is silently
    /// accepted and returns an identical cart.
    #[must_use]
    pub fn without(&self, id: ProductId) -> Self {
        let lines = self
            .lines
            .iter()
            .filter(|line| line.product_id != id)
            .cloned()
            .collect();
        Self { lines }
    }

    /// Replace a line's quantity.
    ///
    /// Zero removes the line - a line never survives at quantity zero.
    /// Updating a product with no line is a no-op, mirroring the remove
    /// semantics.
    #[must_use]
    pub fn with_quantity(&self, id: ProductId, quantity: u32) -> Self {
        if quantity == 0 {
            return self.without(id);
        }

        let mut lines = self.lines.clone();
        if let Some(line) = lines.iter_mut().find(|l| l.product_id == id) {
            line.quantity = quantity;
        }
        Self { lines }
    }

    /// Sum of price times quantity across all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total units across all lines, for the header badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// The line for a product, if one exists.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == id)
    }

    /// All lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Quantity the storefront will actually order for a product.
///
/// The detail view clamps its quantity picker to `[1, stock]` and disables
/// adding when nothing is on hand; this is that rule for callers without a
/// rendered picker. `None` means the product cannot be ordered at all.
#[must_use]
pub fn purchasable_quantity(product: &Product, desired: u32) -> Option<u32> {
    if product.stock == 0 {
        return None;
    }
    Some(desired.clamp(1, product.stock))
}
