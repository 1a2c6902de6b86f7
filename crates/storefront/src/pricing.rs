//! Order pricing: shipping, tax, and grand total.
//!
//! Pricing is a pure function of the cart subtotal. Shipping is free above
//! the [`FREE_SHIPPING_OVER`] threshold and a flat [`FLAT_SHIPPING`] fee at
//! or below it; tax is 18% of the subtotal rounded to whole rupees. The cart
//! page derives a "spend this much more" nudge from the same threshold via
//! [`free_shipping_gap`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use riddhi_core::Price;

use crate::cart::Cart;

/// Subtotals strictly above this many rupees ship free.
pub const FREE_SHIPPING_OVER: u32 = 999;

/// Flat shipping fee in rupees when the order does not qualify.
pub const FLAT_SHIPPING: u32 = 99;

/// GST rate applied to the subtotal.
const TAX_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Priced breakdown of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Sum of line totals before shipping and tax.
    pub subtotal: Price,
    /// Shipping fee, zero when the free-shipping threshold is cleared.
    pub shipping: Price,
    /// 18% of the subtotal, rounded to whole rupees half away from zero.
    pub tax: Price,
    /// Amount payable: subtotal plus shipping plus tax.
    pub total: Price,
}

impl OrderSummary {
    /// Prices an order from its subtotal.
    #[must_use]
    pub fn quote(subtotal: Price) -> Self {
        let shipping = if subtotal.amount() > Decimal::from(FREE_SHIPPING_OVER) {
            Price::ZERO
        } else {
            Price::from_rupees(FLAT_SHIPPING)
        };
        let tax = Price::new(subtotal.amount() * TAX_RATE).round_rupees();
        let total = subtotal + shipping + tax;
        Self {
            subtotal,
            shipping,
            tax,
            total,
        }
    }

    /// Prices the current contents of a cart.
    #[must_use]
    pub fn for_cart(cart: &Cart) -> Self {
        Self::quote(cart.subtotal())
    }
}

/// How much more the shopper must spend to reach free shipping.
///
/// Zero once the subtotal is at or above the threshold; the cart page only
/// renders the nudge while the gap is positive.
#[must_use]
pub fn free_shipping_gap(subtotal: Price) -> Price {
    Price::from_rupees(FREE_SHIPPING_OVER).saturating_sub(subtotal)
}
