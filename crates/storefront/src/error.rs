//! Unified storefront error handling.
//!
//! Module-level errors ([`AuthError`], [`CheckoutError`], [`ContactError`])
//! fold into a single `StorefrontError` so session methods and the shared
//! handle can return one `Result` type. Absent-target operations the system
//! silently accepts (removing a cart line that is not there, re-toggling a
//! wishlist entry) never surface here.

use thiserror::Error;

use riddhi_core::ProductId;

use crate::auth::AuthError;
use crate::checkout::CheckoutError;
use crate::contact::ContactError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Login or signup failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout validation or state machine error.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Contact form or newsletter signup rejected.
    #[error("contact error: {0}")]
    Contact(#[from] ContactError),

    /// Operation referenced a product absent from the catalog.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// Product has no units on hand.
    #[error("product {0} is out of stock")]
    OutOfStock(ProductId),

    /// The session lock was poisoned by a panicking writer.
    #[error("session lock poisoned")]
    LockPoisoned,
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
