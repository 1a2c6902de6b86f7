//! Type-safe product identifier.
//!
//! A newtype instead of a bare integer prevents mixing product ids with
//! quantities or other numeric values at compile time.

use serde::{Deserialize, Serialize};

/// Unique identifier for a product in the catalog.
///
/// Ids are assigned by the catalog store from a monotonic counter and are
/// never reused, so a `ProductId` stays valid for the whole session even
/// across admin catalog appends.
///
/// # Example
///
/// ```
/// use riddhi_core::ProductId;
///
/// let id = ProductId::new(3);
/// assert_eq!(id.as_u32(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create a new `ProductId` from a raw integer.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying integer value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ProductId> for u32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
