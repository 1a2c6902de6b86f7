//! Wishlist membership set.
//!
//! A wishlist is a set of product ids with a single mutation: [`Wishlist::toggle`]
//! flips membership, so applying it twice restores the prior state. Only ids are
//! stored; display data is read from the catalog at render time.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use riddhi_core::ProductId;

/// Set of products the shopper has saved for later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    ids: BTreeSet<ProductId>,
}

impl Wishlist {
    /// Creates an empty wishlist.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// Flips membership for `id` and returns whether it is now present.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Returns `true` if `id` is in the wishlist.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of saved products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over saved ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Wishlist {
    type Item = &'a ProductId;
    type IntoIter = std::collections::btree_set::Iter<'a, ProductId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
