//! Append-only catalog store.
//!
//! The catalog is the authoritative set of products available for browsing.
//! It starts from a fixed seed and only ever grows: the admin panel appends
//! new products, nothing edits or deletes existing ones. Product ids come
//! from a monotonic counter owned by the store, so an id handed out once is
//! never reissued within a session.

pub mod seed;

use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::types::{Category, Price, ProductId};

/// A validated product waiting for an id.
///
/// Produced by the admin draft parser; [`CatalogStore::append`] turns it
/// into a [`Product`] by assigning the next id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: Category,
    pub price: Price,
    pub original_price: Price,
    pub description: String,
    pub fabric: String,
    pub color: String,
    pub stock: u32,
    pub rating: f64,
    pub review_count: u32,
    pub images: Vec<String>,
    pub featured: bool,
}

/// In-memory product catalog.
///
/// Iteration order is catalog order: the seed products first, then appended
/// products in the order they were added. The browse pipeline's "featured"
/// sort relies on this order being stable.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    next_id: u32,
}

impl CatalogStore {
    /// Create an empty catalog. Ids start at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a catalog from an existing product list.
    ///
    /// The id counter resumes past the highest id present. Ids in the list
    /// are expected to be unique; the store does not deduplicate.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        let next_id = products
            .iter()
            .map(|product| product.id.as_u32())
            .max()
            .unwrap_or(0)
            + 1;
        Self { products, next_id }
    }

    /// Create a catalog seeded with the sample collection.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_products(seed::sample_products())
    }

    /// Append a new product, assigning it the next id.
    ///
    /// This is the only mutation the catalog supports.
    pub fn append(&mut self, new: NewProduct) -> ProductId {
        let id = ProductId::new(self.next_id);
        self.next_id += 1;

        self.products.push(Product {
            id,
            name: new.name,
            category: new.category,
            price: new.price,
            original_price: new.original_price,
            description: new.description,
            fabric: new.fabric,
            color: new.color,
            stock: new.stock,
            rating: new.rating,
            review_count: new.review_count,
            images: new.images,
            featured: new.featured,
        });

        id
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over all products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Products flagged for the home-page featured strip, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|product| product.featured)
    }

    /// Products in a category, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| product.category == category)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a CatalogStore {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
