//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! # List silk sarees, cheapest first
//! riddhi catalog list --category silk --sort price-ascending
//!
//! # Search names and descriptions
//! riddhi catalog list -q cotton
//!
//! # Show one product
//! riddhi catalog show 3
//! ```

use thiserror::Error;

use riddhi_core::{CatalogStore, CategoryFilter, Product, ProductId};
use riddhi_storefront::browse::{self, FilterState, SortKey};

/// Errors that can occur while browsing the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The category flag did not name a category.
    #[error(
        "invalid category: {0}. Valid categories: all, bridal, silk, casual, designer, festive"
    )]
    InvalidCategory(String),

    /// The sort flag did not name a sort key.
    #[error(
        "invalid sort: {0}. Valid sorts: featured, price-ascending, price-descending, \
         rating-descending"
    )]
    InvalidSort(String),

    /// No product has the requested id.
    #[error("no product with id {0}")]
    UnknownProduct(u32),

    /// The listing could not be rendered as JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// List catalog products through the same pipeline the storefront uses.
///
/// # Arguments
///
/// * `category` - Category filter (`all` or a category name)
/// * `sort` - Sort key
/// * `search` - Optional substring matched against names and descriptions
/// * `json` - Print raw JSON instead of a table
///
/// # Errors
///
/// Returns a [`CatalogError`] for unknown category or sort names.
pub fn list(
    category: &str,
    sort: &str,
    search: Option<&str>,
    json: bool,
) -> Result<(), CatalogError> {
    let filter = FilterState {
        category: category
            .parse::<CategoryFilter>()
            .map_err(|_| CatalogError::InvalidCategory(category.to_owned()))?,
        sort: sort
            .parse::<SortKey>()
            .map_err(|_| CatalogError::InvalidSort(sort.to_owned()))?,
    };

    let catalog = CatalogStore::seeded();
    let products = browse::visible_products(&catalog, filter, search.unwrap_or(""));

    tracing::info!(
        total = catalog.len(),
        shown = products.len(),
        "Catalog listing"
    );

    if json {
        print_json(&products)?;
    } else {
        print_table(&products);
    }
    Ok(())
}

/// Show a single product in full.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownProduct`] when `id` is not in the catalog.
pub fn show(id: u32) -> Result<(), CatalogError> {
    let catalog = CatalogStore::seeded();
    let product = catalog
        .get(ProductId::new(id))
        .ok_or(CatalogError::UnknownProduct(id))?;
    print_product(product);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_json(products: &[&Product]) -> Result<(), CatalogError> {
    println!("{}", serde_json::to_string_pretty(products)?);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_table(products: &[&Product]) {
    println!(
        "{:>4}  {:<28} {:<10} {:>10} {:>6} {:>7}",
        "ID", "NAME", "CATEGORY", "PRICE", "STOCK", "RATING"
    );
    for product in products {
        println!(
            "{:>4}  {:<28} {:<10} {:>10} {:>6} {:>7.1}",
            product.id, product.name, product.category, product.price, product.stock,
            product.rating
        );
    }
}

#[allow(clippy::print_stdout)]
fn print_product(product: &Product) {
    println!("{} (#{})", product.name, product.id);
    println!(
        "  Category: {} {}",
        product.category.icon(),
        product.category.label()
    );
    println!("  Price:    {}", product.price);
    if let Some(percent) = product.discount_percent() {
        println!("  Was:      {} ({percent}% off)", product.original_price);
    }
    println!("  Fabric:   {}", product.fabric);
    println!("  Color:    {}", product.color);
    println!("  Stock:    {}", product.stock);
    println!(
        "  Rating:   {} ({} reviews)",
        product.rating, product.review_count
    );
    println!("  {}", product.description);
}
