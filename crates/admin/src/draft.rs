//! Product draft validation.
//!
//! The add-product form holds raw text until submission; [`ProductDraft::parse`]
//! is the single gate between that text and the catalog. Nothing invalid can
//! reach a [`NewProduct`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use riddhi_core::{Category, NewProduct, Price};

/// Image applied to new products; the form has no upload field.
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1610030469983-98e550d6193c?w=800";

/// Rating assigned to products that have not been reviewed yet.
const STARTING_RATING: f64 = 4.5;

/// Errors raised while turning a draft into a product.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    /// A required field was blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A price field did not parse as a decimal amount.
    #[error("{field} is not a price: {value:?}")]
    InvalidPrice {
        field: &'static str,
        value: String,
    },

    /// A price field parsed but came out negative.
    #[error("{field} cannot be negative: {value}")]
    NegativePrice {
        field: &'static str,
        value: Decimal,
    },

    /// The stock field did not parse as a whole number.
    #[error("stock is not a whole number: {0:?}")]
    InvalidStock(String),
}

/// The add-product form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: Category,
    pub price: String,
    pub original_price: String,
    pub fabric: String,
    pub color: String,
    pub stock: String,
    pub description: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: Category::Silk,
            price: String::new(),
            original_price: String::new(),
            fabric: String::new(),
            color: String::new(),
            stock: String::new(),
            description: String::new(),
        }
    }
}

impl ProductDraft {
    /// An empty draft. The category select starts on silk.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the draft and builds the product it describes.
    ///
    /// Text fields must be non-blank, prices must parse as non-negative
    /// decimals, and stock must parse as a whole number; the first failure
    /// in form order is reported. New products start with the placeholder
    /// image, a [`STARTING_RATING`] rating, no reviews, and no featured
    /// placement.
    ///
    /// # Errors
    ///
    /// Returns a [`DraftError`] naming the offending field.
    pub fn parse(&self) -> Result<NewProduct, DraftError> {
        let name = required("name", &self.name)?;
        let price = parse_price("price", &self.price)?;
        let original_price = parse_price("original price", &self.original_price)?;
        let fabric = required("fabric", &self.fabric)?;
        let color = required("color", &self.color)?;
        let stock = required("stock", &self.stock)?
            .parse::<u32>()
            .map_err(|_| DraftError::InvalidStock(self.stock.trim().to_string()))?;
        let description = required("description", &self.description)?;

        Ok(NewProduct {
            name: name.to_string(),
            category: self.category,
            price,
            original_price,
            description: description.to_string(),
            fabric: fabric.to_string(),
            color: color.to_string(),
            stock,
            rating: STARTING_RATING,
            review_count: 0,
            images: vec![DEFAULT_IMAGE.to_string()],
            featured: false,
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DraftError::MissingField(field));
    }
    Ok(trimmed)
}

fn parse_price(field: &'static str, value: &str) -> Result<Price, DraftError> {
    let text = required(field, value)?;
    let amount: Decimal = text.parse().map_err(|_| DraftError::InvalidPrice {
        field,
        value: text.to_string(),
    })?;
    if amount.is_sign_negative() {
        return Err(DraftError::NegativePrice {
            field,
            value: amount,
        });
    }
    Ok(Price::new(amount))
}
