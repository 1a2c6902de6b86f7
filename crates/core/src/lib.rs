//! Riddhi Collection Core - Shared domain library.
//!
//! This crate provides the common types used across all Riddhi Collection
//! components:
//! - `storefront` - Shopper-facing session: browsing, cart, wishlist, checkout
//! - `admin` - Catalog administration and dashboard metrics
//! - `cli` - Command-line catalog tools and the demo walkthrough
//!
//! # Architecture
//!
//! The core crate contains only types and in-memory state - no I/O, no
//! network, no rendering. The catalog store lives here because both the
//! storefront and the admin panel operate on the same product records.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, emails, and categories
//! - [`product`] - The product record and its derived display values
//! - [`catalog`] - The append-only catalog store and the sample seed data

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod product;
pub mod types;

pub use catalog::{CatalogStore, NewProduct};
pub use product::Product;
pub use types::*;
