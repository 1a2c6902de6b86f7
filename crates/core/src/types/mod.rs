//! Core types for Riddhi Collection.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod price;

pub use category::{Category, CategoryFilter};
pub use email::{Email, EmailError};
pub use id::ProductId;
pub use price::Price;
