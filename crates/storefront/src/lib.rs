//! Riddhi Collection Storefront library.
//!
//! The shopper-facing state core: catalog browsing, cart, wishlist, order
//! pricing, checkout, and the session that owns them all. There is no
//! rendering here - a shell (the CLI demo, a future web frontend) drives the
//! session and draws whatever it reads back.
//!
//! # Architecture
//!
//! [`session::Session`] is a plain synchronous value; every state transition
//! is a method taking `&mut self` and runs to completion. The async world
//! only enters through [`handle::SessionHandle`], which wraps a session in
//! `Arc<RwLock<...>>` and schedules the storefront's few timed transitions
//! (carousel rotation, confirmation auto-resets) as cancellable view timers.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod browse;
pub mod cart;
pub mod checkout;
pub mod contact;
pub mod error;
pub mod handle;
pub mod home;
pub mod pricing;
pub mod session;
pub mod timers;
pub mod wishlist;

pub use error::{Result, StorefrontError};
pub use handle::SessionHandle;
pub use session::{Session, View};
