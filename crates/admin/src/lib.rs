//! Riddhi Collection admin library.
//!
//! State for the built-in admin panel: the tabbed panel with its validated
//! product draft, the dashboard metrics, and the synthesized order history.
//! The panel carries no catalog of its own; its operations take the
//! [`riddhi_core::CatalogStore`] they act on, so the panel can sit beside a
//! storefront session and edit the very store the shop reads.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod draft;
pub mod metrics;
pub mod orders;
pub mod panel;

pub use draft::{DraftError, ProductDraft};
pub use metrics::DashboardMetrics;
pub use orders::{OrderRow, OrderStatus};
pub use panel::{AdminPanel, AdminTab};
