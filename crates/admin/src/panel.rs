//! The tabbed admin panel.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use riddhi_core::{CatalogStore, ProductId};

use crate::draft::{DraftError, ProductDraft};

/// Tabs across the top of the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AdminTab {
    /// Stat cards and the recent orders table.
    #[default]
    Dashboard,
    /// Full catalog listing.
    Products,
    /// The new-product form.
    AddProduct,
    /// Full synthesized order table.
    Orders,
}

impl AdminTab {
    /// Wire identifier for the tab.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Products => "products",
            Self::AddProduct => "add-product",
            Self::Orders => "orders",
        }
    }
}

impl fmt::Display for AdminTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Admin panel state: the active tab plus the draft being composed.
///
/// The dashboard and order tables are derived straight from the catalog by
/// [`crate::metrics`] and [`crate::orders`]; the panel itself only holds
/// what the admin is doing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminPanel {
    tab: AdminTab,
    draft: ProductDraft,
}

impl AdminPanel {
    /// A panel opened on the dashboard with an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active tab.
    #[must_use]
    pub const fn tab(&self) -> AdminTab {
        self.tab
    }

    /// Switches tabs. The draft survives tab changes.
    pub fn select_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
    }

    /// The draft being composed on the add-product tab.
    #[must_use]
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Mutable draft access for filling fields.
    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    /// Validates the draft and appends it to `catalog`.
    ///
    /// On success the draft resets and the panel switches to the products
    /// tab, where the new entry is visible. On failure the catalog is
    /// untouched and the draft stays as typed.
    ///
    /// # Errors
    ///
    /// Returns a [`DraftError`] naming the first invalid field.
    #[instrument(skip_all)]
    pub fn submit_draft(&mut self, catalog: &mut CatalogStore) -> Result<ProductId, DraftError> {
        let new = self.draft.parse()?;
        let id = catalog.append(new);
        info!(product = %id, "product added to catalog");
        self.draft = ProductDraft::default();
        self.tab = AdminTab::Products;
        Ok(id)
    }
}
