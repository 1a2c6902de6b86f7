//! Admin panel integration: drafts, dashboard metrics, and the orders table.
//!
//! The panel owns only UI state; every test hands it the catalog it acts on,
//! the same way the session does.

#![allow(clippy::unwrap_used)]

use riddhi_admin::orders::{self, OrderStatus, RECENT_ORDERS};
use riddhi_admin::{AdminPanel, AdminTab, DashboardMetrics, DraftError, ProductDraft};
use riddhi_core::{CatalogStore, Category, Price, ProductId};

fn kanjivaram_draft() -> ProductDraft {
    ProductDraft {
        name: "Kanjivaram Silk Saree".to_owned(),
        category: Category::Silk,
        price: "11999".to_owned(),
        original_price: "14999".to_owned(),
        fabric: "Kanjivaram Silk".to_owned(),
        color: "Emerald".to_owned(),
        stock: "10".to_owned(),
        description: "Temple border weave with zari work".to_owned(),
    }
}

// =============================================================================
// Product drafts
// =============================================================================

#[test]
fn test_submitted_draft_joins_the_catalog() {
    let mut catalog = CatalogStore::seeded();
    let mut panel = AdminPanel::new();
    panel.select_tab(AdminTab::AddProduct);
    *panel.draft_mut() = kanjivaram_draft();

    let id = panel.submit_draft(&mut catalog).unwrap();

    assert_eq!(id, ProductId::new(7));
    assert_eq!(catalog.len(), 7);

    let product = catalog.get(id).unwrap();
    assert_eq!(product.name, "Kanjivaram Silk Saree");
    assert_eq!(product.category, Category::Silk);
    assert_eq!(product.price, Price::from_rupees(11_999));
    assert_eq!(product.original_price, Price::from_rupees(14_999));
    assert_eq!(product.stock, 10);

    // The panel jumps to the product list and clears the form.
    assert_eq!(panel.tab(), AdminTab::Products);
    assert_eq!(panel.draft().name, "");
}

#[test]
fn test_new_products_start_unreviewed() {
    let mut catalog = CatalogStore::seeded();
    let mut panel = AdminPanel::new();
    *panel.draft_mut() = kanjivaram_draft();

    let id = panel.submit_draft(&mut catalog).unwrap();
    let product = catalog.get(id).unwrap();

    assert_eq!(product.review_count, 0);
    assert!(!product.featured);
    assert!(product.primary_image().is_some());
}

#[test]
fn test_rejected_draft_changes_nothing() {
    let mut catalog = CatalogStore::seeded();
    let mut panel = AdminPanel::new();
    panel.select_tab(AdminTab::AddProduct);
    let mut draft = kanjivaram_draft();
    draft.price = "abc".to_owned();
    *panel.draft_mut() = draft;

    let err = panel.submit_draft(&mut catalog).unwrap_err();

    assert!(matches!(err, DraftError::InvalidPrice { field: "price", .. }));
    assert_eq!(catalog.len(), 6);
    // The typed values survive so the admin can correct them in place.
    assert_eq!(panel.tab(), AdminTab::AddProduct);
    assert_eq!(panel.draft().name, "Kanjivaram Silk Saree");
    assert_eq!(panel.draft().price, "abc");
}

#[test]
fn test_blank_name_is_reported_first() {
    let err = ProductDraft::default().parse().unwrap_err();
    assert!(matches!(err, DraftError::MissingField("name")));
}

#[test]
fn test_negative_price_is_rejected() {
    let mut draft = kanjivaram_draft();
    draft.original_price = "-1".to_owned();

    let err = draft.parse().unwrap_err();

    assert!(matches!(
        err,
        DraftError::NegativePrice {
            field: "original price",
            ..
        }
    ));
}

#[test]
fn test_appended_ids_stay_monotonic() {
    let mut catalog = CatalogStore::seeded();
    let mut panel = AdminPanel::new();

    *panel.draft_mut() = kanjivaram_draft();
    let first = panel.submit_draft(&mut catalog).unwrap();
    *panel.draft_mut() = kanjivaram_draft();
    let second = panel.submit_draft(&mut catalog).unwrap();

    assert_eq!(first, ProductId::new(7));
    assert_eq!(second, ProductId::new(8));
}

#[test]
fn test_tab_switch_keeps_the_draft() {
    let mut panel = AdminPanel::new();
    panel.draft_mut().name = "Half-typed".to_owned();

    panel.select_tab(AdminTab::Dashboard);
    panel.select_tab(AdminTab::AddProduct);

    assert_eq!(panel.draft().name, "Half-typed");
}

// =============================================================================
// Dashboard metrics
// =============================================================================

#[test]
fn test_metrics_match_the_seeded_catalog() {
    let metrics = DashboardMetrics::compute(&CatalogStore::seeded());

    assert_eq!(metrics.total_revenue, Price::from_rupees(5_200_180));
    assert_eq!(metrics.total_orders, 820);
    assert_eq!(metrics.total_products, 6);
}

#[test]
fn test_unreviewed_product_counts_only_toward_totals() {
    let mut catalog = CatalogStore::seeded();
    let mut panel = AdminPanel::new();
    *panel.draft_mut() = kanjivaram_draft();
    panel.submit_draft(&mut catalog).unwrap();

    let metrics = DashboardMetrics::compute(&catalog);

    // Zero reviews means zero attributed revenue and orders.
    assert_eq!(metrics.total_revenue, Price::from_rupees(5_200_180));
    assert_eq!(metrics.total_orders, 820);
    assert_eq!(metrics.total_products, 7);
}

// =============================================================================
// Orders table
// =============================================================================

#[test]
fn test_orders_walk_back_one_day_per_row() {
    let rows = orders::synthesize(&CatalogStore::seeded());

    assert_eq!(rows.len(), 6);

    let first = rows.first().unwrap();
    assert_eq!(first.reference, "#ORD1000");
    assert_eq!(first.customer, "Customer 1");
    assert_eq!(first.product_name, "Banarasi Silk Saree");
    assert_eq!(first.amount, Price::from_rupees(8_999));
    assert_eq!(first.placed_on.to_string(), "2025-11-07");
    assert_eq!(first.status, OrderStatus::Delivered);

    let last = rows.last().unwrap();
    assert_eq!(last.reference, "#ORD1005");
    assert_eq!(last.placed_on.to_string(), "2025-11-02");
}

#[test]
fn test_recent_orders_cap_the_table() {
    let rows = orders::recent(&CatalogStore::seeded());

    assert_eq!(rows.len(), RECENT_ORDERS);
    assert_eq!(rows.last().unwrap().reference, "#ORD1004");
}

#[test]
fn test_order_rows_serialize_for_the_dashboard() {
    let rows = orders::synthesize(&CatalogStore::seeded());
    let value = serde_json::to_value(rows.first().unwrap()).unwrap();

    assert_eq!(value["reference"], "#ORD1000");
    assert_eq!(value["amount"], "8999");
    assert_eq!(value["placed_on"], "2025-11-07");
    assert_eq!(value["status"], "delivered");
}
