//! Scripted store tour.
//!
//! Drives a live session through the whole shopper journey: browse, open a
//! product, build up the cart, check out, watch the confirmation send the
//! session home on its own, then sign in as the store admin and extend the
//! catalog through the panel.
//!
//! # Usage
//!
//! ```bash
//! riddhi tour
//! ```

use std::time::Duration;

use tracing::info;

use riddhi_admin::{AdminPanel, DashboardMetrics, ProductDraft};
use riddhi_core::{Category, ProductId};
use riddhi_storefront::SessionHandle;
use riddhi_storefront::auth::{ADMIN_EMAIL, ADMIN_PASSWORD, Credentials};
use riddhi_storefront::browse::SortKey;
use riddhi_storefront::checkout::PaymentMethod;

/// Walk the scripted journey.
///
/// Takes a little over three seconds of real time: the order confirmation
/// is deliberately left to expire rather than navigated away from.
///
/// # Errors
///
/// Returns an error if any step of the journey is rejected; with the seeded
/// catalog every step should succeed.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let handle = SessionHandle::seeded();

    info!("Browsing silk sarees, cheapest first");
    handle.shop_category(Category::Silk)?;
    handle.set_sort(SortKey::PriceAscending)?;
    handle.with(|session| {
        for product in session.visible_products() {
            info!(id = %product.id, price = %product.price, "  {}", product.name);
        }
    })?;

    info!("Opening the Banarasi and adding it twice");
    let banarasi = ProductId::new(1);
    handle.open_product(banarasi)?;
    handle.add_to_cart(banarasi, 2)?;
    handle.add_to_cart(banarasi, 1)?;
    handle.with(|session| {
        let line = session.cart().line(banarasi).map(|line| line.quantity);
        info!(lines = session.cart().len(), quantity = ?line, "Additions merged");
    })?;

    info!("Saving the bridal saree for later");
    handle.toggle_wishlist(ProductId::new(2))?;

    handle.with(|session| {
        let summary = session.order_summary();
        info!(
            items = session.cart_item_count(),
            subtotal = %summary.subtotal,
            shipping = %summary.shipping,
            tax = %summary.tax,
            total = %summary.total,
            "Cart priced"
        );
    })?;

    info!("Checking out");
    handle.begin_checkout()?;
    handle.update(|session| {
        if let Some(checkout) = session.checkout_mut() {
            let form = checkout.form_mut();
            form.name = "Asha Rao".to_string();
            form.email = "asha@example.com".to_string();
            form.phone = "9876543210".to_string();
            form.address = "12 MG Road".to_string();
            form.city = "Bengaluru".to_string();
            form.state = "Karnataka".to_string();
            form.pincode = "560001".to_string();
            form.payment = PaymentMethod::Upi;
        }
    })?;
    handle.place_order()?;
    info!("Order placed; waiting out the confirmation");

    tokio::time::sleep(Duration::from_millis(3_200)).await;
    let (view, items) = handle.with(|session| (session.view(), session.cart_item_count()))?;
    info!(%view, cart_items = items, "Confirmation elapsed, back home with the cart intact");

    info!("Signing in as the store admin");
    let destination = handle.login(&Credentials::login(ADMIN_EMAIL, ADMIN_PASSWORD))?;
    info!(%destination, "Signed in");

    handle.with(|session| {
        let metrics = DashboardMetrics::compute(session.catalog());
        info!(
            revenue = %metrics.total_revenue,
            orders = metrics.total_orders,
            products = metrics.total_products,
            "Dashboard"
        );
    })?;

    info!("Adding a product through the admin draft");
    let mut panel = AdminPanel::new();
    *panel.draft_mut() = ProductDraft {
        name: "Kanjivaram Silk Saree".to_string(),
        category: Category::Silk,
        price: "11999".to_string(),
        original_price: "14999".to_string(),
        fabric: "Kanjivaram Silk".to_string(),
        color: "Emerald".to_string(),
        stock: "10".to_string(),
        description: "Temple border weave with zari work".to_string(),
    };
    let id = handle.update(|session| panel.submit_draft(session.catalog_mut()))??;
    info!(product = %id, tab = %panel.tab(), "Draft accepted");

    let total = handle.with(|session| session.catalog().len())?;
    info!(products = total, "Catalog after the addition");

    let silk_count = handle.with(|session| session.visible_products().len())?;
    info!(silk = silk_count, "Still browsing silk, the new saree shows up");

    Ok(())
}
