//! End-to-end purchase flow against the seeded catalog.
//!
//! Exercises the shopper path a browser session takes: filter the catalog,
//! open a product, build a cart, price it, and walk the checkout through to
//! a placed order. Everything here runs on a bare [`Session`] with no
//! timers involved.

#![allow(clippy::unwrap_used)]

use riddhi_core::{Category, CategoryFilter, Price, ProductId};
use riddhi_integration_tests::filled_checkout_form;
use riddhi_storefront::browse::SortKey;
use riddhi_storefront::checkout::{CheckoutError, CheckoutStage};
use riddhi_storefront::pricing::{self, OrderSummary};
use riddhi_storefront::{Session, StorefrontError, View};

fn visible_ids(session: &Session) -> Vec<u32> {
    session
        .visible_products()
        .iter()
        .map(|product| product.id.as_u32())
        .collect()
}

// =============================================================================
// Browsing
// =============================================================================

#[test]
fn test_shop_category_lands_on_filtered_catalog() {
    let mut session = Session::seeded();

    session.shop_category(Category::Silk);

    assert_eq!(session.view(), View::Catalog);
    assert_eq!(
        session.filter().category,
        CategoryFilter::Only(Category::Silk)
    );
    assert_eq!(visible_ids(&session), vec![1, 6]);
}

#[test]
fn test_price_ascending_orders_the_whole_catalog() {
    let mut session = Session::seeded();
    session.navigate(View::Catalog);

    session.set_sort(SortKey::PriceAscending);

    assert_eq!(visible_ids(&session), vec![3, 6, 5, 4, 1, 2]);
}

#[test]
fn test_search_narrows_within_the_category() {
    let mut session = Session::seeded();
    session.shop_category(Category::Silk);

    session.set_query("chanderi");
    assert_eq!(visible_ids(&session), vec![6]);

    session.set_query("");
    assert_eq!(visible_ids(&session), vec![1, 6]);
}

#[test]
fn test_open_product_selects_it() {
    let mut session = Session::seeded();

    session.open_product(ProductId::new(4)).unwrap();

    assert_eq!(session.view(), View::ProductDetail);
    let product = session.selected_product().unwrap();
    assert_eq!(product.name, "Designer Georgette Saree");
}

// =============================================================================
// Cart
// =============================================================================

#[test]
fn test_repeat_adds_merge_into_one_line() {
    let mut session = Session::seeded();
    let banarasi = ProductId::new(1);

    assert_eq!(session.add_to_cart(banarasi, 2).unwrap(), 2);
    assert_eq!(session.add_to_cart(banarasi, 1).unwrap(), 1);

    assert_eq!(session.cart().len(), 1);
    let line = session.cart().line(banarasi).unwrap();
    assert_eq!(line.quantity, 3);
    assert_eq!(session.cart_item_count(), 3);
}

#[test]
fn test_add_clamps_to_available_stock() {
    let mut session = Session::seeded();
    let bridal = ProductId::new(2);

    // The bridal saree has eight units on hand.
    let added = session.add_to_cart(bridal, 20).unwrap();

    assert_eq!(added, 8);
    assert_eq!(session.cart().line(bridal).unwrap().quantity, 8);
}

#[test]
fn test_unknown_product_is_rejected() {
    let mut session = Session::seeded();
    let ghost = ProductId::new(99);

    let err = session.add_to_cart(ghost, 1).unwrap_err();

    assert!(matches!(err, StorefrontError::ProductNotFound(id) if id == ghost));
    assert!(session.cart().is_empty());
}

#[test]
fn test_quantity_zero_drops_the_line() {
    let mut session = Session::seeded();
    let cotton = ProductId::new(3);
    session.add_to_cart(cotton, 2).unwrap();

    session.set_cart_quantity(cotton, 0);

    assert!(session.cart().is_empty());
    assert!(session.cart().line(cotton).is_none());
}

#[test]
fn test_wishlist_toggle_is_an_involution() {
    let mut session = Session::seeded();
    let festive = ProductId::new(5);

    assert!(session.toggle_wishlist(festive).unwrap());
    assert_eq!(session.wishlist_count(), 1);

    assert!(!session.toggle_wishlist(festive).unwrap());
    assert_eq!(session.wishlist_count(), 0);
}

// =============================================================================
// Pricing
// =============================================================================

#[test]
fn test_summary_over_the_free_shipping_bar() {
    let mut session = Session::seeded();
    session.add_to_cart(ProductId::new(1), 2).unwrap();

    let summary = session.order_summary();

    assert_eq!(summary.subtotal, Price::from_rupees(17_998));
    assert_eq!(summary.shipping, Price::ZERO);
    assert_eq!(summary.tax, Price::from_rupees(3_240));
    assert_eq!(summary.total, Price::from_rupees(21_238));
}

#[test]
fn test_flat_shipping_under_the_bar() {
    let summary = OrderSummary::quote(Price::from_rupees(500));

    assert_eq!(summary.shipping, Price::from_rupees(99));
    assert_eq!(summary.tax, Price::from_rupees(90));
    assert_eq!(summary.total, Price::from_rupees(689));
}

#[test]
fn test_shipping_is_charged_at_exactly_the_bar() {
    // Free shipping starts strictly above 999 rupees.
    let summary = OrderSummary::quote(Price::from_rupees(999));

    assert_eq!(summary.shipping, Price::from_rupees(99));
    assert_eq!(summary.total, Price::from_rupees(1_278));
}

#[test]
fn test_free_shipping_gap_counts_down() {
    let gap = pricing::free_shipping_gap(Price::from_rupees(500));
    assert_eq!(gap, Price::from_rupees(499));

    let none = pricing::free_shipping_gap(Price::from_rupees(2_000));
    assert_eq!(none, Price::ZERO);
}

// =============================================================================
// Checkout
// =============================================================================

#[test]
fn test_checkout_requires_items() {
    let mut session = Session::seeded();

    let err = session.begin_checkout().unwrap_err();

    assert!(matches!(
        err,
        StorefrontError::Checkout(CheckoutError::EmptyCart)
    ));
    assert_eq!(session.view(), View::Home);
    assert!(session.checkout().is_none());
}

#[test]
fn test_full_purchase_reaches_placed() {
    let mut session = Session::seeded();
    session.add_to_cart(ProductId::new(6), 1).unwrap();

    session.begin_checkout().unwrap();
    assert_eq!(session.view(), View::Checkout);
    assert_eq!(session.checkout().unwrap().stage(), CheckoutStage::Editing);

    *session.checkout_mut().unwrap().form_mut() = filled_checkout_form();
    session.place_order().unwrap();

    let checkout = session.checkout().unwrap();
    assert!(checkout.is_placed());
    // The confirmation shows on the checkout view; the cart is untouched.
    assert_eq!(session.view(), View::Checkout);
    assert_eq!(session.cart_item_count(), 1);
}

#[test]
fn test_blank_field_blocks_submission() {
    let mut session = Session::seeded();
    session.add_to_cart(ProductId::new(6), 1).unwrap();
    session.begin_checkout().unwrap();

    let mut form = filled_checkout_form();
    form.phone = String::new();
    *session.checkout_mut().unwrap().form_mut() = form;

    let err = session.place_order().unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Checkout(CheckoutError::MissingField("phone"))
    ));
    assert_eq!(session.checkout().unwrap().stage(), CheckoutStage::Editing);

    session.checkout_mut().unwrap().form_mut().phone = "9876543210".to_owned();
    session.place_order().unwrap();
    assert!(session.checkout().unwrap().is_placed());
}

#[test]
fn test_placed_order_cannot_be_placed_again() {
    let mut session = Session::seeded();
    session.add_to_cart(ProductId::new(6), 1).unwrap();
    session.begin_checkout().unwrap();
    *session.checkout_mut().unwrap().form_mut() = filled_checkout_form();
    session.place_order().unwrap();

    let err = session.place_order().unwrap_err();

    assert!(matches!(
        err,
        StorefrontError::Checkout(CheckoutError::InvalidTransition(CheckoutStage::Placed))
    ));
}

#[test]
fn test_leaving_checkout_abandons_the_order() {
    let mut session = Session::seeded();
    session.add_to_cart(ProductId::new(6), 1).unwrap();
    session.begin_checkout().unwrap();
    session.checkout_mut().unwrap().form_mut().name = "Asha".to_owned();

    session.navigate(View::Cart);
    assert!(session.checkout().is_none());

    // Coming back starts over with a blank form.
    session.begin_checkout().unwrap();
    let checkout = session.checkout().unwrap();
    assert_eq!(checkout.stage(), CheckoutStage::Editing);
    assert_eq!(checkout.form().name, "");
}

#[test]
fn test_order_outside_checkout_is_rejected() {
    let mut session = Session::seeded();
    session.add_to_cart(ProductId::new(6), 1).unwrap();

    let err = session.place_order().unwrap_err();

    assert!(matches!(
        err,
        StorefrontError::Checkout(CheckoutError::NotActive)
    ));
}
