//! Integration tests for Riddhi Collection.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p riddhi-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `purchase_flow` - browsing, cart, pricing, and checkout against the
//!   seeded catalog
//! - `admin_catalog` - product drafts, dashboard metrics, and the orders
//!   table
//! - `session_journey` - whole-session walkthroughs with live view timers
//!
//! The crate root holds the fixtures the suites share.

use riddhi_storefront::checkout::CheckoutForm;
use riddhi_storefront::contact::ContactForm;

/// A checkout form with every required field filled in.
#[must_use]
pub fn filled_checkout_form() -> CheckoutForm {
    CheckoutForm {
        name: "Asha Rao".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "9876543210".to_owned(),
        address: "12 MG Road".to_owned(),
        city: "Bengaluru".to_owned(),
        state: "Karnataka".to_owned(),
        pincode: "560001".to_owned(),
        ..CheckoutForm::default()
    }
}

/// A contact form ready to submit.
#[must_use]
pub fn filled_contact_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.name = "Asha Rao".to_owned();
    form.email = "asha@example.com".to_owned();
    form.subject = "Blouse stitching".to_owned();
    form.message = "Do you stitch blouses for the Banarasi range?".to_owned();
    form
}
