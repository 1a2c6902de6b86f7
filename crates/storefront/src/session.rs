//! The shopper session root.
//!
//! [`Session`] owns everything a single browser tab would hold: the catalog,
//! cart, wishlist, filter and search state, the signed-in identity, the
//! current view, and the per-view state that dies with its view (selected
//! product, checkout in progress, carousel position, contact form).
//!
//! Views mirror page mounting: entering a view resets its local state and
//! leaving it discards what only existed there. Every real view change bumps
//! the session epoch, which deferred callbacks check so that work scheduled
//! against a torn-down view never lands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use riddhi_core::{CatalogStore, Category, CategoryFilter, Product, ProductId};

use crate::auth::{Authenticator, Credentials, DemoAuthenticator, Identity};
use crate::browse::{self, FilterState, SortKey};
use crate::cart::{self, Cart};
use crate::checkout::{Checkout, CheckoutError};
use crate::contact::{ContactForm, NewsletterSignup};
use crate::error::{Result, StorefrontError};
use crate::home::Carousel;
use crate::pricing::OrderSummary;
use crate::wishlist::Wishlist;

// ============================================================================
// Views
// ============================================================================

/// The pages of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Landing page with the hero carousel and featured products.
    #[default]
    Home,
    /// Filterable, sortable product grid.
    Catalog,
    /// Single product with gallery and quantity stepper.
    ProductDetail,
    /// Cart lines and the order summary.
    Cart,
    /// Shipping form and order placement.
    Checkout,
    /// Login and signup forms.
    Login,
    /// Admin panel.
    Admin,
    /// Static brand story page.
    About,
    /// Contact form page.
    Contact,
}

impl View {
    /// Wire identifier for the view.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Catalog => "catalog",
            Self::ProductDetail => "product-detail",
            Self::Cart => "cart",
            Self::Checkout => "checkout",
            Self::Login => "login",
            Self::Admin => "admin",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "catalog" => Ok(Self::Catalog),
            "product-detail" => Ok(Self::ProductDetail),
            "cart" => Ok(Self::Cart),
            "checkout" => Ok(Self::Checkout),
            "login" => Ok(Self::Login),
            "admin" => Ok(Self::Admin),
            "about" => Ok(Self::About),
            "contact" => Ok(Self::Contact),
            _ => Err(format!("invalid view: {s}")),
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// All state belonging to one shopper session.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    catalog: CatalogStore,
    cart: Cart,
    wishlist: Wishlist,
    filter: FilterState,
    query: String,
    identity: Option<Identity>,
    view: View,
    selected: Option<ProductId>,
    checkout: Option<Checkout>,
    carousel: Carousel,
    contact: ContactForm,
    newsletter: NewsletterSignup,
    epoch: u64,
    authenticator: DemoAuthenticator,
}

impl Session {
    /// A fresh session on the home view over the given catalog.
    #[must_use]
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            id: Uuid::new_v4(),
            catalog,
            cart: Cart::new(),
            wishlist: Wishlist::new(),
            filter: FilterState::default(),
            query: String::new(),
            identity: None,
            view: View::Home,
            selected: None,
            checkout: None,
            carousel: Carousel::over_banners(),
            contact: ContactForm::new(),
            newsletter: NewsletterSignup::new(),
            epoch: 0,
            authenticator: DemoAuthenticator,
        }
    }

    /// A fresh session over the built-in sample catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(CatalogStore::seeded())
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Switches to `view`.
    ///
    /// Navigating to the current view is a no-op. A real change bumps the
    /// epoch, discards the state local to the view being left, and resets
    /// the state local to the view being entered.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn navigate(&mut self, view: View) {
        if view == self.view {
            return;
        }
        let from = self.view;
        if from == View::Checkout {
            self.checkout = None;
        }
        self.view = view;
        self.epoch += 1;
        match view {
            View::Home => self.carousel.reset(),
            View::Contact => self.contact.reset(),
            View::Checkout => self.checkout = Some(Checkout::new()),
            _ => {}
        }
        debug!(from = %from, epoch = self.epoch, "view changed");
    }

    /// Current view.
    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// Monotonic count of view changes, checked by deferred callbacks.
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    // ------------------------------------------------------------------
    // Browsing
    // ------------------------------------------------------------------

    /// Narrows the catalog to one category or back to all.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    /// Changes the sort order.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.filter.sort = sort;
    }

    /// Replaces the header search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Jumps to the catalog narrowed to `category`, as the home tiles do.
    pub fn shop_category(&mut self, category: Category) {
        self.filter = FilterState::for_category(CategoryFilter::Only(category));
        self.navigate(View::Catalog);
    }

    /// The catalog as narrowed by the current filter and search text.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        browse::visible_products(&self.catalog, self.filter, &self.query)
    }

    /// Opens the detail view for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::ProductNotFound`] when `id` is not in the
    /// catalog; the current view is left unchanged.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn open_product(&mut self, id: ProductId) -> Result<()> {
        if self.catalog.get(id).is_none() {
            return Err(StorefrontError::ProductNotFound(id));
        }
        self.selected = Some(id);
        self.navigate(View::ProductDetail);
        Ok(())
    }

    /// The product the detail view is showing.
    ///
    /// `None` renders the detail view's empty state; a selection can also go
    /// stale if the product is removed from the catalog behind it.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.and_then(|id| self.catalog.get(id))
    }

    // ------------------------------------------------------------------
    // Cart and wishlist
    // ------------------------------------------------------------------

    /// Adds `desired` units of a product to the cart.
    ///
    /// The quantity is clamped to the product's stock and merged into any
    /// existing line. Returns the quantity actually added.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::ProductNotFound`] for an unknown id and
    /// [`StorefrontError::OutOfStock`] when the product has no units.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn add_to_cart(&mut self, id: ProductId, desired: u32) -> Result<u32> {
        let product = self
            .catalog
            .get(id)
            .ok_or(StorefrontError::ProductNotFound(id))?;
        let quantity =
            cart::purchasable_quantity(product, desired).ok_or(StorefrontError::OutOfStock(id))?;
        self.cart = self.cart.with_added(product, quantity);
        info!(quantity, "added to cart");
        Ok(quantity)
    }

    /// Removes a product's line from the cart. Absent lines are ignored.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart = self.cart.without(id);
    }

    /// Sets a line's quantity; zero removes the line.
    pub fn set_cart_quantity(&mut self, id: ProductId, quantity: u32) {
        self.cart = self.cart.with_quantity(id, quantity);
    }

    /// Flips wishlist membership for `id`, returning whether it is now saved.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::ProductNotFound`] for an unknown id.
    pub fn toggle_wishlist(&mut self, id: ProductId) -> Result<bool> {
        if self.catalog.get(id).is_none() {
            return Err(StorefrontError::ProductNotFound(id));
        }
        let saved = self.wishlist.toggle(id);
        debug!(product = %id, saved, "wishlist toggled");
        Ok(saved)
    }

    /// Total units in the cart, for the header badge.
    #[must_use]
    pub fn cart_item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Saved product count, for the header badge.
    #[must_use]
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    /// Prices the current cart.
    #[must_use]
    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary::for_cart(&self.cart)
    }

    // ------------------------------------------------------------------
    // Checkout
    // ------------------------------------------------------------------

    /// Moves to the checkout view with a fresh form.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when there is nothing to buy.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn begin_checkout(&mut self) -> Result<()> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart.into());
        }
        self.navigate(View::Checkout);
        Ok(())
    }

    /// Submits and settles the checkout in progress.
    ///
    /// The session stays on the checkout view showing the confirmation; the
    /// cart is left intact. The handle schedules the return home.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NotActive`] outside the checkout view, a
    /// validation error for blank form fields, or a transition error if the
    /// order was already placed.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn place_order(&mut self) -> Result<()> {
        let checkout = self.checkout.as_mut().ok_or(CheckoutError::NotActive)?;
        checkout.submit()?;
        checkout.settle()?;
        info!(total = %self.order_summary().total, "order placed");
        Ok(())
    }

    /// The checkout in progress, present only on the checkout view.
    #[must_use]
    pub fn checkout(&self) -> Option<&Checkout> {
        self.checkout.as_ref()
    }

    /// Mutable access to the checkout form while on the checkout view.
    pub fn checkout_mut(&mut self) -> Option<&mut Checkout> {
        self.checkout.as_mut()
    }

    // ------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------

    /// Signs in and navigates to the landing view for the identity.
    ///
    /// Admins land on the admin panel, everyone else on home. Returns the
    /// destination view.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Auth`] when the credentials are rejected;
    /// the session stays signed out on the current view.
    #[instrument(skip_all, fields(session = %self.id))]
    pub fn login(&mut self, credentials: &Credentials) -> Result<View> {
        let identity = self.authenticator.authenticate(credentials)?;
        let destination = if identity.is_admin {
            View::Admin
        } else {
            View::Home
        };
        info!(email = %identity.email, admin = identity.is_admin, "signed in");
        self.identity = Some(identity);
        self.navigate(destination);
        Ok(destination)
    }

    /// Signs out and returns home.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn logout(&mut self) {
        self.identity = None;
        self.navigate(View::Home);
    }

    /// The signed-in identity, if any.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Whether the signed-in identity may open the admin panel.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.identity
            .as_ref()
            .is_some_and(|identity| identity.is_admin)
    }

    // ------------------------------------------------------------------
    // Carousel, contact, newsletter
    // ------------------------------------------------------------------

    /// Steps the home carousel to the next banner.
    pub fn advance_carousel(&mut self) {
        self.carousel.advance();
    }

    /// Jumps the home carousel to a dot's slide.
    pub fn select_slide(&mut self, index: usize) {
        self.carousel.select(index);
    }

    /// Submits the contact form, raising its confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Contact`] for blank fields or a malformed
    /// email.
    pub fn submit_contact(&mut self) -> Result<()> {
        self.contact.submit()?;
        Ok(())
    }

    /// Clears the contact confirmation and blanks the form.
    pub fn reset_contact(&mut self) {
        self.contact.reset();
    }

    /// Subscribes the footer newsletter input.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Contact`] for a malformed email.
    pub fn subscribe_newsletter(&mut self) -> Result<()> {
        self.newsletter.subscribe()?;
        Ok(())
    }

    /// Clears the newsletter confirmation.
    pub fn reset_newsletter(&mut self) {
        self.newsletter.reset();
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Stable identifier for this session, used in log spans.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The catalog backing this session.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Mutable catalog access for the admin panel.
    pub fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    /// Current cart contents.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current wishlist.
    #[must_use]
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Current filter selection.
    #[must_use]
    pub const fn filter(&self) -> FilterState {
        self.filter
    }

    /// Current sort order.
    #[must_use]
    pub const fn sort(&self) -> SortKey {
        self.filter.sort
    }

    /// Current header search text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Id of the product the detail view is showing.
    #[must_use]
    pub const fn selected(&self) -> Option<ProductId> {
        self.selected
    }

    /// Home carousel position.
    #[must_use]
    pub const fn carousel(&self) -> Carousel {
        self.carousel
    }

    /// Contact page form state.
    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Mutable contact form access for filling fields.
    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    /// Footer newsletter state.
    #[must_use]
    pub fn newsletter(&self) -> &NewsletterSignup {
        &self.newsletter
    }

    /// Mutable newsletter access for typing an address.
    pub fn newsletter_mut(&mut self) -> &mut NewsletterSignup {
        &mut self.newsletter
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::checkout::{CheckoutForm, CheckoutStage, PaymentMethod};

    fn filled_checkout_form() -> CheckoutForm {
        CheckoutForm {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
            payment: PaymentMethod::Cod,
        }
    }

    #[test]
    fn test_new_session_starts_home() {
        let session = Session::seeded();
        assert_eq!(session.view(), View::Home);
        assert_eq!(session.epoch(), 0);
        assert!(session.cart().is_empty());
        assert!(session.identity().is_none());
    }

    #[test]
    fn test_navigate_same_view_is_noop() {
        let mut session = Session::seeded();
        session.navigate(View::Home);
        assert_eq!(session.epoch(), 0);

        session.navigate(View::Catalog);
        assert_eq!(session.epoch(), 1);
        session.navigate(View::Catalog);
        assert_eq!(session.epoch(), 1);
    }

    #[test]
    fn test_open_product_selects_and_navigates() {
        let mut session = Session::seeded();
        session.open_product(ProductId::new(2)).unwrap();
        assert_eq!(session.view(), View::ProductDetail);
        assert_eq!(session.selected_product().unwrap().name, "Bridal Red Saree");
    }

    #[test]
    fn test_open_unknown_product_keeps_view() {
        let mut session = Session::seeded();
        let err = session.open_product(ProductId::new(99)).unwrap_err();
        assert!(matches!(err, StorefrontError::ProductNotFound(_)));
        assert_eq!(session.view(), View::Home);
        assert!(session.selected_product().is_none());
    }

    #[test]
    fn test_add_to_cart_merges_lines() {
        let mut session = Session::seeded();
        let id = ProductId::new(3);
        assert_eq!(session.add_to_cart(id, 2).unwrap(), 2);
        assert_eq!(session.add_to_cart(id, 1).unwrap(), 1);

        assert_eq!(session.cart().len(), 1);
        assert_eq!(session.cart().line(id).unwrap().quantity, 3);
        assert_eq!(session.cart_item_count(), 3);
    }

    #[test]
    fn test_add_to_cart_clamps_to_stock() {
        let mut session = Session::seeded();
        // Product 2 has 8 in stock.
        let added = session.add_to_cart(ProductId::new(2), 50).unwrap();
        assert_eq!(added, 8);
    }

    #[test]
    fn test_toggle_wishlist_round_trip() {
        let mut session = Session::seeded();
        let id = ProductId::new(4);
        assert!(session.toggle_wishlist(id).unwrap());
        assert_eq!(session.wishlist_count(), 1);
        assert!(!session.toggle_wishlist(id).unwrap());
        assert_eq!(session.wishlist_count(), 0);
    }

    #[test]
    fn test_shop_category_narrows_and_navigates() {
        let mut session = Session::seeded();
        session.shop_category(Category::Silk);
        assert_eq!(session.view(), View::Catalog);

        let ids: Vec<u32> = session
            .visible_products()
            .iter()
            .map(|p| p.id.as_u32())
            .collect();
        assert_eq!(ids, vec![1, 6]);
    }

    #[test]
    fn test_begin_checkout_requires_items() {
        let mut session = Session::seeded();
        let err = session.begin_checkout().unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Checkout(CheckoutError::EmptyCart)
        ));
        assert_eq!(session.view(), View::Home);
    }

    #[test]
    fn test_checkout_mounts_fresh_and_unmounts() {
        let mut session = Session::seeded();
        session.add_to_cart(ProductId::new(1), 1).unwrap();
        session.begin_checkout().unwrap();

        assert_eq!(session.view(), View::Checkout);
        let checkout = session.checkout().unwrap();
        assert_eq!(checkout.stage(), CheckoutStage::Editing);

        session.navigate(View::Cart);
        assert!(session.checkout().is_none());
    }

    #[test]
    fn test_place_order_keeps_cart() {
        let mut session = Session::seeded();
        session.add_to_cart(ProductId::new(1), 2).unwrap();
        session.begin_checkout().unwrap();
        *session.checkout_mut().unwrap().form_mut() = filled_checkout_form();

        session.place_order().unwrap();
        assert!(session.checkout().unwrap().is_placed());
        assert_eq!(session.view(), View::Checkout);
        assert_eq!(session.cart_item_count(), 2);
    }

    #[test]
    fn test_place_order_requires_checkout_view() {
        let mut session = Session::seeded();
        let err = session.place_order().unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Checkout(CheckoutError::NotActive)
        ));
    }

    #[test]
    fn test_admin_login_lands_on_admin() {
        let mut session = Session::seeded();
        let destination = session
            .login(&Credentials::login("admin@riddhi.com", "admin123"))
            .unwrap();
        assert_eq!(destination, View::Admin);
        assert_eq!(session.view(), View::Admin);
        assert!(session.is_admin());
    }

    #[test]
    fn test_shopper_login_lands_home_from_login_view() {
        let mut session = Session::seeded();
        session.navigate(View::Login);
        let destination = session
            .login(&Credentials::signup("Priya", "priya@example.com", "pw"))
            .unwrap();
        assert_eq!(destination, View::Home);
        assert_eq!(session.view(), View::Home);
        assert!(!session.is_admin());
        assert_eq!(session.identity().unwrap().name, "Priya");
    }

    #[test]
    fn test_failed_login_leaves_session_unchanged() {
        let mut session = Session::seeded();
        session.navigate(View::Login);
        assert!(session.login(&Credentials::login("junk", "pw")).is_err());
        assert_eq!(session.view(), View::Login);
        assert!(session.identity().is_none());
    }

    #[test]
    fn test_logout_clears_identity_and_goes_home() {
        let mut session = Session::seeded();
        session
            .login(&Credentials::login("admin@riddhi.com", "admin123"))
            .unwrap();
        session.logout();
        assert!(session.identity().is_none());
        assert_eq!(session.view(), View::Home);
    }

    #[test]
    fn test_carousel_resets_on_home_reentry() {
        let mut session = Session::seeded();
        session.advance_carousel();
        session.advance_carousel();
        assert_eq!(session.carousel().slide(), 2);

        session.navigate(View::About);
        session.navigate(View::Home);
        assert_eq!(session.carousel().slide(), 0);
    }

    #[test]
    fn test_contact_form_resets_on_entry() {
        let mut session = Session::seeded();
        session.navigate(View::Contact);
        session.contact_mut().name = "Meera".to_string();

        session.navigate(View::Home);
        session.navigate(View::Contact);
        assert!(session.contact().name.is_empty());
    }

    #[test]
    fn test_view_round_trip() {
        for view in [
            View::Home,
            View::Catalog,
            View::ProductDetail,
            View::Cart,
            View::Checkout,
            View::Login,
            View::Admin,
            View::About,
            View::Contact,
        ] {
            assert_eq!(view.as_str().parse::<View>().unwrap(), view);
        }
        assert!("garage".parse::<View>().is_err());
    }
}
