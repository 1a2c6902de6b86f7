//! Shared session handle and its timers.
//!
//! [`SessionHandle`] wraps a [`Session`] behind a lock so timer tasks and
//! callers share one copy of the state, and owns the scheduled work the
//! views rely on: the five-second carousel rotation on home and the
//! three-second confirmation resets.
//!
//! Two mechanisms keep a timer from landing on a view that no longer
//! exists. Navigation drops the timers of the view being left, aborting
//! their tasks, and every timer also captures the session epoch current
//! when it was scheduled and re-checks it under the lock before touching
//! anything. The footer newsletter timer is the one exception: the footer
//! is rendered on every view, so its reset ignores navigation entirely.

use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use tracing::{debug, error};

use riddhi_core::{Category, CategoryFilter, ProductId};

use crate::auth::Credentials;
use crate::browse::SortKey;
use crate::error::{Result, StorefrontError};
use crate::session::{Session, View};
use crate::timers::ViewTimer;

/// How often the home carousel rotates.
pub const CAROUSEL_PERIOD: Duration = Duration::from_secs(5);

/// How long confirmations stay up before clearing themselves.
pub const CONFIRMATION_RESET: Duration = Duration::from_secs(3);

struct Inner {
    session: RwLock<Session>,
    view_timers: Mutex<Vec<ViewTimer>>,
    footer_timer: Mutex<Option<ViewTimer>>,
}

/// Cloneable handle to a shared session.
///
/// Timer tasks hold only a [`Weak`](std::sync::Weak) reference to the shared state, so
/// dropping the last handle tears everything down: the state drops, which
/// drops the timers, which aborts their tasks.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<Inner>,
}

impl SessionHandle {
    /// Wraps `session` and starts the timers its current view needs.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new(session: Session) -> Self {
        let view = session.view();
        let epoch = session.epoch();
        let handle = Self {
            inner: Arc::new(Inner {
                session: RwLock::new(session),
                view_timers: Mutex::new(Vec::new()),
                footer_timer: Mutex::new(None),
            }),
        };
        // A freshly created lock cannot be poisoned.
        let _ = handle.install_view_timers(view, epoch);
        handle
    }

    /// A handle over a fresh session on the built-in sample catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(Session::seeded())
    }

    // ------------------------------------------------------------------
    // Locked access
    // ------------------------------------------------------------------

    /// Runs `f` with read access to the session.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::LockPoisoned`] if a writer panicked.
    pub fn with<T>(&self, f: impl FnOnce(&Session) -> T) -> Result<T> {
        let session = self
            .inner
            .session
            .read()
            .map_err(|_| StorefrontError::LockPoisoned)?;
        Ok(f(&session))
    }

    /// Runs `f` with write access to the session.
    ///
    /// A view change made inside `f` reschedules timers exactly as the
    /// named operations do.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::LockPoisoned`] if a writer panicked.
    pub fn update<T>(&self, f: impl FnOnce(&mut Session) -> T) -> Result<T> {
        self.mutate(|session| Ok(f(session)))
    }

    /// Applies `f` under the write lock, then swaps the view timers if the
    /// view changed.
    ///
    /// The session lock is released before the timer list is touched; no
    /// path in this module holds both at once.
    fn mutate<T>(&self, f: impl FnOnce(&mut Session) -> Result<T>) -> Result<T> {
        let (result, change) = {
            let mut session = self
                .inner
                .session
                .write()
                .map_err(|_| StorefrontError::LockPoisoned)?;
            let before = session.view();
            let result = f(&mut session);
            let change =
                (session.view() != before).then(|| (session.view(), session.epoch()));
            (result, change)
        };
        if let Some((view, epoch)) = change {
            self.install_view_timers(view, epoch)?;
        }
        result
    }

    // ------------------------------------------------------------------
    // Timer plumbing
    // ------------------------------------------------------------------

    /// Replaces the current view's timers with the ones `view` needs.
    ///
    /// Dropping the old timers aborts their tasks, so a callback scheduled
    /// against the departed view can no longer fire.
    fn install_view_timers(&self, view: View, epoch: u64) -> Result<()> {
        let fresh = (view == View::Home).then(|| self.carousel_timer(epoch));
        let mut timers = self
            .inner
            .view_timers
            .lock()
            .map_err(|_| StorefrontError::LockPoisoned)?;
        timers.clear();
        timers.extend(fresh);
        Ok(())
    }

    fn push_view_timer(&self, timer: ViewTimer) -> Result<()> {
        let mut timers = self
            .inner
            .view_timers
            .lock()
            .map_err(|_| StorefrontError::LockPoisoned)?;
        timers.push(timer);
        Ok(())
    }

    /// Rotates the home carousel every [`CAROUSEL_PERIOD`].
    fn carousel_timer(&self, epoch: u64) -> ViewTimer {
        let inner = Arc::downgrade(&self.inner);
        ViewTimer::repeating(CAROUSEL_PERIOD, move || {
            let Some(inner) = inner.upgrade() else { return };
            let Ok(mut session) = inner.session.write() else {
                return;
            };
            if session.view() == View::Home && session.epoch() == epoch {
                session.advance_carousel();
            }
        })
    }

    /// Returns to home once the order confirmation has been shown.
    fn home_return_timer(&self, epoch: u64) -> ViewTimer {
        let inner = Arc::downgrade(&self.inner);
        ViewTimer::once(CONFIRMATION_RESET, move || {
            let Some(inner) = inner.upgrade() else { return };
            let handle = Self { inner };
            if let Err(error) = handle.return_home(epoch) {
                error!(%error, "could not leave the order confirmation");
            }
        })
    }

    fn return_home(&self, epoch: u64) -> Result<()> {
        self.mutate(|session| {
            if session.epoch() == epoch {
                debug!("order confirmation elapsed, returning home");
                session.navigate(View::Home);
            }
            Ok(())
        })
    }

    // ------------------------------------------------------------------
    // Session operations
    // ------------------------------------------------------------------

    /// Switches views. See [`Session::navigate`].
    pub fn navigate(&self, view: View) -> Result<()> {
        self.mutate(|session| {
            session.navigate(view);
            Ok(())
        })
    }

    /// Opens a product's detail view.
    pub fn open_product(&self, id: ProductId) -> Result<()> {
        self.mutate(|session| session.open_product(id))
    }

    /// Adds to the cart, returning the quantity actually added.
    pub fn add_to_cart(&self, id: ProductId, desired: u32) -> Result<u32> {
        self.mutate(|session| session.add_to_cart(id, desired))
    }

    /// Removes a cart line.
    pub fn remove_from_cart(&self, id: ProductId) -> Result<()> {
        self.mutate(|session| {
            session.remove_from_cart(id);
            Ok(())
        })
    }

    /// Sets a cart line's quantity; zero removes it.
    pub fn set_cart_quantity(&self, id: ProductId, quantity: u32) -> Result<()> {
        self.mutate(|session| {
            session.set_cart_quantity(id, quantity);
            Ok(())
        })
    }

    /// Flips wishlist membership.
    pub fn toggle_wishlist(&self, id: ProductId) -> Result<bool> {
        self.mutate(|session| session.toggle_wishlist(id))
    }

    /// Narrows the catalog to a category.
    pub fn set_category(&self, category: CategoryFilter) -> Result<()> {
        self.mutate(|session| {
            session.set_category(category);
            Ok(())
        })
    }

    /// Changes the sort order.
    pub fn set_sort(&self, sort: SortKey) -> Result<()> {
        self.mutate(|session| {
            session.set_sort(sort);
            Ok(())
        })
    }

    /// Replaces the header search text.
    pub fn set_query(&self, query: impl Into<String>) -> Result<()> {
        let query = query.into();
        self.mutate(|session| {
            session.set_query(query);
            Ok(())
        })
    }

    /// Jumps to the catalog narrowed to `category`.
    pub fn shop_category(&self, category: Category) -> Result<()> {
        self.mutate(|session| {
            session.shop_category(category);
            Ok(())
        })
    }

    /// Jumps the carousel to a dot's slide.
    pub fn select_slide(&self, index: usize) -> Result<()> {
        self.mutate(|session| {
            session.select_slide(index);
            Ok(())
        })
    }

    /// Signs in, returning the landing view.
    pub fn login(&self, credentials: &Credentials) -> Result<View> {
        self.mutate(|session| session.login(credentials))
    }

    /// Signs out and returns home.
    pub fn logout(&self) -> Result<()> {
        self.mutate(|session| {
            session.logout();
            Ok(())
        })
    }

    /// Moves to checkout with a fresh form.
    pub fn begin_checkout(&self) -> Result<()> {
        self.mutate(|session| session.begin_checkout())
    }

    /// Places the order and schedules the return home.
    ///
    /// The confirmation stays up for [`CONFIRMATION_RESET`]; navigating
    /// anywhere in the meantime cancels the scheduled return.
    pub fn place_order(&self) -> Result<()> {
        let epoch = self.mutate(|session| {
            session.place_order()?;
            Ok(session.epoch())
        })?;
        self.push_view_timer(self.home_return_timer(epoch))
    }

    /// Submits the contact form and schedules its reset.
    ///
    /// The thank-you note clears after [`CONFIRMATION_RESET`] unless the
    /// contact view is left first.
    pub fn submit_contact(&self) -> Result<()> {
        let epoch = self.mutate(|session| {
            session.submit_contact()?;
            Ok(session.epoch())
        })?;
        let inner = Arc::downgrade(&self.inner);
        self.push_view_timer(ViewTimer::once(CONFIRMATION_RESET, move || {
            let Some(inner) = inner.upgrade() else { return };
            let Ok(mut session) = inner.session.write() else {
                return;
            };
            if session.epoch() == epoch {
                session.reset_contact();
            }
        }))
    }

    /// Subscribes the footer newsletter input and schedules its reset.
    ///
    /// The footer is on every view, so the reset is not tied to a view
    /// generation and survives navigation. Subscribing again before it
    /// fires replaces the timer, restarting the window.
    pub fn subscribe_newsletter(&self) -> Result<()> {
        self.mutate(Session::subscribe_newsletter)?;
        let inner = Arc::downgrade(&self.inner);
        let timer = ViewTimer::once(CONFIRMATION_RESET, move || {
            let Some(inner) = inner.upgrade() else { return };
            let Ok(mut session) = inner.session.write() else {
                return;
            };
            session.reset_newsletter();
        });
        let mut slot = self
            .inner
            .footer_timer
            .lock()
            .map_err(|_| StorefrontError::LockPoisoned)?;
        *slot = Some(timer);
        Ok(())
    }
}
