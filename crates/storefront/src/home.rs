//! Home page hero carousel.
//!
//! The carousel cycles through the fixed promotional banners. Rotation is
//! driven externally, every five seconds by the session handle's timer, and
//! the slide index resets whenever the home view is re-entered.

/// A promotional hero slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
}

/// The banners shown on the home page, in rotation order.
pub static BANNERS: [Banner; 3] = [
    Banner {
        title: "Bridal Collection 2025",
        subtitle: "Exclusive Designer Sarees",
        image: "https://images.unsplash.com/photo-1617627143750-d86bc21e42bb?w=1200",
    },
    Banner {
        title: "Pure Silk Elegance",
        subtitle: "Handwoven Masterpieces",
        image: "https://images.unsplash.com/photo-1610030469983-98e550d6193c?w=1200",
    },
    Banner {
        title: "Festive Special",
        subtitle: "Traditional Charm",
        image: "https://images.unsplash.com/photo-1583391733956-3750e0ff4e8b?w=1200",
    },
];

/// Position within a fixed-length slide rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    slide: usize,
    len: usize,
}

impl Carousel {
    /// A carousel over `len` slides, starting at the first.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { slide: 0, len }
    }

    /// A carousel over the home page banners.
    #[must_use]
    pub fn over_banners() -> Self {
        Self::new(BANNERS.len())
    }

    /// Index of the slide currently shown.
    #[must_use]
    pub const fn slide(&self) -> usize {
        self.slide
    }

    /// Number of slides in the rotation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the rotation has no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Steps to the next slide, wrapping to the first after the last.
    pub fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.slide = (self.slide + 1) % self.len;
    }

    /// Jumps directly to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.slide = index;
        }
    }

    /// Returns to the first slide.
    pub fn reset(&mut self) {
        self.slide = 0;
    }

    /// The banner under the cursor, when this carousel tracks [`BANNERS`].
    #[must_use]
    pub fn current_banner(&self) -> Option<&'static Banner> {
        BANNERS.get(self.slide)
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::over_banners()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_around() {
        let mut carousel = Carousel::over_banners();
        assert_eq!(carousel.slide(), 0);

        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.slide(), 2);

        carousel.advance();
        assert_eq!(carousel.slide(), 0);
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut carousel = Carousel::over_banners();
        carousel.select(2);
        assert_eq!(carousel.slide(), 2);

        carousel.select(7);
        assert_eq!(carousel.slide(), 2);
    }

    #[test]
    fn test_empty_rotation_stays_put() {
        let mut carousel = Carousel::new(0);
        carousel.advance();
        assert_eq!(carousel.slide(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn test_current_banner_follows_slide() {
        let mut carousel = Carousel::over_banners();
        assert_eq!(
            carousel.current_banner().unwrap().title,
            "Bridal Collection 2025"
        );
        carousel.advance();
        assert_eq!(carousel.current_banner().unwrap().title, "Pure Silk Elegance");
    }
}
