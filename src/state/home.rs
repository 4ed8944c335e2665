//! Customer home page state: the slideshow index.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// Image sequence shown by the home page slideshow, in rotation order.
pub const SLIDE_IMAGES: [&str; 4] = [
    "/images/customer/home1.png",
    "/images/customer/home2.png",
    "/images/customer/home3.png",
    "/images/customer/home4.png",
];

/// Milliseconds between automatic slide advances.
pub const SLIDE_INTERVAL_MS: u64 = 3000;

/// Current slide position over a fixed-length image sequence.
///
/// Exactly one image is logically current at any time; `previous` only
/// remembers the slide that just left so the view can play its exit
/// transition. The timer loop calls [`SlideshowState::advance`] and the
/// dot selector calls [`SlideshowState::select`]. Neither resets the
/// other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideshowState {
    pub current: usize,
    pub previous: Option<usize>,
    pub len: usize,
}

impl SlideshowState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { current: 0, previous: None, len }
    }

    /// Advance to the next slide, wrapping to the start indefinitely.
    pub fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.previous = Some(self.current);
        self.current = (self.current + 1) % self.len;
    }

    /// Jump directly to slide `index`. Out-of-range indices and
    /// re-selecting the current slide are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len && index != self.current {
            self.previous = Some(self.current);
            self.current = index;
        }
    }
}

impl Default for SlideshowState {
    fn default() -> Self {
        Self::new(SLIDE_IMAGES.len())
    }
}
