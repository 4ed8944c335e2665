//! Cosmetic animation timing and transition classes.
//!
//! These values drive CSS transitions only; nothing behavioral depends on
//! them. The slideshow keeps exactly one logical image current regardless
//! of what these timings do on screen.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Transition timings, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionTiming {
    /// Slide enter/exit duration.
    pub slide_ms: u32,
    /// Page-level section fade-in.
    pub section_fade_ms: u32,
    /// CTA banner reveal.
    pub cta_reveal_ms: u32,
}

impl Default for MotionTiming {
    fn default() -> Self {
        Self { slide_ms: 300, section_fade_ms: 600, cta_reveal_ms: 300 }
    }
}

/// Which side of the transition an image is on. The incoming slide enters
/// from the right; the outgoing slide exits to the left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlidePhase {
    Enter,
    Exit,
}

/// CSS class applied to a slide for its transition phase.
#[must_use]
pub fn slide_class(phase: SlidePhase) -> &'static str {
    match phase {
        SlidePhase::Enter => "slideshow__image--enter-from-right",
        SlidePhase::Exit => "slideshow__image--exit-to-left",
    }
}

/// Inline style setting a transition duration.
#[must_use]
pub fn transition_style(duration_ms: u32) -> String {
    format!("transition-duration: {duration_ms}ms")
}

/// Inline style setting a reveal animation duration.
#[must_use]
pub fn reveal_style(duration_ms: u32) -> String {
    format!("animation-duration: {duration_ms}ms")
}
