use super::*;

#[test]
fn slideshow_defaults_to_first_of_four() {
    let s = SlideshowState::default();
    assert_eq!(s.current, 0);
    assert_eq!(s.previous, None);
    assert_eq!(s.len, SLIDE_IMAGES.len());
    assert_eq!(s.len, 4);
}

#[test]
fn advance_steps_modulo_length() {
    let mut s = SlideshowState::new(4);
    for expected in [1, 2, 3, 0, 1] {
        s.advance();
        assert_eq!(s.current, expected);
    }
}

#[test]
fn advance_wraps_indefinitely() {
    let mut s = SlideshowState::new(4);
    for tick in 1..=100 {
        s.advance();
        assert_eq!(s.current, tick % 4);
    }
}

#[test]
fn select_jumps_without_breaking_cadence() {
    let mut s = SlideshowState::new(4);
    s.select(2);
    assert_eq!(s.current, 2);
    // The next timer tick continues from the selected slide.
    s.advance();
    assert_eq!(s.current, 3);
    s.advance();
    assert_eq!(s.current, 0);
}

#[test]
fn advance_and_select_remember_the_exiting_slide() {
    let mut s = SlideshowState::new(4);
    s.advance();
    assert_eq!(s.previous, Some(0));
    s.select(3);
    assert_eq!(s.previous, Some(1));
    // Re-selecting the current slide leaves everything alone.
    s.select(3);
    assert_eq!(s.current, 3);
    assert_eq!(s.previous, Some(1));
}

#[test]
fn select_out_of_range_is_ignored() {
    let mut s = SlideshowState::new(4);
    s.select(1);
    s.select(4);
    assert_eq!(s.current, 1);
    s.select(usize::MAX);
    assert_eq!(s.current, 1);
}

#[test]
fn advance_on_empty_sequence_is_a_noop() {
    let mut s = SlideshowState::new(0);
    s.advance();
    assert_eq!(s.current, 0);
}
