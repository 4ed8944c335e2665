//! Rotating image slideshow with dot selectors.

use leptos::prelude::*;

use crate::state::home::{SLIDE_IMAGES, SlideshowState};
use crate::util::motion::{MotionTiming, SlidePhase, slide_class, transition_style};

/// Image carousel for the customer home page.
///
/// The owning page drives `slideshow` from its timer loop; this component
/// only renders the current image (sliding in from the right), the
/// just-left image (sliding out to the left), and forwards dot clicks to
/// [`SlideshowState::select`].
#[component]
pub fn Slideshow(slideshow: RwSignal<SlideshowState>) -> impl IntoView {
    let timing = MotionTiming::default();

    let current_src = move || {
        let s = slideshow.get();
        SLIDE_IMAGES.get(s.current).copied().unwrap_or(SLIDE_IMAGES[0])
    };
    let current_alt = move || format!("Slide {}", slideshow.get().current + 1);
    let exiting_src = move || {
        let s = slideshow.get();
        s.previous
            .filter(|&p| p != s.current)
            .and_then(|p| SLIDE_IMAGES.get(p).copied())
    };

    view! {
        <div class="slideshow">
            <div class="slideshow__frame">
                {move || {
                    exiting_src()
                        .map(|src| {
                            view! {
                                <img
                                    class=format!(
                                        "slideshow__image {}",
                                        slide_class(SlidePhase::Exit),
                                    )
                                    style=transition_style(timing.slide_ms)
                                    src=src
                                    alt=""
                                    aria-hidden="true"
                                />
                            }
                        })
                }}
                <img
                    class=format!("slideshow__image {}", slide_class(SlidePhase::Enter))
                    style=transition_style(timing.slide_ms)
                    src=current_src
                    alt=current_alt
                />
            </div>
            <div class="slideshow__dots">
                {SLIDE_IMAGES
                    .iter()
                    .enumerate()
                    .map(|(index, _)| {
                        view! {
                            <button
                                class=move || {
                                    if slideshow.get().current == index {
                                        "slideshow__dot slideshow__dot--active"
                                    } else {
                                        "slideshow__dot"
                                    }
                                }
                                aria-label=format!("Go to slide {}", index + 1)
                                on:click=move |_| slideshow.update(|s| s.select(index))
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
