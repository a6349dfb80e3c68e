//! Typing/deleting phrase effect
//!
//! Starts once the text scrolls into view and then loops for the life of
//! the page. Each step is a one-shot timer that schedules the next.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
fn schedule(
    mut cycler: crate::core::TextCycler,
    text: RwSignal<String>,
    delay: std::time::Duration,
) {
    use gloo_timers::callback::Timeout;

    Timeout::new(super::browser::timer_millis(delay), move || {
        let next = cycler.tick();
        // Signal disposed: the component is gone, let the loop end
        if text.try_set(cycler.text().to_string()).is_some() {
            return;
        }
        schedule(cycler, text, next);
    })
    .forget();
}

/// Types each phrase, holds it, deletes it, moves on
#[component]
pub fn TypedText(
    /// Phrases in display order
    phrases: Vec<String>,
) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let host = NodeRef::<leptos::html::Span>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::logging::warn;

        use crate::core::viewport::DEFAULT_THRESHOLD;
        use crate::core::{CyclerTiming, TextCycler};
        use crate::ui::{browser, viewport_trigger::watch_once};

        host.on_load(move |el| {
            let timing = CyclerTiming::default().for_motion(browser::motion_preference());
            let cycler = match TextCycler::new(phrases, timing) {
                Ok(cycler) => cycler,
                Err(err) => {
                    warn!("typing effect disabled: {}", err);
                    return;
                }
            };
            watch_once(&el, DEFAULT_THRESHOLD, move || {
                let delay = cycler.start_delay();
                schedule(cycler, text, delay);
            });
        });
    }
    #[cfg(feature = "ssr")]
    let _ = phrases;

    view! {
        <span class="typed" node_ref=host>
            <span class="typed-text">{move || text.get()}</span>
            <span class="typed-caret" aria-hidden="true">"|"</span>
        </span>
    }
}
