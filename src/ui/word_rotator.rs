//! Rotating headline word

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
fn rotate(mut rotator: crate::core::WordRotator, word: RwSignal<String>) {
    use gloo_timers::callback::Timeout;

    Timeout::new(super::browser::timer_millis(rotator.interval()), move || {
        let next = rotator.advance().to_string();
        if word.try_set(next).is_some() {
            return;
        }
        rotate(rotator, word);
    })
    .forget();
}

/// Cycles through `words` once visible. The first word is rendered on the
/// server so the headline reads correctly before hydration.
#[component]
pub fn RotatingWord(words: Vec<String>) -> impl IntoView {
    let word = RwSignal::new(words.first().cloned().unwrap_or_default());
    let host = NodeRef::<leptos::html::Span>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::WordRotator;
        use crate::core::viewport::DEFAULT_THRESHOLD;
        use crate::ui::{browser, viewport_trigger::watch_once};

        host.on_load(move |el| {
            let Some(rotator) = WordRotator::new(words, browser::motion_preference()) else {
                return;
            };
            if rotator.is_static() {
                return;
            }
            watch_once(&el, DEFAULT_THRESHOLD, move || rotate(rotator, word));
        });
    }

    view! {
        <span class="rotating-word" node_ref=host>
            {move || word.get()}
        </span>
    }
}
