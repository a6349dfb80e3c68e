//! Fade-in on first view

use leptos::prelude::*;

/// Wraps `children` in a block that gains `visible` once scrolled into view
#[component]
pub fn Reveal(
    /// Extra classes for the wrapper
    #[prop(optional, into)]
    class: String,
    /// Anchor id, for in-page links
    #[prop(optional, into)]
    id: Option<String>,
    children: Children,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    let host = NodeRef::<leptos::html::Section>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::viewport::REVEAL_THRESHOLD;
        use crate::ui::viewport_trigger::watch_once;

        host.on_load(move |el| {
            watch_once(&el, REVEAL_THRESHOLD, move || {
                let _ = visible.try_set(true);
            });
        });
    }

    view! {
        <section
            node_ref=host
            id=id
            class=format!("reveal {}", class)
            class:visible=move || visible.get()
        >
            {children()}
        </section>
    }
}
