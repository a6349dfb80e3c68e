//! Not found page component
//!
//! A 404 page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::StarfieldCanvas;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <StarfieldCanvas />
        <main class="not-found">
            <h1>"404"</h1>
            <p>"This corner of the sky is empty."</p>
            <A href="/" attr:class="cta">"Back to Nora"</A>
        </main>
    }
}
