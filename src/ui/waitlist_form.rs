//! Waitlist signup form
//!
//! Posts the form's fields to its `action` URL and reports one of three
//! outcomes in the status line. The submit button is disabled while a
//! request is in flight and the request gives up after `SUBMIT_TIMEOUT`.

use leptos::prelude::*;

use crate::core::SubmitGate;

#[cfg(not(feature = "ssr"))]
async fn post_form(form: &leptos::web_sys::HtmlFormElement) -> Result<u16, crate::core::SubmitError> {
    use gloo_net::http::Request;
    use gloo_timers::future::TimeoutFuture;
    use leptos::logging::warn;
    use leptos::web_sys;

    use crate::core::SubmitError;
    use crate::core::submission::{SUBMIT_TIMEOUT, rejection_reasons, settle_within};
    use crate::ui::browser::timer_millis;

    let data = web_sys::FormData::new_with_form(form)
        .map_err(|err| SubmitError::Build(format!("{:?}", err)))?;
    let request = Request::post(&form.action())
        .header("Accept", "application/json")
        .body(data)
        .map_err(|err| SubmitError::Build(err.to_string()))?;

    let exchange = async move {
        let response = request
            .send()
            .await
            .map_err(|err| SubmitError::Transport(err.to_string()))?;
        let status = response.status();
        if !response.ok() {
            if let Ok(body) = response.text().await {
                for reason in rejection_reasons(&body) {
                    warn!("waitlist rejected ({}): {}", status, reason);
                }
            }
        }
        Ok::<u16, SubmitError>(status)
    };
    let deadline = TimeoutFuture::new(timer_millis(SUBMIT_TIMEOUT));

    settle_within(exchange, deadline, SUBMIT_TIMEOUT).await
}

#[component]
pub fn WaitlistForm(
    /// Form collection endpoint
    #[prop(into)]
    endpoint: String,
) -> impl IntoView {
    let gate = RwSignal::new(SubmitGate::new());
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(not(feature = "ssr"))]
        {
            use leptos::logging::{log, warn};
            use leptos::task::spawn_local;

            let Some(form) = form_ref.get_untracked() else {
                return;
            };
            // Refused while a previous submit is still pending
            if gate.try_update(|g| g.begin()).flatten().is_none() {
                log!("waitlist submit ignored: request already in flight");
                return;
            }
            spawn_local(async move {
                let result = post_form(&form).await;
                if let Err(err) = &result {
                    warn!("waitlist submit failed: {}", err);
                }
                let Some(outcome) = gate.try_update(|g| g.finish(result)) else {
                    return;
                };
                log!("waitlist submit settled: {:?}", outcome);
                if outcome.clears_fields() {
                    form.reset();
                }
            });
        }
    };

    let in_flight = move || gate.with(|g| g.in_flight());
    let status = move || gate.with(|g| g.last());

    view! {
        <form
            node_ref=form_ref
            class="waitlist-form"
            action=endpoint
            method="POST"
            on:submit=on_submit
        >
            <input
                type="text"
                name="name"
                autocomplete="given-name"
                placeholder="Your name"
            />
            <input
                type="email"
                name="email"
                autocomplete="email"
                placeholder="you@example.com"
                required
            />
            <button type="submit" disabled=in_flight>
                {move || if in_flight() { "Joining…" } else { "Join the waitlist" }}
            </button>
        </form>
        <p
            class=move || status().map_or("form-status", |o| o.css_class())
            role="status"
            aria-live="polite"
        >
            {move || status().map_or("", |o| o.message())}
        </p>
    }
}
