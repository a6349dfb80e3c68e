//! Count-up statistic

use leptos::prelude::*;

use crate::core::CounterSpec;
use crate::core::counter::format_count;

#[cfg(not(feature = "ssr"))]
const FRAME_MS: u32 = 16;

#[cfg(not(feature = "ssr"))]
fn step(count: crate::core::CountUp, value: RwSignal<u64>, started_ms: f64) {
    use gloo_timers::callback::Timeout;
    use std::time::Duration;

    let elapsed = Duration::from_secs_f64(((js_sys::Date::now() - started_ms) / 1000.0).max(0.0));
    if value.try_set(count.value_at(elapsed)).is_some() || count.is_done(elapsed) {
        return;
    }
    Timeout::new(FRAME_MS, move || step(count, value, started_ms)).forget();
}

/// A number that counts up from zero the first time it is seen
#[component]
pub fn CountUpStat(stat: CounterSpec) -> impl IntoView {
    let value = RwSignal::new(0_u64);
    let host = NodeRef::<leptos::html::Div>::new();
    let CounterSpec {
        target,
        suffix,
        label,
    } = stat;

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::CountUp;
        use crate::core::viewport::DEFAULT_THRESHOLD;
        use crate::ui::{browser, viewport_trigger::watch_once};

        host.on_load(move |el| {
            let count = CountUp::new(target, browser::motion_preference());
            watch_once(&el, DEFAULT_THRESHOLD, move || {
                step(count, value, js_sys::Date::now());
            });
        });
    }
    #[cfg(feature = "ssr")]
    let _ = target;

    view! {
        <div class="stat" node_ref=host>
            <span class="stat-value">{move || format_count(value.get())}{suffix}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
