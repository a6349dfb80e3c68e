//! Smooth scrolling for in-page links
//!
//! One delegated click listener on the window handles every
//! `a[href^="#"]`, including links rendered after it was installed.

use leptos::prelude::*;
use leptos::web_sys;
use wasm_bindgen::JsCast;

use crate::core::anchor::fragment_target;
use crate::core::motion::MotionPreference;

const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

fn scroll_to(target: &web_sys::Element, motion: MotionPreference) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(if motion.reduced {
        web_sys::ScrollBehavior::Auto
    } else {
        web_sys::ScrollBehavior::Smooth
    });
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

fn handle_click(ev: &web_sys::Event, motion: MotionPreference) {
    let Some(clicked) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    else {
        return;
    };
    let Ok(Some(anchor)) = clicked.closest(ANCHOR_SELECTOR) else {
        return;
    };
    let href = anchor.get_attribute("href").unwrap_or_default();
    let Some(id) = fragment_target(&href) else {
        return;
    };
    // Unknown ids fall through to the browser's default jump
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(target) = target {
        ev.prevent_default();
        scroll_to(&target, motion);
    }
}

/// Start delegating anchor clicks. Remove the returned handle on cleanup.
pub fn install(motion: MotionPreference) -> WindowListenerHandle {
    use leptos::ev::click;

    window_event_listener(click, move |ev| handle_click(&ev, motion))
}
