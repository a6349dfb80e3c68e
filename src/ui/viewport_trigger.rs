//! One-shot `IntersectionObserver` wrapper

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::warn;
use leptos::web_sys;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::browser;
use crate::core::viewport::ViewportWatch;

/// Run `on_visible` the first time at least `threshold` of `target` is on
/// screen, then stop observing. Without `IntersectionObserver` the callback
/// runs immediately.
pub fn watch_once<F>(target: &web_sys::Element, threshold: f64, on_visible: F)
where
    F: FnOnce() + 'static,
{
    let mut watch = ViewportWatch::new(threshold);

    if !browser::supports("IntersectionObserver") {
        if watch.force() {
            on_visible();
        }
        return;
    }

    let threshold = watch.threshold();
    // Shared with the error path below in case the observer can't be built
    let pending = Rc::new(RefCell::new(Some(on_visible)));
    let pending_for_handler = pending.clone();

    let handler = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if watch.observe(entry.intersection_ratio()) {
                    observer.disconnect();
                    if let Some(callback) = pending_for_handler.borrow_mut().take() {
                        callback();
                    }
                    break;
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match web_sys::IntersectionObserver::new_with_options(handler.as_ref().unchecked_ref(), &options)
    {
        Ok(observer) => {
            observer.observe(target);
            // Lives until the observer disconnects; the page never tears it down
            handler.forget();
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable ({:?}), firing immediately", err);
            let callback = pending.borrow_mut().take();
            if let Some(callback) = callback {
                callback();
            }
        }
    }
}
