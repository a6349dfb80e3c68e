//! Browser environment access
//!
//! Thin helpers over `web_sys::window()`. Every lookup degrades to a neutral
//! value when the platform does not provide it.

use std::time::Duration;

use leptos::web_sys;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsValue;

use crate::core::audio::{PREFERENCE_KEY, PreferenceStore, decode_preference, encode_preference};
use crate::core::motion::{MotionPreference, REDUCED_MOTION_QUERY};

/// Viewport size in CSS pixels
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

pub fn device_pixel_ratio() -> f64 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|ratio| ratio.is_finite() && *ratio > 0.0)
        .unwrap_or(1.0)
}

/// Read `prefers-reduced-motion` once
pub fn motion_preference() -> MotionPreference {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(query)) = window.match_media(REDUCED_MOTION_QUERY) {
            return MotionPreference {
                reduced: query.matches(),
            };
        }
    }
    MotionPreference::full()
}

/// Whether a global constructor (e.g. `IntersectionObserver`) exists
pub fn supports(api: &str) -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str(api)).unwrap_or(false))
        .unwrap_or(false)
}

/// Non-deterministic RNG seeded from `Math.random`
pub fn seeded_rng() -> SmallRng {
    let half = || (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    SmallRng::seed_from_u64((half() << 32) | half())
}

/// Timer delay in the `u32` milliseconds gloo-timers expects
pub fn timer_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Audio preference kept in `localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Option<bool> {
        let raw = Self::storage()?.get_item(PREFERENCE_KEY).ok().flatten()?;
        decode_preference(&raw)
    }

    fn save(&self, enabled: bool) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(PREFERENCE_KEY, encode_preference(enabled));
        }
    }
}
