//! Leptos components and browser glue for the landing page

pub mod audio_toggle;
#[cfg(not(feature = "ssr"))]
pub mod browser;
pub mod counter;
pub mod pages;
pub mod reveal;
#[cfg(not(feature = "ssr"))]
pub mod smooth_scroll;
pub mod starfield;
pub mod typed_text;
#[cfg(not(feature = "ssr"))]
pub mod viewport_trigger;
pub mod waitlist_form;
pub mod word_rotator;

pub use audio_toggle::AudioToggle;
pub use counter::CountUpStat;
pub use reveal::Reveal;
pub use starfield::StarfieldCanvas;
pub use typed_text::TypedText;
pub use waitlist_form::WaitlistForm;
pub use word_rotator::RotatingWord;
