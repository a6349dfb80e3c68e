//! Core state machines and data for the landing page behaviors
//!
//! Nothing here touches the DOM; `ui` drives these types from browser events.

pub mod anchor;
pub mod audio;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod counter;
pub mod motion;
pub mod rotator;
pub mod starfield;
pub mod submission;
pub mod text_cycler;
pub mod viewport;

pub use audio::{AudioController, PlaybackAction, PlaybackState, Persistence, PreferenceStore};
pub use content::LandingContent;
pub use counter::{CountUp, CounterSpec};
pub use motion::MotionPreference;
pub use rotator::WordRotator;
pub use starfield::{Particle, Starfield};
pub use submission::{SubmissionOutcome, SubmitError, SubmitGate};
pub use text_cycler::{CyclerError, CyclerPhase, CyclerTiming, TextCycler};
pub use viewport::ViewportWatch;
