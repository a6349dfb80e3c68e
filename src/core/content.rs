//! Landing page copy and endpoints
//!
//! Everything the page renders that is not markup. Defaults are the values
//! the live page ships with; the server may override endpoints from its
//! environment (see `config::Config`).

use serde::{Deserialize, Serialize};

use super::audio::AMBIENT_VOLUME;
use super::counter::CounterSpec;

/// Default third-party form collection endpoint
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/nora-waitlist";

/// Default ambient track
pub const DEFAULT_AUDIO_SRC: &str = "/audio/ambient.mp3";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandingContent {
    /// Phrases for the typing effect
    pub phrases: Vec<String>,
    /// Words rotated in the headline
    pub rotating_words: Vec<String>,
    pub counters: Vec<CounterSpec>,
    pub form_endpoint: String,
    pub audio_src: String,
    /// Whether the audio toggle remembers the choice across visits
    pub remember_audio: bool,
    #[serde(default = "default_ambient_volume")]
    pub ambient_volume: f64,
}

fn default_ambient_volume() -> f64 {
    AMBIENT_VOLUME
}

impl Default for LandingContent {
    fn default() -> Self {
        Self {
            phrases: ["voice notes", "midnight ideas", "sketches", "thoughts on the go"]
                .into_iter()
                .map(String::from)
                .collect(),
            rotating_words: ["capture", "connect", "remember"]
                .into_iter()
                .map(String::from)
                .collect(),
            counters: vec![
                CounterSpec::new(12400, "+", "ideas captured"),
                CounterSpec::new(38, "", "countries on the waitlist"),
                CounterSpec::new(96, "%", "say they remember more"),
            ],
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            audio_src: DEFAULT_AUDIO_SRC.to_string(),
            remember_audio: true,
            ambient_volume: AMBIENT_VOLUME,
        }
    }
}
