//! Ambient audio toggle state
//!
//! Playback starts on load when allowed. Browsers may refuse unsolicited
//! playback; that refusal is kept as the `Denied` state so the control shows
//! the truth instead of pretending audio is on. A click always targets the
//! opposite of what is currently audible.

use std::cell::Cell;

/// Volume used for ambient playback
pub const AMBIENT_VOLUME: f64 = 0.25;

/// localStorage key for the persisted preference
pub const PREFERENCE_KEY: &str = "nora-ambient-audio";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
    /// Autoplay was refused by the platform; waiting for a user gesture
    Denied,
}

impl PlaybackState {
    pub fn is_audible(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }
}

/// What the UI should do to the media element after a click
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackAction {
    Play,
    Pause,
}

/// Visible state of the toggle control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affordance {
    pub icon: &'static str,
    pub pressed: bool,
    pub muted: bool,
    pub label: &'static str,
}

impl Affordance {
    pub fn aria_pressed(&self) -> &'static str {
        if self.pressed { "true" } else { "false" }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persistence {
    /// Always try to start on load
    Off,
    /// Remember the last toggle across sessions
    Remember,
}

/// Storage for the on/off preference
pub trait PreferenceStore {
    fn load(&self) -> Option<bool>;
    fn save(&self, enabled: bool);
}

/// Process-local store; used where no persistent storage exists
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Cell<Option<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<bool> {
        self.value.get()
    }

    fn save(&self, enabled: bool) {
        self.value.set(Some(enabled));
    }
}

pub fn encode_preference(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

pub fn decode_preference(raw: &str) -> Option<bool> {
    match raw {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioController {
    state: PlaybackState,
    persistence: Persistence,
    enabled: bool,
}

impl AudioController {
    /// `stored` is the persisted preference, if any; it is ignored unless
    /// persistence is on.
    pub fn new(persistence: Persistence, stored: Option<bool>) -> Self {
        let enabled = match persistence {
            Persistence::Remember => stored.unwrap_or(true),
            Persistence::Off => true,
        };
        Self {
            state: PlaybackState::Paused,
            persistence,
            enabled,
        }
    }

    /// Load the stored preference and build a controller
    pub fn load(persistence: Persistence, store: &impl PreferenceStore) -> Self {
        let stored = match persistence {
            Persistence::Remember => store.load(),
            Persistence::Off => None,
        };
        Self::new(persistence, stored)
    }

    pub fn wants_autoplay(&self) -> bool {
        self.enabled
    }

    pub fn playback_started(&mut self) {
        self.state = PlaybackState::Playing;
    }

    pub fn playback_denied(&mut self) {
        self.state = PlaybackState::Denied;
    }

    pub fn playback_paused(&mut self) {
        self.state = PlaybackState::Paused;
    }

    /// Handle a click on the control: flips the intent and returns what to
    /// do to the media element. The caller reports the result back through
    /// `playback_started`/`playback_denied`/`playback_paused`.
    pub fn toggle(&mut self) -> PlaybackAction {
        if self.state.is_audible() {
            self.enabled = false;
            PlaybackAction::Pause
        } else {
            self.enabled = true;
            PlaybackAction::Play
        }
    }

    /// Write the current intent, if persistence is on
    pub fn persist(&self, store: &impl PreferenceStore) {
        if self.persistence == Persistence::Remember {
            store.save(self.enabled);
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Denied looks muted like Paused but asks for the gesture it needs
    pub fn affordance(&self) -> Affordance {
        match self.state {
            PlaybackState::Playing => Affordance {
                icon: "🔊",
                pressed: true,
                muted: false,
                label: "Mute ambient audio",
            },
            PlaybackState::Paused => Affordance {
                icon: "🔇",
                pressed: false,
                muted: true,
                label: "Play ambient audio",
            },
            PlaybackState::Denied => Affordance {
                icon: "🔇",
                pressed: false,
                muted: true,
                label: "Tap to play ambient audio",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(ctrl: &mut AudioController, store: &MemoryStore) {
        match ctrl.toggle() {
            PlaybackAction::Play => ctrl.playback_started(),
            PlaybackAction::Pause => ctrl.playback_paused(),
        }
        ctrl.persist(store);
    }

    #[test]
    fn test_defaults_to_autoplay() {
        let ctrl = AudioController::new(Persistence::Off, Some(false));

        assert!(ctrl.wants_autoplay());
        assert_eq!(ctrl.state(), PlaybackState::Paused);
    }

    #[test]
    fn test_autoplay_denied_shows_paused_affordance() {
        let mut ctrl = AudioController::new(Persistence::Off, None);
        ctrl.playback_denied();

        assert_eq!(ctrl.state(), PlaybackState::Denied);
        let affordance = ctrl.affordance();
        assert!(affordance.muted);
        assert_eq!(affordance.aria_pressed(), "false");
        assert_eq!(affordance.icon, "🔇");
    }

    #[test]
    fn test_denied_label_differs_from_paused() {
        let mut ctrl = AudioController::new(Persistence::Off, None);
        let paused = ctrl.affordance();
        ctrl.playback_denied();
        let denied = ctrl.affordance();

        assert_eq!(denied.label, "Tap to play ambient audio");
        assert_ne!(denied.label, paused.label);
        assert_eq!(denied.icon, paused.icon);
    }

    #[test]
    fn test_click_while_playing_pauses() {
        let store = MemoryStore::new();
        let mut ctrl = AudioController::new(Persistence::Off, None);
        ctrl.playback_started();
        assert!(!ctrl.affordance().muted);

        click(&mut ctrl, &store);

        assert_eq!(ctrl.state(), PlaybackState::Paused);
        assert!(ctrl.affordance().muted);
        assert_eq!(ctrl.affordance().aria_pressed(), "false");
    }

    #[test]
    fn test_click_while_paused_or_denied_plays() {
        let store = MemoryStore::new();
        let mut ctrl = AudioController::new(Persistence::Off, None);
        ctrl.playback_denied();

        assert_eq!(ctrl.toggle(), PlaybackAction::Play);
        ctrl.playback_started();
        assert_eq!(ctrl.affordance().icon, "🔊");
        assert_eq!(ctrl.affordance().aria_pressed(), "true");

        click(&mut ctrl, &store);
        click(&mut ctrl, &store);
        assert_eq!(ctrl.state(), PlaybackState::Playing);
    }

    #[test]
    fn test_persistence_round_trip_across_reload() {
        let store = MemoryStore::new();
        let mut ctrl = AudioController::load(Persistence::Remember, &store);
        assert!(ctrl.wants_autoplay());
        ctrl.playback_started();

        click(&mut ctrl, &store);
        assert_eq!(store.load(), Some(false));

        let reloaded = AudioController::load(Persistence::Remember, &store);
        assert!(!reloaded.wants_autoplay());

        let mut ctrl = reloaded;
        click(&mut ctrl, &store);
        let reloaded = AudioController::load(Persistence::Remember, &store);
        assert!(reloaded.wants_autoplay());
    }

    #[test]
    fn test_without_persistence_nothing_is_written() {
        let store = MemoryStore::new();
        let mut ctrl = AudioController::load(Persistence::Off, &store);
        ctrl.playback_started();

        click(&mut ctrl, &store);

        assert_eq!(store.load(), None);
        assert!(AudioController::load(Persistence::Off, &store).wants_autoplay());
    }

    #[test]
    fn test_preference_encoding() {
        assert_eq!(decode_preference(encode_preference(true)), Some(true));
        assert_eq!(decode_preference(encode_preference(false)), Some(false));
        assert_eq!(decode_preference("maybe"), None);
    }
}
