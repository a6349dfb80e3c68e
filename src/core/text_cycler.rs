//! Typing/deleting phrase animation
//!
//! The cycler types a phrase one character at a time, holds it, deletes it
//! faster than it was typed, then moves on to the next phrase. The caller
//! drives it with a timer: each `tick` performs one step and returns how long
//! to wait before the next one.
//!
//! # Example
//! ```
//! use nora_landing::core::{CyclerTiming, TextCycler};
//!
//! let mut cycler = TextCycler::new(["hi"], CyclerTiming::default()).unwrap();
//! cycler.tick();
//! assert_eq!(cycler.text(), "h");
//! ```

use std::time::Duration;

use super::motion::MotionPreference;

/// Per-character delay while typing
pub const TYPING_DELAY_MS: u64 = 110;

/// Per-character delay while deleting
pub const DELETING_DELAY_MS: u64 = 50;

/// Hold time once a phrase is fully typed
pub const PAUSE_DELAY_MS: u64 = 1200;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CyclerError {
    #[error("phrase list is empty")]
    NoPhrases,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CyclerPhase {
    /// Offset increasing
    Typing,
    /// Offset at phrase length, waiting to delete
    PausedFull,
    /// Offset decreasing
    Deleting,
    /// Offset at zero, next step moves to the following phrase
    PausedEmpty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CyclerTiming {
    pub typing: Duration,
    pub deleting: Duration,
    pub pause: Duration,
}

impl CyclerTiming {
    /// Timing adjusted for the user's motion preference
    pub fn for_motion(self, motion: MotionPreference) -> Self {
        Self {
            typing: motion.scale(self.typing),
            deleting: motion.scale(self.deleting),
            pause: motion.scale(self.pause),
        }
    }
}

impl Default for CyclerTiming {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(TYPING_DELAY_MS),
            deleting: Duration::from_millis(DELETING_DELAY_MS),
            pause: Duration::from_millis(PAUSE_DELAY_MS),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TextCycler {
    phrases: Vec<String>,
    index: usize,
    /// Offset into the current phrase, in characters
    offset: usize,
    phase: CyclerPhase,
    timing: CyclerTiming,
}

impl TextCycler {
    pub fn new<I, S>(phrases: I, timing: CyclerTiming) -> Result<Self, CyclerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(CyclerError::NoPhrases);
        }
        Ok(Self {
            phrases,
            index: 0,
            offset: 0,
            phase: CyclerPhase::Typing,
            timing,
        })
    }

    /// Delay before the first tick
    pub fn start_delay(&self) -> Duration {
        self.timing.typing
    }

    /// Advance one step. Returns the delay until the next tick.
    pub fn tick(&mut self) -> Duration {
        match self.phase {
            CyclerPhase::Typing => self.type_char(),
            CyclerPhase::PausedFull => {
                self.phase = CyclerPhase::Deleting;
                self.delete_char()
            }
            CyclerPhase::Deleting => self.delete_char(),
            CyclerPhase::PausedEmpty => {
                self.index = (self.index + 1) % self.phrases.len();
                self.offset = 0;
                self.phase = CyclerPhase::Typing;
                self.type_char()
            }
        }
    }

    fn type_char(&mut self) -> Duration {
        let len = self.current_len();
        if self.offset < len {
            self.offset += 1;
        }
        if self.offset == len {
            self.phase = CyclerPhase::PausedFull;
            self.timing.pause
        } else {
            self.timing.typing
        }
    }

    fn delete_char(&mut self) -> Duration {
        self.offset = self.offset.saturating_sub(1);
        if self.offset == 0 {
            self.phase = CyclerPhase::PausedEmpty;
        }
        self.timing.deleting
    }

    fn current_len(&self) -> usize {
        self.phrases[self.index].chars().count()
    }

    /// Visible prefix of the current phrase
    pub fn text(&self) -> &str {
        let phrase = &self.phrases[self.index];
        let end = phrase
            .char_indices()
            .nth(self.offset)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    pub fn phase(&self) -> CyclerPhase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn phrase(&self) -> &str {
        &self.phrases[self.index]
    }

}
