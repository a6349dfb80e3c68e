//! Rotating highlight word
//!
//! Swaps a single word in a headline on a fixed interval. Unlike the typing
//! effect there are no intermediate states: the word is replaced whole and
//! the CSS fade does the rest.

use std::time::Duration;

use super::motion::MotionPreference;

/// Time each word stays on screen
pub const ROTATE_INTERVAL_MS: u64 = 2200;

#[derive(Clone, Debug)]
pub struct WordRotator {
    words: Vec<String>,
    index: usize,
    interval: Duration,
}

impl WordRotator {
    /// Returns `None` when there is nothing to rotate
    pub fn new<I, S>(words: I, motion: MotionPreference) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            index: 0,
            interval: motion.scale(Duration::from_millis(ROTATE_INTERVAL_MS)),
        })
    }

    pub fn current(&self) -> &str {
        &self.words[self.index]
    }

    /// Move to the next word, wrapping at the end
    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.words.len();
        self.current()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Single-word lists never need a timer
    pub fn is_static(&self) -> bool {
        self.words.len() < 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_word_list() {
        assert!(WordRotator::new(Vec::<String>::new(), MotionPreference::full()).is_none());
    }

    #[test]
    fn test_advance_wraps() {
        let mut rotator =
            WordRotator::new(["capture", "organize", "remember"], MotionPreference::full())
                .unwrap();

        assert_eq!(rotator.current(), "capture");
        assert_eq!(rotator.advance(), "organize");
        assert_eq!(rotator.advance(), "remember");
        assert_eq!(rotator.advance(), "capture");
    }

    #[test]
    fn test_single_word_is_static() {
        let mut rotator = WordRotator::new(["ideas"], MotionPreference::full()).unwrap();

        assert!(rotator.is_static());
        assert_eq!(rotator.advance(), "ideas");
    }

    #[test]
    fn test_interval_follows_motion() {
        let full = WordRotator::new(["a", "b"], MotionPreference::full()).unwrap();
        let reduced = WordRotator::new(["a", "b"], MotionPreference::reduced()).unwrap();

        assert_eq!(full.interval(), Duration::from_millis(ROTATE_INTERVAL_MS));
        assert!(reduced.interval() > full.interval());
    }
}
