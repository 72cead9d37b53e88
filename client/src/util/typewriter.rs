//! Typewriter effect for the hero role line.
//!
//! DESIGN
//! ======
//! Pure state machine: each [`Typewriter::tick`] advances by one character and
//! returns how long to wait before the next tick. The hero component drives it
//! from a timer task, so the animation is testable without a clock.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Delay between typed characters.
pub const TYPE_DELAY_MS: u32 = 90;
/// Delay between deleted characters.
pub const DELETE_DELAY_MS: u32 = 45;
/// Pause once a word is fully typed.
pub const HOLD_DELAY_MS: u32 = 1600;
/// Pause after a word is fully deleted, before the next one starts.
pub const NEXT_DELAY_MS: u32 = 400;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// Cycles through `words`, typing then deleting each.
#[derive(Clone, Debug)]
pub struct Typewriter {
    words: Vec<String>,
    word: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { words: words.into_iter().map(Into::into).collect(), word: 0, shown: 0, phase: Phase::Typing }
    }

    /// Currently visible prefix of the active word.
    pub fn text(&self) -> String {
        self.words
            .get(self.word)
            .map(|w| w.chars().take(self.shown).collect())
            .unwrap_or_default()
    }

    /// Index of the active word.
    pub fn word_index(&self) -> usize {
        self.word
    }

    /// Advance one step. Returns the delay in milliseconds before the next tick.
    pub fn tick(&mut self) -> u32 {
        let Some(len) = self.words.get(self.word).map(|w| w.chars().count()) else {
            return HOLD_DELAY_MS;
        };
        match self.phase {
            Phase::Typing if self.shown < len => {
                self.shown += 1;
                if self.shown == len {
                    self.phase = Phase::Deleting;
                    HOLD_DELAY_MS
                } else {
                    TYPE_DELAY_MS
                }
            }
            Phase::Typing => {
                self.phase = Phase::Deleting;
                HOLD_DELAY_MS
            }
            Phase::Deleting if self.shown > 0 => {
                self.shown -= 1;
                if self.shown == 0 {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = Phase::Typing;
                    NEXT_DELAY_MS
                } else {
                    DELETE_DELAY_MS
                }
            }
            Phase::Deleting => {
                self.word = (self.word + 1) % self.words.len();
                self.phase = Phase::Typing;
                NEXT_DELAY_MS
            }
        }
    }
}
