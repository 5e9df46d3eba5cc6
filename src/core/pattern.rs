//! Revealed pattern of the secret word
//!
//! One slot per letter position. A slot starts hidden and is revealed when
//! the letter at that position has been guessed. Revealed slots never revert.

use super::{Letter, SecretWord};

/// A single letter position as seen by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Hidden,
    Revealed(Letter),
}

impl Slot {
    #[inline]
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    /// The revealed letter, if any
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<Letter> {
        match self {
            Self::Hidden => None,
            Self::Revealed(l) => Some(l),
        }
    }
}

/// The player's current view of the secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedPattern {
    slots: Vec<Slot>,
}

impl RevealedPattern {
    /// All-hidden pattern with one slot per letter of `word`
    #[must_use]
    pub fn hidden(word: &SecretWord) -> Self {
        Self {
            slots: vec![Slot::Hidden; word.len()],
        }
    }

    /// Reveal `letter` at every position it occupies in `word`
    ///
    /// Returns the number of slots that changed from hidden to revealed.
    pub fn reveal(&mut self, word: &SecretWord, letter: Letter) -> usize {
        let mut newly_revealed = 0;
        for &i in word.positions_of(letter) {
            if !self.slots[i].is_revealed() {
                self.slots[i] = Slot::Revealed(letter);
                newly_revealed += 1;
            }
        }
        newly_revealed
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True once no hidden slot remains
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.is_revealed())
    }
}
