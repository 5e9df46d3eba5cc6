//! Letters and letter sets
//!
//! The game only knows the 26 uppercase ASCII letters. A `Letter` is one of
//! them; a `LetterSet` is a 26-bit set of them.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// A single uppercase ASCII letter (A-Z)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, normalizing to uppercase
    ///
    /// Returns `None` for anything outside ASCII a-z/A-Z.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::new('q'), Letter::new('Q'));
    /// assert!(Letter::new('7').is_none());
    /// assert!(Letter::new('é').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self((c as u8).to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// The letter as an uppercase char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based alphabet index (A = 0, Z = 25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// Iterate over A..=Z in order
    pub fn all() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Set of letters stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    const FULL_MASK: u32 = (1 << ALPHABET_LEN) - 1;

    /// The empty set
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All 26 letters
    #[inline]
    #[must_use]
    pub const fn full() -> Self {
        Self(Self::FULL_MASK)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    /// Add a letter; returns `true` if it was not already present
    #[inline]
    pub const fn insert(&mut self, letter: Letter) -> bool {
        let was_absent = !self.contains(letter);
        self.0 |= 1 << letter.index();
        was_absent
    }

    /// Remove a letter; returns `true` if it was present
    #[inline]
    pub const fn remove(&mut self, letter: Letter) -> bool {
        let was_present = self.contains(letter);
        self.0 &= !(1 << letter.index());
        was_present
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |&l| self.contains(l))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::empty();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}
