//! Hangman round state machine
//!
//! `GameEngine` owns everything about one round: the secret word, the revealed
//! pattern, the guess history, the wrong guesses and the letters still
//! available. A round moves from `InProgress` to `Won` or `Lost` and never
//! leaves a terminal state; a new round needs a new engine.

use super::error::{GameError, InvalidInput};
use crate::core::{Letter, LetterSet, RevealedPattern, SecretWord};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use tracing::{debug, info, trace};

/// Maximum number of wrong guesses tolerated before the round is lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WrongGuessLimit(usize);

impl WrongGuessLimit {
    #[inline]
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self(limit)
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for WrongGuessLimit {
    type Error = GameError;

    /// Zero is valid (the first miss loses); negative values are rejected.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .map(Self)
            .map_err(|_| InvalidInput::NegativeLimit(value).into())
    }
}

/// Round state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Result of a successfully applied guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The normalized (uppercase) letter that was applied
    pub letter: Letter,
    /// Whether the letter occurs in the secret word
    pub hit: bool,
    /// Slots revealed by this guess (0 on a miss)
    pub revealed: usize,
    /// Round status after applying the guess
    pub status: RoundStatus,
}

/// Read-only snapshot of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status<'a> {
    pub pattern: &'a RevealedPattern,
    pub history: &'a [Letter],
    pub wrong_guesses: usize,
    pub remaining: usize,
    pub round: RoundStatus,
}

/// Pick one word uniformly at random
///
/// Returns `None` only for an empty list.
#[must_use]
pub fn select_word<'w, S, R>(words: &'w [S], rng: &mut R) -> Option<&'w S>
where
    R: Rng + ?Sized,
{
    words.choose(rng)
}

/// Single-round hangman engine
#[derive(Debug, Clone)]
pub struct GameEngine {
    word: SecretWord,
    pattern: RevealedPattern,
    history: Vec<Letter>,
    wrong: LetterSet,
    available: LetterSet,
    limit: WrongGuessLimit,
    status: RoundStatus,
}

impl GameEngine {
    /// Start a round with a word chosen at random from `words`
    ///
    /// Every entry must be a non-empty string of ASCII letters.
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the list is empty or any entry is
    /// not a playable word.
    ///
    /// # Examples
    /// ```
    /// use hangman::engine::{GameEngine, RoundStatus, WrongGuessLimit};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let engine = GameEngine::new(&["apple", "pear"], WrongGuessLimit::new(6), &mut rng).unwrap();
    ///
    /// let status = engine.status();
    /// assert_eq!(status.round, RoundStatus::InProgress);
    /// assert_eq!(status.remaining, 6);
    /// assert!(status.history.is_empty());
    /// ```
    pub fn new<S, R>(words: &[S], limit: WrongGuessLimit, rng: &mut R) -> Result<Self, GameError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        for (index, word) in words.iter().enumerate() {
            SecretWord::validate(word.as_ref())
                .map_err(|source| InvalidInput::InvalidWord { index, source })?;
        }

        let chosen = select_word(words, rng).ok_or(InvalidInput::EmptyWordList)?;
        Self::with_word(chosen.as_ref(), limit)
    }

    /// Start a round with a known secret word
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if `word` is empty or contains
    /// anything other than ASCII letters.
    pub fn with_word(word: &str, limit: WrongGuessLimit) -> Result<Self, GameError> {
        let word = SecretWord::new(word)
            .map_err(|source| InvalidInput::InvalidWord { index: 0, source })?;

        info!(
            word_len = word.len(),
            limit = limit.get(),
            "Starting new round"
        );
        trace!(secret = %word, "Secret word selected");

        Ok(Self {
            pattern: RevealedPattern::hidden(&word),
            word,
            history: Vec::new(),
            wrong: LetterSet::empty(),
            available: LetterSet::full(),
            limit,
            status: RoundStatus::InProgress,
        })
    }

    /// Apply one guess
    ///
    /// The letter is case-insensitive. On success the guess is recorded
    /// exactly once, and on a hit every matching slot is revealed.
    ///
    /// # Errors
    /// - `GameError::RoundAlreadyOver` if the round is won or lost
    /// - `GameError::InvalidGuess` if `guess` is not a letter or has already
    ///   been guessed
    ///
    /// Neither error changes the engine state.
    pub fn submit_guess(&mut self, guess: char) -> Result<GuessOutcome, GameError> {
        if self.status.is_over() {
            return Err(GameError::RoundAlreadyOver);
        }

        let letter = Letter::new(guess)
            .filter(|&l| self.available.contains(l))
            .ok_or(GameError::InvalidGuess(guess))?;

        self.available.remove(letter);
        self.history.push(letter);

        let hit = self.word.has_letter(letter);
        let revealed = if hit {
            self.pattern.reveal(&self.word, letter)
        } else {
            self.wrong.insert(letter);
            0
        };

        self.status = self.evaluate();

        debug!(
            %letter,
            hit,
            revealed,
            wrong = self.wrong.len(),
            status = %self.status,
            "Guess applied"
        );
        if self.status.is_over() {
            info!(status = %self.status, guesses = self.history.len(), "Round over");
        }

        Ok(GuessOutcome {
            letter,
            hit,
            revealed,
            status: self.status,
        })
    }

    // Won takes precedence over Lost.
    fn evaluate(&self) -> RoundStatus {
        if self.pattern.is_complete() {
            RoundStatus::Won
        } else if self.wrong.len() >= self.limit.get() && !self.wrong.is_empty() {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Current view of the round
    #[must_use]
    pub fn status(&self) -> Status<'_> {
        Status {
            pattern: &self.pattern,
            history: &self.history,
            wrong_guesses: self.wrong.len(),
            remaining: self.remaining(),
            round: self.status,
        }
    }

    /// Wrong guesses still allowed before the round is lost
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.limit.get().saturating_sub(self.wrong.len())
    }

    #[inline]
    #[must_use]
    pub const fn round_status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn available(&self) -> LetterSet {
        self.available
    }

    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> LetterSet {
        self.wrong
    }

    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    /// The secret word, only once the round is over
    #[must_use]
    pub fn secret(&self) -> Option<&SecretWord> {
        self.status.is_over().then_some(&self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ALPHABET_LEN, Slot, WordError};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine(word: &str, limit: usize) -> GameEngine {
        GameEngine::with_word(word, WrongGuessLimit::new(limit)).unwrap()
    }

    fn pattern_string(engine: &GameEngine) -> String {
        engine
            .status()
            .pattern
            .slots()
            .iter()
            .map(|s| s.letter().map_or('_', Letter::as_char))
            .collect()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    /// Every letter is wrong, correctly guessed, or still available
    fn assert_partition(engine: &GameEngine) {
        let correct: LetterSet = engine
            .status()
            .history
            .iter()
            .copied()
            .filter(|&l| !engine.wrong_guesses().contains(l))
            .collect();

        assert_eq!(
            engine.wrong_guesses().len() + correct.len() + engine.available().len(),
            ALPHABET_LEN
        );
        for l in Letter::all() {
            let memberships = [
                engine.wrong_guesses().contains(l),
                correct.contains(l),
                engine.available().contains(l),
            ];
            assert_eq!(memberships.iter().filter(|&&m| m).count(), 1, "{l}");
        }
    }

    #[test]
    fn new_round_initial_state() {
        let mut rng = StdRng::seed_from_u64(42);
        let words = ["alpha", "beta", "gamma"];
        let engine = GameEngine::new(&words, WrongGuessLimit::new(5), &mut rng).unwrap();
        let status = engine.status();

        assert!(
            words
                .iter()
                .any(|w| w.len() == status.pattern.len())
        );
        assert!(status.pattern.slots().iter().all(|&s| s == Slot::Hidden));
        assert_eq!(engine.available(), LetterSet::full());
        assert!(engine.wrong_guesses().is_empty());
        assert!(status.history.is_empty());
        assert_eq!(status.wrong_guesses, 0);
        assert_eq!(status.remaining, 5);
        assert_eq!(status.round, RoundStatus::InProgress);
        assert!(engine.secret().is_none());
    }

    #[test]
    fn new_rejects_empty_list() {
        let mut rng = StdRng::seed_from_u64(1);
        let words: [&str; 0] = [];
        assert_eq!(
            GameEngine::new(&words, WrongGuessLimit::new(3), &mut rng).unwrap_err(),
            GameError::InvalidInput(InvalidInput::EmptyWordList)
        );
    }

    #[test]
    fn new_rejects_list_with_empty_word() {
        let mut rng = StdRng::seed_from_u64(1);
        let words = vec!["cat".to_string(), String::new()];
        let err = GameEngine::new(words.as_slice(), WrongGuessLimit::new(3), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidInput(InvalidInput::InvalidWord { index: 1, .. })
        ));
    }

    #[test]
    fn new_reports_first_unplayable_entry() {
        let mut rng = StdRng::seed_from_u64(5);
        let words = ["apple", "pear", "x-ray", "ice cream"];
        assert_eq!(
            GameEngine::new(&words, WrongGuessLimit::new(3), &mut rng).unwrap_err(),
            GameError::InvalidInput(InvalidInput::InvalidWord {
                index: 2,
                source: WordError::InvalidCharacter('-'),
            })
        );
    }

    #[test]
    fn with_word_rejects_non_letters() {
        assert!(matches!(
            GameEngine::with_word("o'clock", WrongGuessLimit::new(3)),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn selection_is_deterministic_for_seed() {
        let words = ["one", "two", "three", "four", "five"];
        let a = select_word(&words, &mut StdRng::seed_from_u64(9));
        let b = select_word(&words, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert!(a.is_some());
    }

    #[test]
    fn selection_covers_every_word() {
        let words = ["ant", "bee", "cow"];
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let chosen = select_word(&words, &mut rng).unwrap();
            let i = words.iter().position(|w| w == chosen).unwrap();
            seen[i] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn single_word_list_always_picks_it() {
        let mut rng = StdRng::seed_from_u64(0);
        let engine = GameEngine::new(&["Solo"], WrongGuessLimit::new(1), &mut rng).unwrap();
        assert_eq!(engine.word_len(), 4);
    }

    #[test]
    fn limit_from_signed() {
        assert_eq!(WrongGuessLimit::try_from(0).unwrap().get(), 0);
        assert_eq!(WrongGuessLimit::try_from(8).unwrap().get(), 8);
        assert_eq!(
            WrongGuessLimit::try_from(-1),
            Err(GameError::InvalidInput(InvalidInput::NegativeLimit(-1)))
        );
    }

    #[test]
    fn scenario_cat_win() {
        let mut game = engine("cat", 2);

        let outcome = game.submit_guess('C').unwrap();
        assert!(outcome.hit);
        assert_eq!(outcome.status, RoundStatus::InProgress);
        assert_eq!(pattern_string(&game), "C__");

        let outcome = game.submit_guess('A').unwrap();
        assert!(outcome.hit);
        assert_eq!(pattern_string(&game), "CA_");

        let outcome = game.submit_guess('T').unwrap();
        assert!(outcome.hit);
        assert_eq!(outcome.status, RoundStatus::Won);
        assert_eq!(pattern_string(&game), "CAT");
        assert_eq!(game.secret().unwrap().text(), "CAT");
    }

    #[test]
    fn scenario_dog_loss() {
        let mut game = engine("dog", 1);

        let outcome = game.submit_guess('X').unwrap();
        assert!(!outcome.hit);
        assert_eq!(outcome.status, RoundStatus::Lost);
        assert_eq!(game.wrong_guesses().iter().collect::<Vec<_>>(), [letter('X')]);
        assert_eq!(game.status().remaining, 0);

        let before = game.clone();
        assert_eq!(game.submit_guess('D'), Err(GameError::RoundAlreadyOver));
        assert_eq!(game.status(), before.status());
        assert_eq!(game.available(), before.available());
    }

    #[test]
    fn scenario_bass_repeated_letter() {
        let mut game = engine("bass", 3);

        let outcome = game.submit_guess('s').unwrap();
        assert!(outcome.hit);
        assert_eq!(outcome.revealed, 2);
        assert_eq!(outcome.letter, letter('S'));
        assert_eq!(pattern_string(&game), "__SS");
        assert!(game.wrong_guesses().is_empty());
    }

    #[test]
    fn zero_limit_loses_on_first_miss() {
        let mut game = engine("dog", 0);
        assert_eq!(game.status().remaining, 0);

        // hits are still fine
        assert_eq!(game.submit_guess('d').unwrap().status, RoundStatus::InProgress);
        assert_eq!(game.submit_guess('z').unwrap().status, RoundStatus::Lost);
    }

    #[test]
    fn zero_limit_can_still_win() {
        let mut game = engine("aa", 0);
        assert_eq!(game.submit_guess('a').unwrap().status, RoundStatus::Won);
    }

    #[test]
    fn miss_adds_exactly_one_wrong_and_keeps_pattern() {
        let mut game = engine("rust", 5);
        game.submit_guess('r').unwrap();
        let pattern_before = game.status().pattern.clone();

        let outcome = game.submit_guess('q').unwrap();
        assert!(!outcome.hit);
        assert_eq!(outcome.revealed, 0);
        assert_eq!(game.status().wrong_guesses, 1);
        assert_eq!(game.status().remaining, 4);
        assert_eq!(game.status().pattern, &pattern_before);
    }

    #[test]
    fn hit_never_changes_wrong_guesses() {
        let mut game = engine("letter", 5);
        game.submit_guess('x').unwrap();
        let wrong_before = game.wrong_guesses();

        let outcome = game.submit_guess('t').unwrap();
        assert_eq!(outcome.revealed, 2);
        assert_eq!(game.wrong_guesses(), wrong_before);
        assert_eq!(pattern_string(&game), "__TT__");
    }

    #[test]
    fn repeated_guess_is_invalid_and_state_unchanged() {
        let mut game = engine("cat", 3);
        game.submit_guess('c').unwrap();
        game.submit_guess('q').unwrap();
        let before = game.clone();

        assert_eq!(game.submit_guess('C'), Err(GameError::InvalidGuess('C')));
        assert_eq!(game.submit_guess('q'), Err(GameError::InvalidGuess('q')));
        assert_eq!(game.status(), before.status());
        assert_eq!(game.available(), before.available());
        assert_eq!(game.wrong_guesses(), before.wrong_guesses());
    }

    #[test]
    fn non_letter_guess_is_invalid() {
        let mut game = engine("cat", 3);
        for c in ['1', ' ', '?', 'ä'] {
            assert_eq!(game.submit_guess(c), Err(GameError::InvalidGuess(c)));
        }
        assert_eq!(game.available().len(), ALPHABET_LEN);
        assert!(game.status().history.is_empty());
    }

    #[test]
    fn status_is_idempotent() {
        let mut game = engine("hello", 4);
        game.submit_guess('l').unwrap();
        game.submit_guess('z').unwrap();

        let first = game.status();
        let second = game.status();
        assert_eq!(first, second);
        assert_eq!(game.available(), game.clone().available());
    }

    #[test]
    fn history_keeps_guess_order() {
        let mut game = engine("hello", 10);
        for c in ['z', 'h', 'Q', 'e'] {
            game.submit_guess(c).unwrap();
        }
        let history: String = game.status().history.iter().map(|l| l.as_char()).collect();
        assert_eq!(history, "ZHQE");
    }

    #[test]
    fn alphabet_partition_holds_through_a_round() {
        let mut game = engine("mississippi", 26);
        assert_partition(&game);

        for c in "zmaixsqp".chars() {
            if game.round_status().is_over() {
                break;
            }
            game.submit_guess(c).unwrap();
            assert_partition(&game);
        }
        assert_eq!(game.round_status(), RoundStatus::Won);
    }

    #[test]
    fn terminal_state_rejects_everything() {
        let mut game = engine("a", 1);
        assert_eq!(game.submit_guess('a').unwrap().status, RoundStatus::Won);

        for c in ['a', 'b', '!'] {
            assert_eq!(game.submit_guess(c), Err(GameError::RoundAlreadyOver));
        }
        assert_eq!(game.status().history.len(), 1);
    }

    #[test]
    fn loss_at_exact_limit() {
        let mut game = engine("cat", 2);
        assert_eq!(game.submit_guess('x').unwrap().status, RoundStatus::InProgress);
        assert_eq!(game.status().remaining, 1);
        assert_eq!(game.submit_guess('y').unwrap().status, RoundStatus::Lost);
        assert_eq!(game.secret().map(SecretWord::text), Some("CAT"));
    }
}
