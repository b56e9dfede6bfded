//! Game session state machine
//!
//! A session owns one secret word and an attempts counter. Guesses are scored
//! against the secret until the player wins or runs out of attempts; a
//! terminal session is replaced, never resumed.

use crate::core::{Verdict, Word, WordError};
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;

/// Guesses a player gets per game
pub const MAX_ATTEMPTS: u32 = 6;

/// Errors raised by session creation and guess submission
#[derive(Debug, Error)]
pub enum GameError {
    /// The supplied word list had no entries to pick a secret from
    #[error("cannot start a game: the word list is empty")]
    EmptyWordList,

    /// The guess failed validation; no session state was touched
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] WordError),
}

/// Observable lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Attempts remain and the word has not been found
    Active,
    /// The secret word was guessed (terminal)
    Won,
    /// All attempts used without a win (terminal)
    Exhausted,
}

/// Result of submitting a valid 5-letter guess
///
/// A terminal session answers with `Exhausted` instead of overloading the
/// verdict shape, so callers cannot mistake a "game over" signal for a
/// per-letter score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was scored against the secret word
    Scored {
        verdict: Verdict,
        /// True iff the normalized guess equals the secret word
        won: bool,
    },
    /// The session was already terminal; nothing was scored
    Exhausted,
}

/// One in-progress or finished game
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    attempts_remaining: u32,
    won: bool,
}

impl GameSession {
    /// Start a new session with a secret chosen uniformly at random
    ///
    /// The random source is injected so tests can seed it; production callers
    /// pass `&mut rand::rng()`.
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_game::core::Word;
    /// use wordle_game::game::GameSession;
    ///
    /// let words = vec![Word::new("crane").unwrap()];
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let session = GameSession::new(&words, &mut rng).unwrap();
    /// assert_eq!(session.attempts_remaining(), 6);
    /// ```
    pub fn new<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Result<Self, GameError> {
        let secret = words.choose(rng).ok_or(GameError::EmptyWordList)?.clone();

        Ok(Self {
            secret,
            attempts_remaining: MAX_ATTEMPTS,
            won: false,
        })
    }

    /// Submit a guess for scoring
    ///
    /// Validation happens first: an empty or non-5-letter guess fails with
    /// `GameError::InvalidGuess` before the attempts counter is consulted,
    /// and consumes nothing. A terminal session (won or out of attempts)
    /// returns `GuessOutcome::Exhausted` without scoring or decrementing.
    /// Otherwise one attempt is consumed and the guess is scored with the
    /// two-pass duplicate-aware algorithm.
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuess` when the guess is not a valid
    /// 5-letter word.
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome, GameError> {
        let guess = Word::new(guess)?;

        if self.state() != SessionState::Active {
            return Ok(GuessOutcome::Exhausted);
        }

        self.attempts_remaining -= 1;

        let verdict = Verdict::calculate(&guess, &self.secret);
        let won = guess == self.secret;
        self.won = won;

        Ok(GuessOutcome::Scored { verdict, won })
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        if self.won {
            SessionState::Won
        } else if self.attempts_remaining == 0 {
            SessionState::Exhausted
        } else {
            SessionState::Active
        }
    }

    /// Attempts left before the session exhausts
    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Attempts consumed so far
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        MAX_ATTEMPTS - self.attempts_remaining
    }

    /// The secret word
    ///
    /// Drivers reveal it when the game is lost; peeking mid-game is the
    /// caller's own spoiler.
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word_list(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn session_with_secret(secret: &str) -> GameSession {
        let words = word_list(&[secret]);
        let mut rng = StdRng::seed_from_u64(0);
        GameSession::new(&words, &mut rng).unwrap()
    }

    #[test]
    fn new_session_selects_word_from_list() {
        let words = word_list(&["crane", "slate", "audio", "pious"]);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let session = GameSession::new(&words, &mut rng).unwrap();
            assert!(words.contains(session.secret()));
        }
    }

    #[test]
    fn new_session_starts_with_six_attempts() {
        let session = session_with_secret("crane");
        assert_eq!(session.attempts_remaining(), 6);
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn new_session_empty_list_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = GameSession::new(&[], &mut rng);
        assert!(matches!(result, Err(GameError::EmptyWordList)));
    }

    #[test]
    fn winning_guess_scores_all_correct() {
        let mut session = session_with_secret("crane");
        let outcome = session.submit_guess("crane").unwrap();

        match outcome {
            GuessOutcome::Scored { verdict, won } => {
                assert!(won);
                assert!(verdict.is_all_correct());
            }
            GuessOutcome::Exhausted => panic!("expected a scored outcome"),
        }
        assert_eq!(session.state(), SessionState::Won);
    }

    #[test]
    fn winning_guess_is_case_insensitive() {
        let mut session = session_with_secret("CRANE");
        let outcome = session.submit_guess("cRaNe").unwrap();
        assert!(matches!(outcome, GuessOutcome::Scored { won: true, .. }));
    }

    #[test]
    fn invalid_guess_rejected_without_consuming_attempt() {
        let mut session = session_with_secret("crane");

        assert!(matches!(
            session.submit_guess(""),
            Err(GameError::InvalidGuess(WordError::InvalidLength(0)))
        ));
        assert!(matches!(
            session.submit_guess("longer"),
            Err(GameError::InvalidGuess(WordError::InvalidLength(6)))
        ));
        assert!(matches!(
            session.submit_guess("cr4ne"),
            Err(GameError::InvalidGuess(WordError::InvalidCharacters))
        ));

        assert_eq!(session.attempts_remaining(), 6);
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn each_scored_guess_consumes_one_attempt() {
        let mut session = session_with_secret("crane");

        for used in 1..=3 {
            session.submit_guess("slate").unwrap();
            assert_eq!(session.attempts_used(), used);
            assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS - used);
        }
    }

    #[test]
    fn six_misses_exhaust_the_session() {
        let mut session = session_with_secret("crane");

        for _ in 0..MAX_ATTEMPTS {
            let outcome = session.submit_guess("slate").unwrap();
            assert!(matches!(outcome, GuessOutcome::Scored { won: false, .. }));
        }

        assert_eq!(session.attempts_remaining(), 0);
        assert_eq!(session.state(), SessionState::Exhausted);

        // Seventh call signals terminal state and never decrements below 0
        let outcome = session.submit_guess("slate").unwrap();
        assert_eq!(outcome, GuessOutcome::Exhausted);
        assert_eq!(session.attempts_remaining(), 0);
    }

    #[test]
    fn validation_still_applies_when_exhausted() {
        let mut session = session_with_secret("crane");
        for _ in 0..MAX_ATTEMPTS {
            session.submit_guess("slate").unwrap();
        }

        // Bad input is an error even on a terminal session
        assert!(session.submit_guess("no").is_err());
        assert_eq!(session.submit_guess("slate").unwrap(), GuessOutcome::Exhausted);
    }

    #[test]
    fn won_session_is_terminal() {
        let mut session = session_with_secret("crane");
        session.submit_guess("crane").unwrap();
        assert_eq!(session.state(), SessionState::Won);

        // No transitions out of Won; further guesses are not scored
        let outcome = session.submit_guess("slate").unwrap();
        assert_eq!(outcome, GuessOutcome::Exhausted);
        assert_eq!(session.attempts_remaining(), 5);
        assert_eq!(session.state(), SessionState::Won);
    }

    #[test]
    fn win_on_last_attempt_counts_as_won() {
        let mut session = session_with_secret("crane");
        for _ in 0..(MAX_ATTEMPTS - 1) {
            session.submit_guess("slate").unwrap();
        }

        let outcome = session.submit_guess("crane").unwrap();
        assert!(matches!(outcome, GuessOutcome::Scored { won: true, .. }));
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.attempts_used(), MAX_ATTEMPTS);
    }

    #[test]
    fn scored_verdict_matches_two_pass_algorithm() {
        let mut session = session_with_secret("crane");
        let outcome = session.submit_guess("trace").unwrap();

        match outcome {
            GuessOutcome::Scored { verdict, won } => {
                assert!(!won);
                assert_eq!(verdict.as_row(), "-GGYG");
            }
            GuessOutcome::Exhausted => panic!("expected a scored outcome"),
        }
    }
}
