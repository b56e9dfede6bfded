//! Per-letter guess scoring
//!
//! A verdict holds one score per guess position:
//! - `Absent`  - letter not in the secret word
//! - `Present` - letter in the secret word, wrong position
//! - `Correct` - letter in the correct position

use super::Word;

/// Score for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    Absent,
    Present,
    Correct,
}

impl LetterScore {
    /// Compact character form: `G` correct, `Y` present, `-` absent
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback verdict for one scored guess
///
/// One `LetterScore` per position, produced fresh per guess and immutable
/// afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict([LetterScore; 5]);

impl Verdict {
    /// All positions correct (winning guess)
    pub const PERFECT: Self = Self([LetterScore::Correct; 5]);

    /// Calculate the verdict when `guess` is scored against `secret`
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (Correct) and remove each matched
    ///    letter from the secret's available pool
    /// 2. Second pass: Mark present-but-wrong-position (Present) from the
    ///    remaining pool, consuming one occurrence per mark
    ///
    /// A letter the guess repeats can never earn more Correct/Present marks
    /// than the secret contains occurrences of it.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Verdict, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let verdict = Verdict::calculate(&guess, &secret);
    ///
    /// // T(absent) R(correct) A(correct) C(present) E(correct)
    /// assert_eq!(verdict.as_row(), "-GGYG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut scores = [LetterScore::Absent; 5];
        let mut secret_available = secret.letter_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], secret[i], and set scores[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.letters()[i] == secret.letters()[i] {
                scores[i] = LetterScore::Correct;

                // Remove from available pool
                let letter = guess.letters()[i];
                if let Some(count) = secret_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        // Allow: Index needed to access guess[i] and check/set scores[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if scores[i] == LetterScore::Absent {
                let letter = guess.letters()[i];
                if let Some(count) = secret_available.get_mut(&letter)
                    && *count > 0
                {
                    scores[i] = LetterScore::Present;
                    *count -= 1;
                }
            }
        }

        Self(scores)
    }

    /// Per-position scores, in guess order
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; 5] {
        &self.0
    }

    /// Check if every position is correct (winning verdict)
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.0.iter().all(|&s| s == LetterScore::Correct)
    }

    /// Count the number of Correct marks
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterScore::Correct).count()
    }

    /// Count the number of Present marks
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterScore::Present).count()
    }

    /// Compact row form, e.g. `"-GYYG"`
    ///
    /// This is the encoding stored in a game's grid history.
    #[must_use]
    pub fn as_row(&self) -> String {
        self.0.iter().map(|s| s.as_char()).collect()
    }

    /// Convert verdict to emoji squares
    ///
    /// Returns a string like "🟩🟨⬜🟩🟨".
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|s| match s {
                LetterScore::Correct => '🟩',
                LetterScore::Present => '🟨',
                LetterScore::Absent => '⬜',
            })
            .collect()
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_row())
    }
}
