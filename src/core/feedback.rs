//! Guess evaluation and per-letter feedback
//!
//! Feedback is the coloured verdict for each position of a guess:
//! - Absent (gray): the letter is not in the target, or every occurrence is used up
//! - Present (yellow): the letter is in the target at another position
//! - Correct (green): the letter is in the correct position

use super::{Letter, WORD_LENGTH, Word};
use std::fmt;

/// Verdict for a single letter of a guess
///
/// The derived ordering is the quality order Absent < Present < Correct.
/// Evaluation never looks at it; only the keyboard tracker ranks letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    Absent,
    Present,
    Correct,
}

impl Classification {
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for one evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Classification; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Classification::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(classifications: [Classification; WORD_LENGTH]) -> Self {
        Self(classifications)
    }

    /// Evaluate `guess` against `target`
    ///
    /// Implements Wordle's feedback rules, including duplicate letters: a
    /// letter is never reported Correct or Present more times than it occurs
    /// in the target.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and consume those target positions
    /// 2. Second pass: for each remaining guess position, left to right, take the
    ///    first unconsumed target position holding the same letter and mark Present
    ///
    /// # Examples
    /// ```
    /// use wordle_click::core::{Classification::*, Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &target);
    /// assert_eq!(feedback.classifications(), &[Present, Absent, Present, Present, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        Self(evaluate(guess.letters(), target.letters()))
    }

    /// Evaluate letter slices, for callers that do not hold [`Word`]s
    ///
    /// # Panics
    /// Panics if either slice is not exactly 5 letters long. This is a caller
    /// bug, so the input is never truncated or padded.
    #[must_use]
    pub fn from_letters(guess: &[Letter], target: &[Letter]) -> Self {
        let guess: &[Letter; WORD_LENGTH] = guess.try_into().unwrap_or_else(|_| {
            panic!(
                "guess must have exactly {WORD_LENGTH} letters, got {}",
                guess.len()
            )
        });
        let target: &[Letter; WORD_LENGTH] = target.try_into().unwrap_or_else(|_| {
            panic!(
                "target must have exactly {WORD_LENGTH} letters, got {}",
                target.len()
            )
        });
        Self(evaluate(guess, target))
    }

    #[inline]
    #[must_use]
    pub const fn classifications(&self) -> &[Classification; WORD_LENGTH] {
        &self.0
    }

    /// Classification at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Classification {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&c| c == Classification::Correct)
            .count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&c| c == Classification::Present)
            .count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_click::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [Classification::Absent; WORD_LENGTH];
        for (slot, ch) in result.iter_mut().zip(chars) {
            *slot = Classification::from_symbol(ch)?;
        }
        Some(Self(result))
    }

    /// Convert feedback to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

fn evaluate(
    guess: &[Letter; WORD_LENGTH],
    target: &[Letter; WORD_LENGTH],
) -> [Classification; WORD_LENGTH] {
    let mut result = [Classification::Absent; WORD_LENGTH];
    let mut consumed = [false; WORD_LENGTH];

    // First pass: exact position matches
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess[i] == target[i] {
            result[i] = Classification::Correct;
            consumed[i] = true;
        }
    }

    // Second pass: displaced matches, first unconsumed target position wins
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] != Classification::Absent {
            continue;
        }
        if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && target[j] == guess[i]) {
            result[i] = Classification::Present;
            consumed[j] = true;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::Classification::{Absent, Correct, Present};
    use super::*;

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn feedback_all_absent() {
        let f = feedback("abcde", "fghij");
        assert_eq!(f.classifications(), &[Absent; 5]);
        assert_eq!(f.count_correct(), 0);
        assert_eq!(f.count_present(), 0);
    }

    #[test]
    fn feedback_all_correct() {
        let f = feedback("crane", "crane");
        assert_eq!(f, Feedback::PERFECT);
        assert!(f.is_perfect());
    }

    #[test]
    fn feedback_without_repeats_matches_positional_comparison() {
        let f = feedback("crane", "crate");
        assert_eq!(f.classifications(), &[Correct, Correct, Correct, Absent, Correct]);

        let f = feedback("mouse", "house");
        assert_eq!(f.classifications(), &[Absent, Correct, Correct, Correct, Correct]);
    }

    #[test]
    fn feedback_duplicate_guess_letters_consume_target_occurrences() {
        // S is at position 3 in ERASE; both E's of SPEED find an E in ERASE
        let f = feedback("speed", "erase");
        assert_eq!(f.classifications(), &[Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn feedback_exact_matches_consume_before_displaced() {
        // ELITE's two E's are both taken by exact matches, so the second E of
        // EERIE has nothing left to match
        let f = feedback("eerie", "elite");
        assert_eq!(f.classifications(), &[Correct, Absent, Absent, Present, Correct]);
    }

    #[test]
    fn feedback_repeated_guess_letter_single_in_target() {
        // HOTEL has a single L: only the first L of LLAMA gets it
        let f = feedback("llama", "hotel");
        assert_eq!(f.classifications(), &[Present, Absent, Absent, Absent, Absent]);

        // The exact match takes the L before the earlier displaced one can
        let f = feedback("level", "hotel");
        assert_eq!(f.classifications(), &[Absent, Absent, Absent, Correct, Correct]);
    }

    #[test]
    fn feedback_duplicate_letters_complex() {
        // R(yellow) O(yellow) B(gray) O(green) T(gray)
        let f = feedback("robot", "floor");
        assert_eq!(f.classifications(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn feedback_handles_enye() {
        let f = feedback("niñas", "niños");
        assert_eq!(f.classifications(), &[Correct, Correct, Correct, Absent, Correct]);
    }

    #[test]
    fn feedback_counts_never_exceed_target_occurrences() {
        let words = [
            "speed", "erase", "eerie", "elite", "llama", "hotel", "robot", "floor", "geese",
            "sheep", "abbey", "babes", "aaaaa", "crane", "otter", "level",
        ];
        let words: Vec<Word> = words.iter().filter_map(|w| Word::new(w).ok()).collect();

        for guess in &words {
            for target in &words {
                let f = Feedback::calculate(guess, target);

                let exact = (0..WORD_LENGTH)
                    .filter(|&i| guess.letter_at(i) == target.letter_at(i))
                    .count();
                assert_eq!(f.count_correct(), exact, "{guess} vs {target}");

                for &letter in guess.letters() {
                    let marked = (0..WORD_LENGTH)
                        .filter(|&i| guess.letter_at(i) == letter && f.get(i) != Absent)
                        .count();
                    assert!(
                        marked <= target.count_of(letter),
                        "{guess} vs {target}: {letter} marked {marked} times"
                    );
                }
            }
        }
    }

    #[test]
    fn feedback_is_deterministic() {
        let a = feedback("geese", "sheep");
        let b = feedback("geese", "sheep");
        assert_eq!(a, b);
    }

    #[test]
    fn from_letters_accepts_exact_length() {
        let guess = Word::new("mouse").unwrap();
        let target = Word::new("house").unwrap();
        assert_eq!(
            Feedback::from_letters(guess.letters(), target.letters()),
            Feedback::calculate(&guess, &target)
        );
    }

    #[test]
    #[should_panic(expected = "guess must have exactly 5 letters")]
    fn from_letters_rejects_short_guess() {
        let target = Word::new("house").unwrap();
        let _ = Feedback::from_letters(&target.letters()[..4], target.letters());
    }

    #[test]
    #[should_panic(expected = "target must have exactly 5 letters")]
    fn from_letters_rejects_long_target() {
        let guess = Word::new("house").unwrap();
        let mut long = guess.letters().to_vec();
        long.push(guess.letter_at(0));
        let _ = Feedback::from_letters(guess.letters(), &long);
    }

    #[test]
    fn feedback_parse_valid() {
        let f1 = Feedback::parse("GYG--").unwrap();
        let f2 = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let f3 = Feedback::parse("gyg__").unwrap();

        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(f1.classifications(), &[Correct, Present, Correct, Absent, Absent]);
    }

    #[test]
    fn feedback_parse_invalid() {
        assert!(Feedback::parse("GYGGYX").is_none());
        assert!(Feedback::parse("GYG").is_none());
        assert!(Feedback::parse("GXGGY").is_none());
        assert!(Feedback::parse("").is_none());
    }

    #[test]
    fn feedback_renders_emoji_and_symbols() {
        let f = feedback("robot", "floor");
        assert_eq!(f.to_emoji(), "🟨🟨⬜🟩⬜");
        assert_eq!(f.to_string(), "YY-G-");
    }

    #[test]
    fn classification_quality_order() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }
}
