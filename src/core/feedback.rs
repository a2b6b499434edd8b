//! Guess evaluation and per-cell letter states
//!
//! Feedback for a guess is a sequence of [`LetterState`], one per board cell:
//! - `Correct` = letter in the right position
//! - `Present` = letter in the word, wrong position
//! - `Absent` = letter not in the word (or all its occurrences already scored)
//!
//! `Empty`, `Revealed` and `Hinted` never come out of [`evaluate`]; they are
//! display states for untyped cells and for disclosed letters.

use rustc_hash::FxHashMap;

/// Display state of a single board cell or keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    Empty,
    Correct,
    Present,
    Absent,
    Revealed,
    Hinted,
}

impl LetterState {
    /// Share-grid symbol for an evaluated cell
    ///
    /// Only `Correct`, `Present` and `Absent` appear in submitted rows; the
    /// other states map to a blank square.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty | Self::Revealed | Self::Hinted => '⬜',
        }
    }

    /// Strength used when merging several observations of one letter
    ///
    /// Keyboard keys show the strongest state seen so far.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Hinted | Self::Revealed => 1,
            Self::Absent => 2,
            Self::Present => 3,
            Self::Correct => 4,
        }
    }
}

/// Calculate the feedback when `guess` is played against `target`
///
/// Comparison is ASCII case-insensitive. Both slices must have the same length.
///
/// # Algorithm
/// 1. First pass: mark exact matches `Correct` and remove them from the pool of
///    target letters
/// 2. Second pass: mark the rest `Present` while the pool still holds that
///    letter, otherwise `Absent`
///
/// Exact matches therefore take priority, and a letter is never scored more
/// often than it occurs in the target.
///
/// # Examples
/// ```
/// use purrdle::core::{LetterState, evaluate};
///
/// let states = evaluate(b"ERASE", b"SPEED");
/// assert_eq!(
///     states,
///     vec![
///         LetterState::Present,
///         LetterState::Absent,
///         LetterState::Absent,
///         LetterState::Present,
///         LetterState::Present,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &[u8], target: &[u8]) -> Vec<LetterState> {
    debug_assert_eq!(guess.len(), target.len(), "guess and target lengths differ");

    let guess: Vec<u8> = guess.iter().map(u8::to_ascii_uppercase).collect();
    let target: Vec<u8> = target.iter().map(u8::to_ascii_uppercase).collect();

    let mut result = vec![LetterState::Absent; guess.len()];
    let mut target_available = letter_counts(&target);

    // First pass: exact position matches
    for (i, (&g, &t)) in guess.iter().zip(&target).enumerate() {
        if g == t {
            result[i] = LetterState::Correct;
            if let Some(count) = target_available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, but letter still unscored in the target
    for (i, &g) in guess.iter().enumerate() {
        if result[i] == LetterState::Correct {
            continue;
        }
        if let Some(count) = target_available.get_mut(&g)
            && *count > 0
        {
            result[i] = LetterState::Present;
            *count -= 1;
        }
    }

    result
}

/// Check whether every cell is `Correct`
#[must_use]
pub fn is_perfect(states: &[LetterState]) -> bool {
    !states.is_empty() && states.iter().all(|&s| s == LetterState::Correct)
}

/// Render a row of states as share symbols
#[must_use]
pub fn to_symbols(states: &[LetterState]) -> String {
    states.iter().map(|s| s.symbol()).collect()
}

fn letter_counts(letters: &[u8]) -> FxHashMap<u8, u8> {
    let mut counts = FxHashMap::default();
    for &ch in letters {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}
