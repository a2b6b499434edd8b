//! Target word representation
//!
//! A Word keeps the display text (which may contain single spaces between
//! letter groups) separately from the board letters that are typed and scored.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A puzzle answer with letter position tracking
///
/// Letters are stored uppercase as ASCII bytes. Board positions index into
/// [`Word::letters`]; spaces in the display text are not board cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<u8>,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only ASCII letters and single spaces, found {0:?}")]
    InvalidCharacter(char),
    #[error("Word must not start, end or repeat spaces")]
    MisplacedSpace,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - There are no letters
    /// - A character is neither an ASCII letter nor a space
    /// - Spaces are doubled (leading and trailing ones are trimmed first)
    ///
    /// # Examples
    /// ```
    /// use purrdle::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    /// assert_eq!(word.len(), 5);
    ///
    /// let phrase = Word::new("ice cream").unwrap();
    /// assert_eq!(phrase.len(), 8);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().trim().to_ascii_uppercase();

        let mut letters = Vec::with_capacity(text.len());
        let mut previous_space = false;
        for ch in text.chars() {
            match ch {
                'A'..='Z' => {
                    letters.push(ch as u8);
                    previous_space = false;
                }
                ' ' if previous_space => return Err(WordError::MisplacedSpace),
                ' ' => previous_space = true,
                other => return Err(WordError::InvalidCharacter(other)),
            }
        }

        if letters.is_empty() {
            return Err(WordError::Empty);
        }

        // Build position map for fast lookup
        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in letters.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            letters,
            char_positions,
        })
    }

    /// Get the display text (uppercase, spaces preserved)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the board letters as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Number of board cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; construction rejects words without letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a board position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter (case-insensitive)
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.char_positions
            .contains_key(&letter.to_ascii_uppercase())
    }

    /// Get all board positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.char_positions
            .get(&letter.to_ascii_uppercase())
            .map_or(&[], Vec::as_slice)
    }

    /// Board positions after which the display text has a space
    ///
    /// Used by renderers to draw word gaps.
    #[must_use]
    pub fn gap_after(&self) -> Vec<usize> {
        let mut gaps = Vec::new();
        let mut seen = 0usize;
        for ch in self.text.chars() {
            if ch == ' ' {
                gaps.push(seen - 1);
            } else {
                seen += 1;
            }
        }
        gaps
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
