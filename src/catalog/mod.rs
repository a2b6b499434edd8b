//! Word catalog
//!
//! The catalog is the immutable, index-addressable list of puzzle answers and
//! their definitions. It is loaded once at startup and shared read-only.

pub mod csv;
mod embedded;
pub mod loader;

pub use embedded::EMBEDDED_WORDS_CSV;

use crate::core::Word;
use thiserror::Error;

/// Number of definition slots a word can carry
pub const MAX_DEFINITIONS: usize = 3;

/// A single puzzle answer with its metadata
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntry {
    pub word: Word,
    pub definitions: Vec<String>,
    pub quality: f64,
    pub example: Option<String>,
}

impl WordEntry {
    /// Create an entry, keeping at most [`MAX_DEFINITIONS`] definitions
    #[must_use]
    pub fn new(word: Word, mut definitions: Vec<String>, quality: f64) -> Self {
        definitions.truncate(MAX_DEFINITIONS);
        Self {
            word,
            definitions,
            quality,
            example: None,
        }
    }

    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        let example = example.into();
        self.example = (!example.trim().is_empty()).then_some(example);
        self
    }

    /// Definition in slot `index`, or `None` when the slot is blank
    #[must_use]
    pub fn definition(&self, index: usize) -> Option<&str> {
        self.definitions
            .get(index)
            .map(String::as_str)
            .filter(|d| !d.trim().is_empty())
    }
}

/// Errors raised while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("word catalog is empty")]
    Empty,
    #[error("word catalog has {0} entries, more than public identifiers can address")]
    TooLarge(usize),
    #[error("failed to read word catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Immutable ordered list of word entries
///
/// Indices are stable for the lifetime of the process and follow source order.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    entries: Vec<WordEntry>,
}

impl WordCatalog {
    /// Build a catalog from entries in source order
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` for an empty list and
    /// `CatalogError::TooLarge` when indices would not fit in 32 bits.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        if u32::try_from(entries.len()).is_err() {
            return Err(CatalogError::TooLarge(entries.len()));
        }
        Ok(Self { entries })
    }

    /// Catalog parsed from the dictionary compiled into the binary
    ///
    /// # Errors
    /// Fails only if the embedded file yields no usable rows.
    pub fn embedded() -> Result<Self, CatalogError> {
        csv::parse_catalog(EMBEDDED_WORDS_CSV)
    }

    /// Number of entries (always at least one)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get(index)
    }

    /// Index of the first entry whose word matches `word` (case-insensitive)
    #[must_use]
    pub fn position_of(&self, word: &str) -> Option<usize> {
        let wanted = Word::new(word).ok()?;
        self.entries.iter().position(|e| e.word == wanted)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }
}
