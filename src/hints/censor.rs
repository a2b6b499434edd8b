//! Hiding the answer inside its own definitions
//!
//! Definitions often mention the word they define. While the game is running
//! every occurrence that starts at a word boundary is masked, so "cranes" in a
//! definition of CRANE reads "_____s".

use crate::core::Word;

const MASK: char = '_';

/// Mask occurrences of `word` in `text` (ASCII case-insensitive)
///
/// # Examples
/// ```
/// use purrdle::core::Word;
/// use purrdle::hints::censor_definition;
///
/// let word = Word::new("purr").unwrap();
/// assert_eq!(
///     censor_definition("Cats purr; purring is soothing", &word),
///     "Cats ____; ____ing is soothing"
/// );
/// ```
#[must_use]
pub fn censor_definition(text: &str, word: &Word) -> String {
    let needle: Vec<char> = word.text().chars().collect();
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    let mut i = 0;
    while i < chars.len() {
        let at_boundary = i == 0 || !chars[i - 1].is_alphanumeric();
        if at_boundary && matches_at(&chars[i..], &needle) {
            out.extend(
                chars[i..i + needle.len()]
                    .iter()
                    .map(|&c| if c == ' ' { ' ' } else { MASK }),
            );
            i += needle.len();
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

fn matches_at(haystack: &[char], needle: &[char]) -> bool {
    haystack.len() >= needle.len()
        && haystack
            .iter()
            .zip(needle)
            .all(|(h, n)| h.to_ascii_uppercase() == *n)
}
