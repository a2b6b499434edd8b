//! Delimited-text dictionary reader
//!
//! The dictionary is a header-prefixed, comma-delimited file with columns
//! `word, quality, definition1, definition2, definition3` and an optional
//! `example` column. Quoted fields may contain commas, and a doubled quote
//! inside a quoted field is a literal quote.

use super::{CatalogError, WordCatalog, WordEntry};
use crate::core::{Word, WordError};
use log::{debug, warn};
use thiserror::Error;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Why a dictionary row was left out of the catalog
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("quality {0:?} is not a number")]
    InvalidQuality(String),
}

/// A row that could not be turned into an entry
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the source text
    pub line: usize,
    pub reason: RowError,
}

/// Split one line into fields
///
/// Missing trailing fields are not invented here; a trailing delimiter does
/// produce a final empty field.
///
/// # Examples
/// ```
/// use purrdle::catalog::csv::parse_row;
///
/// let fields = parse_row(r#"crane,4,"a bird, tall","say ""hi""""#);
/// assert_eq!(fields, vec!["crane", "4", "a bird, tall", r#"say "hi""#]);
/// ```
#[must_use]
pub fn parse_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        let mut field = String::new();

        if chars.peek() == Some(&QUOTE) {
            chars.next();
            while let Some(ch) = chars.next() {
                if ch != QUOTE {
                    field.push(ch);
                } else if chars.peek() == Some(&QUOTE) {
                    chars.next();
                    field.push(QUOTE);
                } else {
                    break;
                }
            }
            // Anything between the closing quote and the delimiter is dropped
            let more = chars.by_ref().any(|ch| ch == DELIMITER);
            fields.push(field);
            if !more {
                break;
            }
        } else {
            let mut more = false;
            for ch in chars.by_ref() {
                if ch == DELIMITER {
                    more = true;
                    break;
                }
                field.push(ch);
            }
            fields.push(field);
            if !more {
                break;
            }
        }
    }

    fields
}

/// Turn the fields of one row into an entry
///
/// # Errors
/// Returns `RowError` if the word is not a valid answer or the quality column
/// is not numeric. An empty quality counts as zero.
pub fn parse_entry(fields: &[String]) -> Result<WordEntry, RowError> {
    let column = |i: usize| fields.get(i).map_or("", |f| f.trim());

    let word = Word::new(column(0))?;

    let quality = match column(1) {
        "" => 0.0,
        raw => raw
            .parse::<f64>()
            .ok()
            .filter(|q| q.is_finite())
            .ok_or_else(|| RowError::InvalidQuality(raw.to_string()))?,
    };

    let definitions = (2..5).map(|i| column(i).to_string()).collect();

    Ok(WordEntry::new(word, definitions, quality).with_example(column(5)))
}

/// Read every data row, collecting entries and the rows that were skipped
///
/// Blank lines are ignored and the first non-blank line is the header.
#[must_use]
pub fn read_entries(text: &str) -> (Vec<WordEntry>, Vec<SkippedRow>) {
    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    let rows = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
        .skip(1);

    for (line, text) in rows {
        match parse_entry(&parse_row(text)) {
            Ok(entry) => entries.push(entry),
            Err(reason) => skipped.push(SkippedRow { line, reason }),
        }
    }

    (entries, skipped)
}

/// Parse dictionary text into a catalog, logging skipped rows
///
/// # Errors
/// Returns `CatalogError::Empty` when no row is usable.
pub fn parse_catalog(text: &str) -> Result<WordCatalog, CatalogError> {
    let (entries, skipped) = read_entries(text);

    for row in &skipped {
        warn!("skipping dictionary line {}: {}", row.line, row.reason);
    }
    debug!(
        "parsed {} dictionary entries ({} skipped)",
        entries.len(),
        skipped.len()
    );

    WordCatalog::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_row_plain_fields() {
        assert_eq!(parse_row("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn parse_row_trailing_delimiter_gives_empty_field() {
        assert_eq!(parse_row("a,b,"), vec!["a", "b", ""]);
        assert_eq!(parse_row(""), vec![""]);
    }

    #[test]
    fn parse_row_quoted_delimiter_and_escaped_quote() {
        let fields = parse_row(r#""x, y","he said ""meow""",z"#);
        assert_eq!(fields, vec!["x, y", r#"he said "meow""#, "z"]);
    }

    #[test]
    fn parse_row_quoted_last_field() {
        assert_eq!(parse_row(r#"a,"b""#), vec!["a", "b"]);
    }

    #[test]
    fn parse_row_unterminated_quote_takes_rest_of_line() {
        assert_eq!(parse_row(r#"a,"b,c"#), vec!["a", "b,c"]);
    }

    #[test]
    fn parse_entry_missing_columns_default_to_empty() {
        let entry = parse_entry(&parse_row("crane,3.5,long-necked bird")).unwrap();
        assert_eq!(entry.word.text(), "CRANE");
        assert!((entry.quality - 3.5).abs() < f64::EPSILON);
        assert_eq!(entry.definitions, vec!["long-necked bird", "", ""]);
        assert!(entry.example.is_none());
    }

    #[test]
    fn parse_entry_with_example() {
        let entry =
            parse_entry(&parse_row("crane,5,a,b,c,The crane stood still.")).unwrap();
        assert_eq!(entry.example.as_deref(), Some("The crane stood still."));
    }

    #[test]
    fn parse_entry_rejects_bad_quality_and_word() {
        assert_eq!(
            parse_entry(&parse_row("crane,lots,a")),
            Err(RowError::InvalidQuality("lots".into()))
        );
        assert_eq!(
            parse_entry(&parse_row("crane,NaN,a")),
            Err(RowError::InvalidQuality("NaN".into()))
        );
        assert!(matches!(
            parse_entry(&parse_row("cr4ne,1,a")),
            Err(RowError::InvalidWord(_))
        ));
    }

    #[test]
    fn read_entries_skips_header_blank_lines_and_bad_rows() {
        let text = "word,quality,def1,def2,def3\r\n\
                    crane,5,bird,machine,stretch\r\n\
                    \r\n\
                    b@d,1,x,y,z\r\n\
                    \"ice cream\",4,\"frozen, sweet\",dessert,treat\r\n";
        let (entries, skipped) = read_entries(text);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word.text(), "CRANE");
        assert_eq!(entries[1].word.text(), "ICE CREAM");
        assert_eq!(entries[1].definitions[0], "frozen, sweet");

        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].line, 4);
    }

    #[test]
    fn parse_catalog_header_only_is_empty() {
        assert!(matches!(
            parse_catalog("word,quality,def1,def2,def3\n"),
            Err(CatalogError::Empty)
        ));
    }
}
