//! Identifier conversion for the `id` subcommand

use super::setup::GameSetup;
use anyhow::{Result, bail};

/// Public identifier of a catalog index
///
/// # Errors
///
/// Returns an error if `index` is outside the catalog.
pub fn encode_index(setup: &GameSetup, index: usize) -> Result<String> {
    if index >= setup.catalog.len() {
        bail!(
            "index {index} is out of range, the catalog has {} words",
            setup.catalog.len()
        );
    }
    Ok(setup.codec.encode(index))
}

/// Catalog index and word behind a public identifier
///
/// # Errors
///
/// Returns an error if `id` is malformed or does not belong to this catalog.
pub fn decode_id(setup: &GameSetup, id: &str) -> Result<(usize, String)> {
    let Some(index) = setup.codec.decode(id, setup.catalog.len()) else {
        bail!("{id:?} is not a word id for this catalog");
    };
    let word = setup.catalog.entries()[index].word.text().to_string();
    Ok((index, word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WordCatalog;
    use crate::config::AppConfig;

    #[test]
    fn encode_then_decode() {
        let setup = GameSetup::new(WordCatalog::embedded().unwrap(), AppConfig::default()).unwrap();
        let id = encode_index(&setup, 3).unwrap();
        let (index, word) = decode_id(&setup, &id).unwrap();
        assert_eq!(index, 3);
        assert_eq!(word, setup.catalog.entries()[3].word.text());
    }

    #[test]
    fn out_of_range_and_malformed_are_errors() {
        let setup = GameSetup::new(WordCatalog::embedded().unwrap(), AppConfig::default()).unwrap();
        assert!(encode_index(&setup, setup.catalog.len()).is_err());
        assert!(decode_id(&setup, "not an id").is_err());
    }
}
