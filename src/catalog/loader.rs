//! Catalog loading utilities
//!
//! Provides functions to load a dictionary from a file or fall back to the
//! embedded one.

use super::{CatalogError, WordCatalog, csv::parse_catalog};
use log::info;
use std::fs;
use std::path::Path;

/// Load a catalog from a dictionary file
///
/// Malformed rows are skipped (and logged); the remaining rows keep their
/// source order.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or `CatalogError::Empty`
/// if it contains no usable rows.
///
/// # Examples
/// ```no_run
/// use purrdle::catalog::loader::load_from_file;
///
/// let catalog = load_from_file("data/words.csv").unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordCatalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let catalog = parse_catalog(&content)?;
    info!("loaded {} words from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Load from `path` when given, otherwise use the embedded dictionary
///
/// # Errors
///
/// Propagates errors from [`load_from_file`] or [`WordCatalog::embedded`].
pub fn load_or_embedded(path: Option<&Path>) -> Result<WordCatalog, CatalogError> {
    match path {
        Some(path) => load_from_file(path),
        None => WordCatalog::embedded(),
    }
}
